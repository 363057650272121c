//! Infrastructure layer - process-level setup

pub mod logging;

pub use logging::init_logging;
