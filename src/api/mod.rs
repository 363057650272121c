//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod home;
pub mod middleware;
pub mod router;

pub use router::create_router;
