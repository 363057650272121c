//! Public landing page

use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Account Portal</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 0; display: flex; min-height: 100vh; align-items: center; justify-content: center; background: #f6f7f9; color: #1f2933; }
    main { max-width: 32rem; padding: 2rem; text-align: center; }
    h1 { font-size: 2rem; margin-bottom: 0.5rem; }
  </style>
</head>
<body>
  <main>
    <h1>Welcome</h1>
    <p>Your account portal is up and running.</p>
  </main>
</body>
</html>
"#;

/// Same page for every visitor; no authentication required
pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
