use axum::{extract::State, response::Html};
use chrono::Local;

use crate::state::AppState;

const ENDPOINTS: [(&str, &str, &str); 4] = [
    ("GET", "/", "This page"),
    ("GET", "/api/test", "Test API endpoint"),
    ("POST", "/api/analyze-business", "Business analysis (12 sections)"),
    ("GET", "/api/health", "Health check"),
];

/// GET /
/// Human-readable status page.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_status_page(
        state.config.port,
        state.config.has_api_key(),
        &Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    ))
}

fn render_status_page(port: u16, api_key_present: bool, server_time: &str) -> String {
    let api_key = if api_key_present {
        "✅ Present"
    } else {
        "❌ Missing"
    };

    let endpoints: String = ENDPOINTS
        .iter()
        .map(|(method, path, description)| {
            format!("            <li><strong>{method} {path}</strong> - {description}</li>\n")
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Marshall AI Model Server</title>
  <style>
    body {{
      font-family: Arial, sans-serif;
      padding: 40px;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      text-align: center;
    }}
    .container {{
      background: rgba(255, 255, 255, 0.1);
      padding: 30px;
      border-radius: 15px;
      max-width: 800px;
      margin: 0 auto;
    }}
    .status {{
      background: rgba(0, 255, 0, 0.2);
      padding: 10px;
      border-radius: 5px;
      margin: 20px 0;
    }}
    .endpoints {{
      text-align: left;
      background: rgba(255, 255, 255, 0.1);
      padding: 20px;
      border-radius: 10px;
      margin-top: 30px;
    }}
    a {{ color: #4adeff; margin-right: 15px; }}
  </style>
</head>
<body>
  <div class="container">
    <h1>🚀 Marshall AI Model Server</h1>
    <div class="status">
      <h2>✅ Server is running successfully!</h2>
      <p>Port: {port}</p>
      <p>API Key: {api_key}</p>
    </div>
    <div class="endpoints">
      <h3>Available Endpoints:</h3>
      <ul>
{endpoints}      </ul>
      <h3>Test Links:</h3>
      <p>
        <a href="/api/test">Test API</a>
        <a href="/api/health">Health Check</a>
      </p>
    </div>
    <div style="margin-top: 30px; font-size: 14px; opacity: 0.8;">
      <p>Server Time: {server_time}</p>
    </div>
  </div>
</body>
</html>
"#
    )
}
