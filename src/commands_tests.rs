use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

const LOGIN: &str = r#"<html>
<head><title>Log in</title><link rel="stylesheet" href="/app.css"></head>
<body>
  <div class="login-panel">
    <input type="text" placeholder="Username">
    <input type="text" placeholder="Password">
    <button id="login">Log in</button>
  </div>
</body>
</html>"#;

fn page() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(LOGIN.as_bytes()).unwrap();
    file
}

async fn run(command: Commands) -> anyhow::Result<String> {
    execute(command, &Config::default()).await
}

#[tokio::test]
async fn test_summarize() {
    let file = page();
    let output = run(Commands::Summarize { file: file.path().to_path_buf() }).await.unwrap();
    assert!(output.starts_with("Log in\n\n📝 Data Entry Fields:\n"));
    assert!(output.contains("  • Username (no-id) [Username]\n"));
}

#[tokio::test]
async fn test_html_strips_stylesheets() {
    let file = page();
    let output = run(Commands::Html { file: file.path().to_path_buf() }).await.unwrap();
    assert!(output.contains("login-panel"));
    assert!(!output.contains("app.css"));
}

#[tokio::test]
async fn test_find_with_container() {
    let file = page();
    let output = run(Commands::Find {
        file: file.path().to_path_buf(),
        text: "password".to_string(),
        selector: Some(".login-panel".to_string()),
    })
    .await
    .unwrap();
    assert!(output.contains(".login-panel input[placeholder=\"Password\"]"));
}

#[tokio::test]
async fn test_inspect_uses_config_context_when_unset() {
    let file = page();
    let output = run(Commands::Inspect {
        file: file.path().to_path_buf(),
        selector: "#login".to_string(),
        context: None,
    })
    .await
    .unwrap();
    assert!(output.contains("Parent 1: <div class=\"login-panel\">\n"));
    assert!(output.contains("Parent 2: <body>\n"));
    assert!(!output.contains("Parent 3"));
}

#[tokio::test]
async fn test_selectors_positional() {
    let file = page();
    let output = run(Commands::Selectors {
        file: file.path().to_path_buf(),
        selector: "input".to_string(),
    })
    .await
    .unwrap();
    assert!(output.starts_with("Element 1: <input placeholder=\"Username\" type=\"text\">\n"));
    assert!(output.contains(".login-panel input[type=\"text\"]:nth-of-type(1)"));
    assert!(output.contains(".login-panel input[type=\"text\"]:nth-of-type(2)"));
}

#[tokio::test]
async fn test_call_reports_driver_failure() {
    let file = page();
    let clicked = run(Commands::Call {
        file: file.path().to_path_buf(),
        params: r#"{"action": "button_click", "selector": "Log in"}"#.to_string(),
    })
    .await
    .unwrap();
    assert_eq!(clicked, "clicked Log in");

    let err = run(Commands::Call {
        file: file.path().to_path_buf(),
        params: r#"{"action": "button_click", "selector": "Sign up"}"#.to_string(),
    })
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "unknown selector=\"Sign up\"");
}

#[tokio::test]
async fn test_call_rejects_bad_json() {
    let file = page();
    let result = run(Commands::Call {
        file: file.path().to_path_buf(),
        params: "{action".to_string(),
    })
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_call_rejects_non_object_params() {
    let file = page();
    let err = run(Commands::Call {
        file: file.path().to_path_buf(),
        params: "[\"visit\"]".to_string(),
    })
    .await
    .unwrap_err();
    assert!(err.to_string().contains("Parameters must be an object"));
}

#[tokio::test]
async fn test_missing_file_names_path() {
    let err = run(Commands::Summarize { file: "/nonexistent/page.html".into() })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/page.html"));
}

#[tokio::test]
async fn test_tools_listing() {
    let table = run(Commands::Tools { json: false }).await.unwrap();
    assert_eq!(table.lines().count(), 10);
    assert!(table.lines().any(|line| line.starts_with("browser ")));

    let json = run(Commands::Tools { json: true }).await.unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 10);
    assert!(parsed.iter().all(|tool| tool["input_schema"]["type"] == "object"));
}
