//! Facade behavior against an in-memory runtime.

mod common;

use common::{finished_state, MockRuntime};
use openhands_client::{Event, OpenHandsClient};
use tempfile::tempdir;

fn client_with(runtime: MockRuntime, workspace: &std::path::Path) -> OpenHandsClient {
    OpenHandsClient::builder()
        .provider("deepseek_local")
        .workspace_dir(workspace)
        .with_runtime(Box::new(runtime))
        .build()
        .expect("client must build")
}

#[tokio::test]
async fn write_then_read_roundtrips() {
    let ws = tempdir().unwrap();
    let mut client = client_with(MockRuntime::new(), ws.path());
    client.start().await.unwrap();

    let content = "fn main() {\n    println!(\"hello\");\n}\n";
    assert!(client.write_file("src/main.rs", content).await.unwrap());
    assert_eq!(client.read_file("src/main.rs").await.unwrap(), content);

    // Parent directories are created locally before the action is submitted.
    assert!(ws.path().join("src").is_dir());
}

#[tokio::test]
async fn run_command_unwraps_output_text() {
    let ws = tempdir().unwrap();
    let mut client = client_with(MockRuntime::new(), ws.path());
    client.start().await.unwrap();

    let output = client.run_command("echo hi").await.unwrap();
    assert_eq!(output, "ran: echo hi");
}

#[tokio::test]
async fn read_missing_file_falls_back_to_string_form() {
    let ws = tempdir().unwrap();
    let mut client = client_with(MockRuntime::new(), ws.path());
    client.start().await.unwrap();

    let content = client.read_file("nope.txt").await.unwrap();
    assert!(content.contains("File not found"));
}

#[tokio::test]
async fn browse_url_returns_all_three_fields() {
    let ws = tempdir().unwrap();
    let mut client = client_with(MockRuntime::new(), ws.path());
    client.start().await.unwrap();

    let page = client.browse_url("https://example.com").await.unwrap();
    assert_eq!(page.url.as_deref(), Some("https://example.com"));
    assert!(page.content.contains("example.com"));
    assert!(page.screenshot.is_none());
}

#[tokio::test]
async fn browse_url_fallback_populates_content_only() {
    let ws = tempdir().unwrap();
    let mut client = client_with(MockRuntime::new().without_browser(), ws.path());
    client.start().await.unwrap();

    let page = client.browse_url("https://example.com").await.unwrap();
    assert_eq!(page.url, None);
    assert_eq!(page.screenshot, None);
    assert_eq!(page.content, "browser unavailable");
}

#[tokio::test]
async fn calls_before_start_fail() {
    let ws = tempdir().unwrap();
    let client = client_with(MockRuntime::new(), ws.path());

    let err = client.run_command("ls").await.unwrap_err();
    assert!(err.to_string().contains("not started"), "got: {err}");
}

#[tokio::test]
async fn stop_without_start_is_a_noop() {
    let ws = tempdir().unwrap();
    let mut client = client_with(MockRuntime::new(), ws.path());
    client.stop().await.unwrap();
    // And stopping twice after a start is fine too.
    client.start().await.unwrap();
    client.stop().await.unwrap();
    client.stop().await.unwrap();
}

#[tokio::test]
async fn ask_returns_final_state() {
    let ws = tempdir().unwrap();
    let mut client = client_with(MockRuntime::new(), ws.path());
    client.start().await.unwrap();

    let state = client.ask("create hello.py", 10).await.unwrap();
    assert!(state.is_finished());
    assert!(!state.history.is_empty());
}

#[tokio::test]
async fn code_task_extracts_generated_code() {
    let ws = tempdir().unwrap();
    let mut client = client_with(MockRuntime::new(), ws.path());
    client.start().await.unwrap();

    let code = client.code_task("print hi", "python", None).await.unwrap();
    assert_eq!(code, "print(\"hi\")");
}

#[tokio::test]
async fn code_task_saves_to_workspace_file() {
    let ws = tempdir().unwrap();
    let mut client = client_with(MockRuntime::new(), ws.path());
    client.start().await.unwrap();

    let code = client
        .code_task("print hi", "python", Some("hello.py"))
        .await
        .unwrap();
    assert_eq!(client.read_file("hello.py").await.unwrap(), code);
}

#[tokio::test]
async fn code_task_without_fence_yields_empty_string() {
    let ws = tempdir().unwrap();
    let runtime = MockRuntime::new()
        .with_final_state(finished_state(vec![Event::new("agent", "no code, sorry")]));
    let mut client = client_with(runtime, ws.path());
    client.start().await.unwrap();

    let code = client.code_task("print hi", "python", None).await.unwrap();
    assert_eq!(code, "");
}
