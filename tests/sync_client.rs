//! Synchronous wrapper behavior: dedicated event loop, start/stop semantics.

mod common;

use common::MockRuntime;
use openhands_client::{ClientBuilder, SyncClient};
use tempfile::tempdir;

fn sync_client_with(runtime: MockRuntime, workspace: &std::path::Path) -> SyncClient {
    SyncClient::from_builder(
        ClientBuilder::new()
            .provider("deepseek_local")
            .workspace_dir(workspace)
            .with_runtime(Box::new(runtime)),
    )
    .expect("sync client must build")
}

#[test]
fn run_command_before_start_fails() {
    let ws = tempdir().unwrap();
    let client = sync_client_with(MockRuntime::new(), ws.path());

    let err = client.run_command("ls -la").unwrap_err();
    assert!(err.to_string().contains("not started"), "got: {err}");
}

#[test]
fn stop_without_start_is_a_noop() {
    let ws = tempdir().unwrap();
    let mut client = sync_client_with(MockRuntime::new(), ws.path());
    client.stop().unwrap();
}

#[test]
fn write_then_read_roundtrips() {
    let ws = tempdir().unwrap();
    let mut client = sync_client_with(MockRuntime::new(), ws.path());
    client.start().unwrap();

    assert!(client.write_file("notes/todo.txt", "ship it").unwrap());
    assert_eq!(client.read_file("notes/todo.txt").unwrap(), "ship it");

    client.stop().unwrap();
}

#[test]
fn calls_run_sequentially_on_one_loop() {
    let ws = tempdir().unwrap();
    let mut client = sync_client_with(MockRuntime::new(), ws.path());
    client.start().unwrap();

    for i in 0..5 {
        let output = client.run_command(&format!("echo {i}")).unwrap();
        assert_eq!(output, format!("ran: echo {i}"));
    }
}

#[test]
fn drop_releases_runtime_without_panicking() {
    let ws = tempdir().unwrap();
    let mut client = sync_client_with(MockRuntime::new(), ws.path());
    client.start().unwrap();
    drop(client);
}
