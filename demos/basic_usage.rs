//! Basic usage: run commands and work with workspace files.
//!
//! Requires an OpenHands server (default http://localhost:3000, override with
//! OPENHANDS_SERVER_URL) and a local DeepSeek model served by Ollama.
//!
//! Run:
//!   cargo run --example basic_usage

use openhands_client::OpenHandsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut client = OpenHandsClient::new(Some("deepseek_local")).await?;
    client.start().await?;

    let output = client.run_command("echo 'Hello from OpenHands!'").await?;
    println!("Command output: {output}");

    client
        .write_file("hello.txt", "Hello, workspace!\n")
        .await?;
    let content = client.read_file("hello.txt").await?;
    println!("File content: {content}");

    client.stop().await?;
    Ok(())
}
