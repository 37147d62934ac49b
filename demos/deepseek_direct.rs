//! Direct streaming chat with a local DeepSeek model, no agent runtime.
//!
//! Prerequisites: `ollama serve` with the model pulled:
//!   ollama pull deepseek-coder-v2:16b
//!
//! Run:
//!   cargo run --example deepseek_direct

use futures::TryStreamExt;
use std::io::Write;

use openhands_client::{ChatMessage, OllamaClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = OllamaClient::local("deepseek-coder-v2:16b")?;

    let messages = vec![
        ChatMessage::system("You are a concise coding assistant."),
        ChatMessage::user("Write a one-line Rust expression that sums 1..=100."),
    ];

    let mut stream = client.chat_stream(&messages).await?;
    while let Some(delta) = stream.try_next().await? {
        print!("{delta}");
        std::io::stdout().flush()?;
    }
    println!();

    Ok(())
}
