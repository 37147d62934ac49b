//! Delegate a coding task to the agent and extract the generated code.
//!
//! Run:
//!   cargo run --example code_generation

use openhands_client::OpenHandsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut client = OpenHandsClient::new(Some("deepseek_local")).await?;
    client.start().await?;

    let code = client
        .code_task(
            "calculate the first 20 Fibonacci numbers",
            "python",
            Some("fibonacci.py"),
        )
        .await?;

    if code.is_empty() {
        println!("The agent produced no fenced code block.");
    } else {
        println!("Generated code (saved to fibonacci.py):\n\n{code}");
    }

    client.stop().await?;
    Ok(())
}
