//! Browse a URL through the runtime and inspect the snapshot.
//!
//! Run:
//!   cargo run --example browser_automation

use openhands_client::OpenHandsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut client = OpenHandsClient::new(Some("deepseek_local")).await?;
    client.start().await?;

    let page = client.browse_url("https://example.com").await?;
    println!("URL: {:?}", page.url);
    println!("Screenshot captured: {}", page.screenshot.is_some());

    let preview: String = page.content.chars().take(500).collect();
    println!("Content preview:\n{preview}");

    client.stop().await?;
    Ok(())
}
