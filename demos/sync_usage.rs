//! Synchronous wrapper: the same facade without managing an event loop.
//!
//! Run:
//!   cargo run --example sync_usage

use openhands_client::create_client;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut client = create_client(Some("deepseek_local"))?;
    client.start()?;

    let output = client.run_command("uname -a")?;
    println!("System: {output}");

    client.write_file("sync.txt", "written synchronously\n")?;
    println!("Read back: {}", client.read_file("sync.txt")?);

    client.stop()?;
    Ok(())
}
