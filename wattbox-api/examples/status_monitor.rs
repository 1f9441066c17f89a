//! Watch outlet status with the recurring poller
//!
//! Usage: `cargo run --example status_monitor -- <address> <username> <password> [seconds]`
//!
//! Prints every status update until Ctrl+C.

use std::time::Duration;

use wattbox_api::logging::{init_logging, LoggingMode};
use wattbox_api::{OutletState, WattBoxClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingMode::Development)?;

    let mut args = std::env::args().skip(1);
    let address = args.next().unwrap_or_else(|| "192.168.1.20/".to_string());
    let username = args.next().unwrap_or_else(|| "wattbox".to_string());
    let password = args.next().unwrap_or_else(|| "wattbox".to_string());
    let seconds: u64 = match args.next() {
        Some(seconds) => seconds.parse()?,
        None => 5,
    };

    println!("📡 WattBox - Status Monitor");
    println!("===========================");
    println!("Polling {} every {}s, press Ctrl+C to stop\n", address, seconds);

    let client = WattBoxClient::new(&username, &password, &address)?;

    client.on_status(|status| {
        let Some(status) = status.record() else {
            println!("⚠️  Received a non-text status response");
            return;
        };

        let line: Vec<String> = status
            .outlets()
            .iter()
            .map(|outlet| {
                let marker = match outlet.state {
                    OutletState::On => "●",
                    OutletState::Off => "○",
                    OutletState::Unknown => "?",
                };
                format!("{} {}", marker, outlet.name)
            })
            .collect();
        println!("🔌 {}", line.join("  "));
    });

    client.on_error(|error| {
        eprintln!("❌ {}", error);
    });

    client.subscribe_status(Duration::from_secs(seconds))?;

    tokio::signal::ctrl_c().await?;

    client.unsubscribe_status();
    println!("\n👋 Stopped polling");

    Ok(())
}
