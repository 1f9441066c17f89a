//! Basic outlet control against a single WattBox
//!
//! Usage: `cargo run --example basic_usage -- <address> <username> <password> [outlet]`
//!
//! The address needs a trailing slash, e.g. `192.168.1.20/`.

use wattbox_api::logging::{init_logging, LoggingMode};
use wattbox_api::{Response, WattBoxClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingMode::Development)?;

    let mut args = std::env::args().skip(1);
    let address = args.next().unwrap_or_else(|| "192.168.1.20/".to_string());
    let username = args.next().unwrap_or_else(|| "wattbox".to_string());
    let password = args.next().unwrap_or_else(|| "wattbox".to_string());
    let outlet: i32 = match args.next() {
        Some(outlet) => outlet.parse()?,
        None => 1,
    };

    println!("⚡ WattBox - Basic Usage Example");
    println!("================================");

    let client = WattBoxClient::new(&username, &password, &address)?;
    println!("Device base URL: {}", client.network_path());

    match client.get_info().await? {
        Response::Record(info) => {
            println!("\n📋 Device info");
            println!("   Host name: {}", info.host_name.as_deref().unwrap_or("-"));
            println!("   Model:     {}", info.hardware_version.as_deref().unwrap_or("-"));
            println!("   Serial:    {}", info.serial_number.as_deref().unwrap_or("-"));
            if let Some(voltage) = info.voltage() {
                println!("   Voltage:   {:.1} V", voltage);
            }
            if let Some(power) = info.power() {
                println!("   Power:     {:.0} W", power);
            }
        }
        Response::Raw(raw) => {
            println!("\n⚠️  Device info was not text ({} bytes)", raw.body.len());
        }
    }

    println!("\n🔌 Outlets");
    if let Some(status) = client.get_status().await?.into_record() {
        for outlet in status.outlets() {
            println!("   {:>2}. {:<20} {:?}", outlet.index, outlet.name, outlet.state);
        }
    }

    println!("\n🔄 Power-cycling outlet {}...", outlet);
    let status = client.power_reset(outlet).await?;
    if let Some(status) = status.record() {
        if let Some(current) = status.outlets().iter().find(|o| o.index as i32 == outlet) {
            println!("   {} is now {:?}", current.name, current.state);
        }
    }

    Ok(())
}
