// Module declarations for the application's core components
pub mod config; // Configuration loaded once from the environment
pub mod notify; // Webhook status notifications
pub mod options; // Command line options parsing
pub mod planner; // Discharge current and window computation
pub mod prelude; // Common imports and types
pub mod signing; // SolisCloud HMAC request signing
pub mod solis; // SolisCloud API client

// Get the package version from Cargo.toml
pub const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::prelude::*;
use crate::notify::Notifier;
use crate::solis::SolisClient;

/// Runs one discharge-management pass: read the SOC, compute a plan, push it
/// to the inverter and report each decision point to the webhook. The process
/// is expected to be invoked periodically by an external scheduler.
pub async fn run(config: &Config, hours: f64) -> Result<()> {
    let solis = SolisClient::new(config);
    let notifier = Notifier::new(config);

    let soc = match solis.battery_soc().await {
        Some(soc) => soc,
        None => {
            error!("Unable to retrieve SOC.");
            notifier.send("Unable to retrieve SOC.").await;
            return Ok(());
        }
    };

    info!("Current Battery SOC: {}%", soc);
    notifier
        .send(&format!("Current Battery SOC: {}%", soc))
        .await;

    if soc <= planner::RESERVE_SOC_PERCENT {
        warn!("SOC is too low for discharge.");
        notifier.send("SOC is too low for discharge.").await;
        return Ok(());
    }

    info!("Setting inverter parameters...");
    let plan = planner::plan(soc, hours);
    let response = solis.set_discharge_schedule(&plan).await?;
    notifier
        .send(&format!(
            "Discharge Amps: {}, Discharge Time: {}",
            plan.discharge_current_amps, plan.discharge_time_range
        ))
        .await;

    let message = solis::control_response_message(&response);
    info!("Response: {}", message);
    notifier.send(&format!("Response: {}", message)).await;

    Ok(())
}
