//! Front-desk server binary.
//!
//! Set `MINT_CONFIG` to use a config file other than the platform default.

use std::path::PathBuf;

use front_desk::{init_tracing, run, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Mint Salon front desk");

    let config_path = std::env::var_os("MINT_CONFIG").map(PathBuf::from);
    let config = AppConfig::load(config_path)?;
    info!(
        addr = %config.bind_address(),
        salon = %config.salon.name,
        seed_demo = config.data.seed_demo,
        "Configuration loaded"
    );

    run(config).await?;
    Ok(())
}
