use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotcast_api::{ApiState, config::ApiConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    slotcast_api::init_tracing(config.log_level)?;

    // Wire slot provider, stores and notification sink
    let state = ApiState::from_config(&config).await?;
    info!(
        "Booking window is {} days ({} to {})",
        state.window.days(),
        state.window.first_day(),
        state.window.last_day()
    );

    // Start API server
    slotcast_api::start_server(config, state).await?;

    Ok(())
}
