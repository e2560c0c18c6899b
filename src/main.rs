//! HTTP server for the timecard engine.
//!
//! Reads `TIMECARD_CONFIG_DIR` (default `./config/default`) and
//! `TIMECARD_ADDR` (default `127.0.0.1:3000`).

use std::env;
use std::error::Error;

use timecard_engine::api::{AppState, create_router};
use timecard_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn init_tracing() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::from_default_env().add_directive("timecard_engine=info".parse()?);
    fmt().with_env_filter(filter).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing()?;

    let config_dir = env::var("TIMECARD_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr = env::var("TIMECARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        shifts = config.settings().shifts.len(),
        leave_codes = config.catalog().len(),
        "Loaded configuration"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
