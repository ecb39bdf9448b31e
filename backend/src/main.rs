//! Backend entry-point: loads settings, seeds the store and serves the REST API.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use shiftplan::inbound::http::health::HealthState;
use shiftplan::server::{ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let (host, port) = settings.bind_addr();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &settings)?;
    info!(%host, port, "shiftplan listening");
    server.await
}
