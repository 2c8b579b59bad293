//! Process entry point: tracing bootstrap, configuration, server start.

use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use userdir::outbound::persistence::StoreConfig;
use userdir::server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Store settings are read once here and passed by value from then on.
    let store = StoreConfig::from_env();
    let bind_addr: SocketAddr = ([0, 0, 0, 0], 3000).into();

    let server = create_server(ServerConfig::new(bind_addr, store))?;
    info!(%bind_addr, "user directory listening");
    server.await
}
