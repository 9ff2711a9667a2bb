use clap::Parser;
use tracing::{error, info};

use message_store::config::{GatewayConfig, DEFAULT_GATEWAY_TIMEOUT_MS};
use message_store::gateway::{self, GatewayState};
use message_store::logging::init_logging_default;
use message_store::StoreClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging_default();
    let cfg = GatewayConfig::parse();

    let client = StoreClient::connect(
        cfg.store.addr.as_str(),
        cfg.store.timeout_or(DEFAULT_GATEWAY_TIMEOUT_MS),
    )
    .await
    .inspect_err(|e| error!(store = %cfg.store.addr, "did not connect: {e}"))?;
    info!(
        store = %cfg.store.addr,
        timeout = ?client.timeout(),
        mapping = ?cfg.error_mapping,
        "connected to store"
    );

    let state = GatewayState {
        client,
        error_mapping: cfg.error_mapping,
    };
    gateway::serve(cfg.listen.as_str(), state).await?;
    Ok(())
}
