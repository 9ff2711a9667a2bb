use std::sync::Arc;

use clap::Parser;
use tokio::{select, signal};
use tracing::info;

use message_store::config::ServerConfig;
use message_store::logging::init_logging_default;
use message_store::{service, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging_default();
    let cfg = ServerConfig::parse();

    // One store for the life of the process; nothing survives a restart.
    let store = Arc::new(Store::new());
    let (addr, serving) = service::listen(cfg.listen.as_str(), store).await?;
    info!(%addr, "rpc server starting");

    select! {
        _ = serving => {}
        _ = signal::ctrl_c() => info!("shutting down"),
    }

    Ok(())
}
