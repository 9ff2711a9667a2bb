use clap::Parser;
use tracing::{error, info};

use message_store::config::{ClientCommand, ClientConfig, DEFAULT_CLIENT_TIMEOUT_MS};
use message_store::logging::init_logging_default;
use message_store::{ClientError, StoreClient};

const DEMO_KEY: &str = "N250";
const DEMO_VALUE: &str = "N250 Gatotkaca adalah pesawat terbang pertama buatan Indonesia. \
Pesawat ini dirancang dan diprakarsai oleh B.J. Habibie, seorang ilmuan dirgantara yang diakui di dunia. \
N250 Gatotkaca diproduksi oleh Industri Pesawat Terbang Nusantara (IPTN), \
yang kemudian berubah nama menjadi PT Dirgantara Indonesia.";

async fn run(client: &StoreClient, command: ClientCommand) -> Result<(), ClientError> {
    match command {
        ClientCommand::Submit { key, value } => {
            let resp = client.submit(&key, &value).await?;
            info!(?resp, "submit message response");
        }
        ClientCommand::Get { key } => {
            let resp = client.get(&key).await?;
            info!(?resp, "get message response");
        }
        ClientCommand::Demo => {
            let resp = client.submit(DEMO_KEY, DEMO_VALUE).await?;
            info!(?resp, "submit message response");
            let resp = client.get(DEMO_KEY).await?;
            info!(?resp, "get message response");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging_default();
    let cfg = ClientConfig::parse();

    let timeout = cfg.store.timeout_or(DEFAULT_CLIENT_TIMEOUT_MS);
    let client = StoreClient::connect(cfg.store.addr.as_str(), timeout)
        .await
        .inspect_err(|e| error!(store = %cfg.store.addr, "did not connect: {e}"))?;

    let command = cfg.command.unwrap_or(ClientCommand::Demo);
    run(&client, command)
        .await
        .inspect_err(|e| error!("call failed: {e}"))?;
    Ok(())
}
