//! HTTP/JSON front end that forwards to the store service over RPC.

pub mod errors;
pub mod routes;

pub use errors::GatewayError;
pub use routes::{build_router, GatewayState};

use tokio::net::{TcpListener, ToSocketAddrs};
use tracing::info;

/// Bind `addr` and serve the gateway until the listener fails.
pub async fn serve(addr: impl ToSocketAddrs, state: GatewayState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "web server starting");
    axum::serve(listener, build_router(state)).await
}
