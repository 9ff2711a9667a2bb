use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the fmt subscriber shared by the server, gateway and client
/// binaries. `RUST_LOG` overrides the filter; otherwise per-call RPC logs and
/// the gateway's request traces are shown at info.
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}
