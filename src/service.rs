use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use futures::future;
use futures_util::StreamExt;
use tarpc::context;
use tarpc::server::{self, Channel};
use tarpc::tokio_serde::formats::Json;
use tokio::net::ToSocketAddrs;
use tracing::{debug, info};

use crate::shared_types::*;
use crate::store::Store;

/// Answers `MessageService` calls against one shared store.
#[derive(Clone)]
pub struct MessageServer {
    store: Arc<Store>,
}

impl MessageServer {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

impl MessageService for MessageServer {
    type SubmitMessageFut = future::Ready<Result<SubmitResponse, StoreError>>;
    type GetMessageFut = future::Ready<Result<GetResponse, StoreError>>;

    fn submit_message(self, _: context::Context, req: SubmitRequest) -> Self::SubmitMessageFut {
        info!(key = %req.key, "received submit_message");
        let result = self.store.submit(req.key, req.value).map(|()| SubmitResponse {
            success: true,
            message: SUBMIT_ACK.to_string(),
        });
        future::ready(result)
    }

    fn get_message(self, _: context::Context, req: GetRequest) -> Self::GetMessageFut {
        info!(key = %req.key, "received get_message");
        future::ready(self.store.get(&req.key))
    }
}

/// Bind the JSON-over-TCP listener and return its local address together with
/// the future that serves it. Every request runs on its own task.
pub async fn listen(
    addr: impl ToSocketAddrs,
    store: Arc<Store>,
) -> io::Result<(SocketAddr, impl Future<Output = ()>)> {
    let listener = tarpc::serde_transport::tcp::listen(addr, Json::default).await?;
    let local_addr = listener.local_addr();

    let server = MessageServer::new(store);
    let serving = listener
        // Ignore accept errors.
        .filter_map(|r| future::ready(r.ok()))
        .map(server::BaseChannel::with_defaults)
        .for_each(move |channel| {
            let server = server.clone();
            async move {
                let peer_addr = channel.transport().peer_addr().ok();
                debug!(?peer_addr, "new connection");

                // The executor spawns a task per request.
                let requests = channel.execute(server.serve());
                tokio::spawn(async move {
                    requests.await;
                    debug!(?peer_addr, "client disconnected");
                });
            }
        });

    Ok((local_addr, serving))
}
