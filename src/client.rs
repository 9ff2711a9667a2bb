use std::future::Future;
use std::time::{Duration, SystemTime};

use tarpc::client::{self, RpcError};
use tarpc::context;
use tarpc::tokio_serde::formats::Json;
use thiserror::Error;
use tokio::net::ToSocketAddrs;
use tracing::debug;

use crate::shared_types::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("deadline exceeded")]
    DeadlineExceeded,
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for ClientError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidArgument(msg) => ClientError::InvalidArgument(msg),
            StoreError::NotFound(msg) => ClientError::NotFound(msg),
        }
    }
}

impl From<RpcError> for ClientError {
    fn from(e: RpcError) -> Self {
        match e {
            RpcError::DeadlineExceeded => ClientError::DeadlineExceeded,
            other => ClientError::Unavailable(other.to_string()),
        }
    }
}

/// A single long-lived connection to the store service. Clones share it.
#[derive(Clone)]
pub struct StoreClient {
    inner: MessageServiceClient,
    timeout: Duration,
}

impl StoreClient {
    pub async fn connect(addr: impl ToSocketAddrs, timeout: Duration) -> Result<Self, ClientError> {
        let transport = tarpc::serde_transport::tcp::connect(addr, Json::default)
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))?;
        let inner = MessageServiceClient::new(client::Config::default(), transport).spawn();
        Ok(Self { inner, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn submit(&self, key: &str, value: &str) -> Result<SubmitResponse, ClientError> {
        debug!(key, "submit_message");
        let req = SubmitRequest {
            key: key.to_string(),
            value: value.to_string(),
        };
        self.call(self.inner.submit_message(self.context(), req)).await
    }

    pub async fn get(&self, key: &str) -> Result<GetResponse, ClientError> {
        debug!(key, "get_message");
        let req = GetRequest {
            key: key.to_string(),
        };
        self.call(self.inner.get_message(self.context(), req)).await
    }

    fn context(&self) -> context::Context {
        let mut ctx = context::current();
        ctx.deadline = SystemTime::now() + self.timeout;
        ctx
    }

    /// Bound the call by the timeout on this side too, so a server that never
    /// answers still yields `DeadlineExceeded`.
    async fn call<T>(
        &self,
        fut: impl Future<Output = Result<Result<T, StoreError>, RpcError>>,
    ) -> Result<T, ClientError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(reply) => Ok(reply??),
            Err(_) => Err(ClientError::DeadlineExceeded),
        }
    }
}
