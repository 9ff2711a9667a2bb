use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUBMIT_ACK: &str = "Message submitted successfully";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetRequest {
    pub key: String,
}

/// A stored record, returned as-is by `get_message`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetResponse {
    pub key: String,
    pub value: String,
}

pub type Record = GetResponse;

/// Coded errors the store service returns over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
}

#[tarpc::service]
pub trait MessageService {
    /// Store a value under a key, overwriting any previous value
    async fn submit_message(req: SubmitRequest) -> Result<SubmitResponse, StoreError>;
    /// Get the record stored under a key
    async fn get_message(req: GetRequest) -> Result<GetResponse, StoreError>;
}
