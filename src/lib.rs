pub mod client;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod service;
pub mod shared_types;
pub mod store;

pub use client::{ClientError, StoreClient};
pub use shared_types::*;
pub use store::Store;
