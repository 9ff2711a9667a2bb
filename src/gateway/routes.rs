use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::client::StoreClient;
use crate::config::ErrorMapping;
use crate::shared_types::{GetResponse, SubmitResponse};

use super::errors::GatewayError;

const FORM_PAGE: &str = include_str!("../../templates/form.html");

#[derive(Clone)]
pub struct GatewayState {
    pub client: StoreClient,
    pub error_mapping: ErrorMapping,
}

/// Missing fields decode as empty strings and are rejected by the store.
#[derive(Debug, Deserialize)]
struct SubmitForm {
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: String,
}

async fn index() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// The body is read as JSON whatever its content type.
async fn submit(
    State(state): State<GatewayState>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, GatewayError> {
    let form: SubmitForm =
        serde_json::from_slice(&body).map_err(|e| GatewayError::BadRequest(e.to_string()))?;

    state
        .client
        .submit(&form.key, &form.value)
        .await
        .map(Json)
        .map_err(|e| GatewayError::Rpc(e, state.error_mapping))
}

async fn get_message(
    State(state): State<GatewayState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>, GatewayError> {
    state
        .client
        .get(&key)
        .await
        .map(Json)
        .map_err(|e| GatewayError::Rpc(e, state.error_mapping))
}

async fn missing_key() -> GatewayError {
    GatewayError::BadRequest("key is required".to_string())
}

pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/submit", post(submit))
        .route("/get/", get(missing_key))
        .route("/get/:key", get(get_message))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
