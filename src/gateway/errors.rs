use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::client::ClientError;
use crate::config::ErrorMapping;

/// Errors answered by the gateway, with the error text as a plain body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Rpc(ClientError, ErrorMapping),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Rpc(_, ErrorMapping::Collapsed) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Rpc(e, ErrorMapping::Typed) => match e {
                ClientError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                ClientError::NotFound(_) => StatusCode::NOT_FOUND,
                ClientError::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
                ClientError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        match self {
            GatewayError::BadRequest(_) => warn!(error = %msg, "rejected request"),
            GatewayError::Rpc(..) => error!(error = %msg, "rpc call failed"),
        }
        (status, msg).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_mapping_is_always_500() {
        for e in [
            ClientError::InvalidArgument("x".into()),
            ClientError::NotFound("x".into()),
            ClientError::DeadlineExceeded,
            ClientError::Unavailable("x".into()),
        ] {
            assert_eq!(
                GatewayError::Rpc(e, ErrorMapping::Collapsed).status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn typed_mapping_keeps_the_kind() {
        let typed = |e| GatewayError::Rpc(e, ErrorMapping::Typed).status();
        assert_eq!(typed(ClientError::InvalidArgument("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(typed(ClientError::NotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(typed(ClientError::DeadlineExceeded), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(typed(ClientError::Unavailable("x".into())), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn body_text_is_the_error_text() {
        let e = GatewayError::Rpc(
            ClientError::NotFound("message not found for key: k".into()),
            ErrorMapping::Collapsed,
        );
        assert_eq!(e.to_string(), "not found: message not found for key: k");
        assert_eq!(
            GatewayError::BadRequest("key is required".into()).to_string(),
            "key is required"
        );
    }

    #[test]
    fn bad_request_is_400() {
        assert_eq!(
            GatewayError::BadRequest("eof".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
