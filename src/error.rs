use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoutError {
    #[error("walletAddress is required")]
    MissingWalletAddress,

    #[error("Database query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Invalid transaction value: {0}")]
    InvalidValue(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl PayoutError {
    /// Message exposed to callers. Causes stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            PayoutError::MissingWalletAddress => "walletAddress is required",
            PayoutError::Database(_) => "Database query failed",
            _ => "Internal server error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            PayoutError::MissingWalletAddress => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for PayoutError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_address_is_a_client_error() {
        let err = PayoutError::MissingWalletAddress;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "walletAddress is required");
    }

    #[test]
    fn database_errors_hide_their_cause() {
        let err = PayoutError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Database query failed");
    }

    #[test]
    fn anything_else_is_an_internal_error() {
        let err = PayoutError::Internal("boom".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }
}
