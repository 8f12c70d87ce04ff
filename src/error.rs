use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ScrawlError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("secret_key must be at least 64 bytes")]
    InvalidSecretKey,

    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for ScrawlError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ScrawlError::Unauthorized => (StatusCode::UNAUTHORIZED, "401 Unauthorized"),
            // Everything else surfaces as a generic server error; details stay in the logs.
            ScrawlError::Database(_) | ScrawlError::Config(_) | ScrawlError::InvalidSecretKey => {
                (StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error")
            }
        };
        (status, Html(body)).into_response()
    }
}
