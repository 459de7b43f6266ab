use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use results::ResultsError;
use serde_json::json;
use std::fmt;
use upstream::UpstreamError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Upstream(UpstreamError),
    Results(ResultsError),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream(e) => write!(f, "Upstream error: {}", e),
            Self::Results(e) => write!(f, "Results error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl WebError {
    fn is_not_found(&self) -> bool {
        match self {
            Self::Upstream(e) => e.is_not_found(),
            Self::Results(e) => e.is_not_found(),
            Self::BadRequest(_) => false,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        if self.is_not_found() {
            tracing::debug!("{}", self);
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Resource not found"
                })),
            )
                .into_response();
        }

        let (status_code, body) = match &self {
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": msg
                }),
            ),
            _ => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "An internal error occurred"
                    }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<UpstreamError> for WebError {
    fn from(error: UpstreamError) -> Self {
        Self::Upstream(error)
    }
}

impl From<ResultsError> for WebError {
    fn from(error: ResultsError) -> Self {
        Self::Results(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
