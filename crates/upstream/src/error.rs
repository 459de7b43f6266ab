use results::ResultsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UpstreamError>;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Upstream resource not found: {0}")]
    NotFound(String),

    #[error("Upstream returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl UpstreamError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UpstreamError::NotFound(_))
    }
}

impl From<UpstreamError> for ResultsError {
    fn from(error: UpstreamError) -> Self {
        match error {
            UpstreamError::NotFound(url) => ResultsError::NotFound(url),
            other => ResultsError::Upstream(other.to_string()),
        }
    }
}
