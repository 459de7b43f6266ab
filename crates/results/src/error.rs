use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, ResultsError>;

impl ResultsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResultsError::NotFound(_))
    }
}
