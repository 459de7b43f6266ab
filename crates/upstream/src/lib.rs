pub mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, SkiDataClient};
pub use error::{Result, UpstreamError};
