use std::fmt;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

/// `Cache-Control` for responses that must not be stored at all.
pub const NO_STORE: &str = "no-store";

/// Freshness window handed to shared caches in front of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub s_maxage: u32,
    pub stale_while_revalidate: u32,
}

impl CachePolicy {
    pub const LIST_SECS: u32 = 3600;
    pub const LIST_STALE_SECS: u32 = 6 * 3600;
    pub const LIVE_DETAIL_SECS: u32 = 60;
    pub const DETAIL_SECS: u32 = 300;

    pub fn competition_list() -> Self {
        Self {
            s_maxage: Self::LIST_SECS,
            stale_while_revalidate: Self::LIST_STALE_SECS,
        }
    }

    /// Live competitions change by the minute, the rest every few minutes at most.
    pub fn competition_detail(is_live: bool) -> Self {
        let s_maxage = if is_live {
            Self::LIVE_DETAIL_SECS
        } else {
            Self::DETAIL_SECS
        };

        Self {
            s_maxage,
            stale_while_revalidate: s_maxage * 2,
        }
    }

    pub fn apply(self, response: impl IntoResponse) -> Response {
        ([(header::CACHE_CONTROL, self.to_string())], response).into_response()
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "public, s-maxage={}, stale-while-revalidate={}",
            self.s_maxage, self.stale_while_revalidate
        )
    }
}

pub fn no_store(response: impl IntoResponse) -> Response {
    ([(header::CACHE_CONTROL, NO_STORE)], response).into_response()
}
