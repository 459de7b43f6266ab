use std::fmt::Display;

/// Lifecycle of a fetch-then-render view.
///
/// A view starts `Loading` and leaves it exactly once, when the underlying fetch settles.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ViewState<T> {
    /// Settles a loading view. Already settled views are left untouched.
    pub fn settle<E: Display>(self, outcome: std::result::Result<T, E>) -> Self {
        match self {
            Self::Loading => match outcome {
                Ok(data) => Self::Ready(data),
                Err(e) => Self::Error(e.to_string()),
            },
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}
