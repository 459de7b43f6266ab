pub mod dates;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod source;
pub mod view;

pub use error::{Result, ResultsError};
pub use source::CompetitionSource;
pub use view::ViewState;
