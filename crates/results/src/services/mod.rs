pub mod overview;
pub mod upcoming;
