pub mod competitions;
pub mod races;
