pub mod broadcaster;
pub mod competition;
pub mod race;
pub mod race_result;

pub use broadcaster::Broadcaster;
pub use competition::{Competition, CompetitionDetail, CompetitionStatus};
pub use race::{Race, Run};
pub use race_result::RaceResult;
