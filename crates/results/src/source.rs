use crate::Result;
use crate::models::{Competition, CompetitionDetail};

/// Read-only access to the competition feed.
///
/// The HTTP client implements this for the live API; tests plug in fixed data.
#[async_trait::async_trait]
pub trait CompetitionSource: Send + Sync {
    async fn list_competitions(&self) -> Result<Vec<Competition>>;

    async fn competition_detail(&self, event_id: &str) -> Result<CompetitionDetail>;
}
