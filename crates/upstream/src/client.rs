use reqwest::StatusCode;
use results::{
    CompetitionSource,
    models::{Competition, CompetitionDetail},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, UpstreamError};

pub const DEFAULT_BASE_URL: &str = "https://ski-data-api.homelab.davidemarcoli.dev/api/v1";

/// Read-only client for the ski data API.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SkiDataClient {
    base_url: String,
    client: reqwest::Client,
}

impl SkiDataClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ski-results/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Competition calendar, exactly as the API sent it.
    pub async fn fetch_competitions_raw(&self) -> Result<Value> {
        self.get("/competitions").await
    }

    /// Competition detail document, exactly as the API sent it.
    pub async fn fetch_competition_raw(&self, event_id: &str) -> Result<Value> {
        self.get(&format!("/competitions/{}", event_id)).await
    }

    pub async fn fetch_competitions(&self) -> Result<Vec<Competition>> {
        self.get("/competitions").await
    }

    pub async fn fetch_competition(&self, event_id: &str) -> Result<CompetitionDetail> {
        self.get(&format!("/competitions/{}", event_id)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(url));
        }
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl CompetitionSource for SkiDataClient {
    async fn list_competitions(&self) -> results::Result<Vec<Competition>> {
        Ok(self.fetch_competitions().await?)
    }

    async fn competition_detail(&self, event_id: &str) -> results::Result<CompetitionDetail> {
        Ok(self.fetch_competition(event_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use results::ResultsError;

    const COMPETITIONS_JSON: &str = r#"[
        {"event_id": "1", "date": "26-27 Oct", "location": "Soelden", "country": "AUT",
         "discipline": ["GS"], "category": "WC", "gender": "W", "cancelled": false, "is_live": false},
        {"event_id": "2", "date": "16-17 Nov", "location": "Levi", "country": "FIN",
         "discipline": ["SL"], "category": "WC", "gender": "W", "cancelled": false, "is_live": true}
    ]"#;

    const DETAIL_JSON: &str = r#"{
        "competition": {"event_id": "2", "date": "16-17 Nov", "location": "Levi", "country": "FIN",
                        "discipline": ["SL"], "category": "WC", "gender": "W",
                        "cancelled": false, "is_live": true},
        "races": [],
        "broadcasters": [],
        "documents": {}
    }"#;

    #[tokio::test]
    async fn test_fetch_competitions() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/competitions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(COMPETITIONS_JSON)
            .create_async()
            .await;

        let client = SkiDataClient::new(format!("{}/", server.url())).unwrap();
        let competitions = client.fetch_competitions().await.unwrap();

        mock.assert_async().await;
        assert_eq!(competitions.len(), 2);
        assert_eq!(competitions[1].location, "Levi");
        assert!(competitions[1].is_live);
    }

    #[tokio::test]
    async fn test_raw_fetch_is_verbatim() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/competitions/2")
            .with_status(200)
            .with_body(r#"{"competition": {"event_id": "2"}, "extra": [1, 2, 3]}"#)
            .create_async()
            .await;

        let client = SkiDataClient::new(server.url()).unwrap();
        let raw = client.fetch_competition_raw("2").await.unwrap();

        assert_eq!(raw["extra"], serde_json::json!([1, 2, 3]));
    }

    #[tokio::test]
    async fn test_fetch_competition_detail() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/competitions/2")
            .with_status(200)
            .with_body(DETAIL_JSON)
            .create_async()
            .await;

        let client = SkiDataClient::new(server.url()).unwrap();
        let detail = client.competition_detail("2").await.unwrap();

        assert_eq!(detail.competition.event_id, "2");
        assert!(detail.races.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/competitions/404")
            .with_status(404)
            .create_async()
            .await;

        let client = SkiDataClient::new(server.url()).unwrap();

        let error = client.fetch_competition_raw("404").await.unwrap_err();
        assert!(error.is_not_found());

        let error = client.competition_detail("404").await.unwrap_err();
        assert!(matches!(error, ResultsError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/competitions")
            .with_status(502)
            .create_async()
            .await;

        let client = SkiDataClient::new(server.url()).unwrap();
        let error = client.fetch_competitions_raw().await.unwrap_err();

        assert!(matches!(error, UpstreamError::Status { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/competitions")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = SkiDataClient::new(server.url()).unwrap();
        let error = client.list_competitions().await.unwrap_err();

        assert!(matches!(error, ResultsError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // nothing listens on the discard port
        let client = SkiDataClient::new("http://127.0.0.1:9").unwrap();
        let error = client.fetch_competitions_raw().await.unwrap_err();

        assert!(matches!(error, UpstreamError::RequestError(_)));
    }
}
