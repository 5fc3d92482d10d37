// ABOUTME: HTTP client for the job listing endpoint
// ABOUTME: Sends search parameters and hands the JSON body to feed normalization

use reqwest::Client;
use std::time::Duration;

use super::models::{normalize_feed, JobFeed};
use crate::error::{BoardError, Result};

pub const JOBS_PATH: &str = "/api/jobs";

#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    api_base_url: String,
}

impl RemoteClient {
    pub fn new(api_base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BoardError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn jobs_url(&self) -> String {
        format!("{}{}", self.api_base_url, JOBS_PATH)
    }

    /// Fetch the job feed. Empty `query`/`location` request the unfiltered set.
    ///
    /// The status code is not inspected: the server answers 200 with a
    /// `fallback` body when its own source fails, so only the body decides.
    pub async fn fetch_jobs(&self, query: &str, location: &str) -> Result<JobFeed> {
        let url = self.jobs_url();
        tracing::debug!(%url, query, location, "requesting job feed");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("l", location)])
            .send()
            .await
            .map_err(|e| BoardError::Network(format!("failed to reach {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "job feed answered with a non-success status");
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| BoardError::Network(format!("failed to parse job feed body: {}", e)))?;

        normalize_feed(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_creation() {
        let client = RemoteClient::new("https://api.example.com/".to_string(), Duration::from_secs(30));
        assert!(client.is_ok());
        assert_eq!(client.unwrap().jobs_url(), "https://api.example.com/api/jobs");
    }

    #[tokio::test]
    async fn test_fetch_sends_query_and_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/jobs"))
            .and(query_param("q", "architect"))
            .and(query_param("l", "London, UK"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"title": "Senior Software Architect", "company": "NJP Global Tech", "location": "London, UK (Remote)"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = RemoteClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        let feed = client.fetch_jobs("architect", "London, UK").await.unwrap();
        assert_eq!(feed.jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_accepts_fallback_with_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/jobs"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": "boom",
                "fallback": [{"title": "CFO", "company": "Global Finance Corp", "location": "Dubai, UAE"}]
            })))
            .mount(&server)
            .await;

        let client = RemoteClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        let feed = client.fetch_jobs("", "").await.unwrap();
        assert!(feed.is_degraded());
    }

    #[tokio::test]
    async fn test_non_json_body_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = RemoteClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        let err = client.fetch_jobs("", "").await.unwrap_err();
        assert!(matches!(err, BoardError::Network(_)));
    }
}
