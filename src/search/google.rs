//! Google Programmable Search client
//!
//! Reads the approximate `searchInformation.totalResults` figure for a query.
//! Unlike the ADS client, a non-success HTTP status is downgraded to a logged
//! warning and a zero count. Transport failures still surface as errors.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::{truncate, SearchError};

const GOOGLE_API_BASE: &str = "https://www.googleapis.com/customsearch/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Google Custom Search client holding the API key and engine id.
pub struct GoogleClient {
    client: Client,
    api_key: String,
    cx: String,
    base_url: String,
    delay: Duration,
}

impl GoogleClient {
    pub fn new(api_key: impl Into<String>, cx: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            cx: cx.into(),
            base_url: GOOGLE_API_BASE.to_string(),
            delay: DEFAULT_DELAY,
        }
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the post-call rate-limit delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Return the approximate total result count for `query`.
    ///
    /// A non-2xx status logs a warning with the truncated body and yields
    /// `Ok(0)`. The rate-limit delay runs before every `Ok` return.
    pub async fn total_results(&self, query: &str) -> Result<u64, SearchError> {
        debug!(query = %query, "Google search query");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cx.as_str()),
                ("q", query),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(
                status = %status,
                query = %query,
                body = %truncate(&body, 200),
                "Google API error, counting as zero"
            );
            sleep(self.delay).await;
            return Ok(0);
        }

        let body: Value = resp.json().await?;
        let total_str = body
            .get("searchInformation")
            .and_then(|s| s.get("totalResults"))
            .and_then(|v| v.as_str())
            .unwrap_or("0");
        let total = total_str
            .parse::<u64>()
            .map_err(|e| SearchError::Parse(format!("totalResults {total_str:?}: {e}")))?;

        sleep(self.delay).await;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(server: &mockito::ServerGuard) -> GoogleClient {
        GoogleClient::new("test-key", "test-cx")
            .with_base_url(server.url())
            .with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_total_results_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("key".into(), "test-key".into()),
                mockito::Matcher::UrlEncoded("cx".into(), "test-cx".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"searchInformation": {"totalResults": "1234"}}"#)
            .create_async()
            .await;

        let total = test_client(&server)
            .total_results("Jane Doe astronomy")
            .await
            .unwrap();
        assert_eq!(total, 1234);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_error_returns_zero() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let total = test_client(&server)
            .total_results("Jane Doe astronomy")
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_missing_total_defaults_to_zero() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"items": []}"#)
            .create_async()
            .await;

        let total = test_client(&server)
            .total_results("Jane Doe astronomy")
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_unparseable_total_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"searchInformation": {"totalResults": "many"}}"#)
            .create_async()
            .await;

        let err = test_client(&server)
            .total_results("Jane Doe astronomy")
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }
}
