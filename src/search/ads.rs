//! NASA ADS count client
//!
//! Issues count-only queries (`rows=0`) against the ADS search endpoint and
//! extracts the server-reported `numFound` total. Any transport failure,
//! non-success status, or unparseable body surfaces as a [`SearchError`];
//! the aggregator decides what to substitute.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tokio::time::sleep;
use tracing::debug;

use super::{truncate, SearchError};

const ADS_API_BASE: &str = "https://api.adsabs.harvard.edu/v1/search/query";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// Optional query filters, each mapping to one boolean clause.
#[derive(Debug, Clone, Default)]
pub struct AdsFilters {
    /// Restrict to refereed publications
    pub refereed: bool,
    /// Affiliation substring, quoted into the query
    pub aff: Option<String>,
    /// Year range, e.g. "2015-2020"
    pub year_range: Option<String>,
    /// ORCID identifier
    pub orcid: Option<String>,
}

/// ADS search client holding the bearer token and rate-limit delay.
pub struct AdsClient {
    client: Client,
    token: String,
    base_url: String,
    delay: Duration,
}

impl AdsClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            base_url: ADS_API_BASE.to_string(),
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

    /// Return the number of ADS records matching `author` plus any filters.
    ///
    /// Sleeps the configured delay after a successful count; error returns
    /// skip the delay.
    pub async fn count_papers(
        &self,
        author: &str,
        filters: &AdsFilters,
    ) -> Result<u64, SearchError> {
        let query = build_query(author, filters);
        debug!(query = %query, "ADS count query");

        let resp = self
            .client
            .get(&self.base_url)
            .bearer_auth(&self.token)
            .query(&[("q", query.as_str()), ("rows", "0"), ("fl", "id")])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status,
                body: truncate(&body, 200),
            });
        }

        let body: Value = resp.json().await?;
        let total = body
            .get("response")
            .and_then(|r| r.get("numFound"))
            .and_then(|v| v.as_u64())
            .ok_or_else(|| SearchError::Parse("missing response.numFound".to_string()))?;

        sleep(self.delay).await;
        Ok(total)
    }
}

/// Build the conjunctive ADS query for an author and filter set.
fn build_query(author: &str, filters: &AdsFilters) -> String {
    let mut clauses = vec![
        format!("author:\"{author}\""),
        "collection:astronomy".to_string(),
    ];
    if filters.refereed {
        clauses.push("property:refereed".to_string());
    }
    if let Some(aff) = &filters.aff {
        clauses.push(format!("aff:\"{aff}\""));
    }
    if let Some(years) = &filters.year_range {
        clauses.push(format!("year:{years}"));
    }
    if let Some(orcid) = &filters.orcid {
        clauses.push(format!("orcid:{orcid}"));
    }
    clauses.join(" AND ")
}
