//! Search Module
//!
//! Query clients for the two external count sources:
//! - NASA ADS - bibliographic record counts (bearer-token auth)
//! - Google Programmable Search - approximate web result counts
//!
//! Both clients are sequential and rate-limited by a fixed post-call sleep.

pub mod ads;
pub mod google;

pub use ads::{AdsClient, AdsFilters};
pub use google::GoogleClient;

use thiserror::Error;

/// Errors that can occur during search operations
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse search response: {0}")]
    Parse(String),
}

/// Truncate `text` to at most `max` characters for log output.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_input() {
        assert_eq!(truncate("abc", 200), "abc");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let out = truncate("ééééé", 3);
        assert_eq!(out, "ééé");
    }
}
