//! Aggregator
//!
//! Walks the name list strictly in order, queries both count sources per
//! name, and isolates per-name failures so one bad name never stops the run.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::search::{AdsClient, AdsFilters, GoogleClient};

/// One output row: a researcher and their two best-effort counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    pub ads_papers: u64,
    pub google_results: u64,
}

/// Collect one [`ResultRecord`] per input name, in input order.
///
/// ADS failures are logged and counted as zero. Google is only queried when a
/// client is configured; its failures are likewise logged and zeroed. The
/// google query text is the name with a fixed `astronomy` qualifier.
pub async fn collect_presence(
    names: &[String],
    ads: &AdsClient,
    google: Option<&GoogleClient>,
    filters: &AdsFilters,
) -> Vec<ResultRecord> {
    let mut records = Vec::with_capacity(names.len());

    for name in names {
        info!(name = %name, "Processing researcher");

        let ads_papers = match ads.count_papers(name, filters).await {
            Ok(count) => count,
            Err(e) => {
                error!(name = %name, error = %e, "ADS query failed, counting as zero");
                0
            }
        };

        let google_results = match google {
            Some(client) => match client.total_results(&format!("{name} astronomy")).await {
                Ok(count) => count,
                Err(e) => {
                    error!(name = %name, error = %e, "Google query failed, counting as zero");
                    0
                }
            },
            None => 0,
        };

        records.push(ResultRecord {
            name: name.clone(),
            ads_papers,
            google_results,
        });
    }

    records
}
