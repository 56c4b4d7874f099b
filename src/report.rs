//! CSV report
//!
//! Serializes the accumulated records with a fixed
//! `name,ads_papers,google_results` header, one row per record in
//! aggregation order. The reader half re-parses a report, used for the
//! round-trip checks.

use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregate::ResultRecord;

/// Write all records to `path` with the fixed header.
pub fn write_csv(path: &Path, records: &[ResultRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create CSV report {}", path.display()))?;

    wtr.write_record(["name", "ads_papers", "google_results"])?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a report back into records.
pub fn read_csv(path: &Path) -> Result<Vec<ResultRecord>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open CSV report {}", path.display()))?;

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_records() -> Vec<ResultRecord> {
        vec![
            ResultRecord {
                name: "Jane Doe".to_string(),
                ads_papers: 42,
                google_results: 120000,
            },
            ResultRecord {
                name: "John Smith".to_string(),
                ads_papers: 0,
                google_results: 0,
            },
        ]
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        let records = sample_records();
        write_csv(&path, &records).unwrap();
        let back = read_csv(&path).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_header_and_row_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(&path, &sample_records()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        let mut lines = raw.lines();
        assert_eq!(lines.next(), Some("name,ads_papers,google_results"));
        assert_eq!(lines.next(), Some("Jane Doe,42,120000"));
        assert_eq!(lines.next(), Some("John Smith,0,0"));
    }

    #[test]
    fn test_empty_report_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(&path, &[]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim_end(), "name,ads_papers,google_results");
        let back = read_csv(&path).unwrap();
        assert!(back.is_empty());
    }
}
