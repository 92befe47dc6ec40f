// src/report/mod.rs

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::info;

use crate::error::{EstimatorError, Result};

/// One output row: a keyword with its aggregated point estimates. Field
/// renames define the report's header row.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordEstimate {
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Monthly Impressions")]
    pub monthly_impressions: f64,
    #[serde(rename = "Monthly Clicks")]
    pub monthly_clicks: f64,
    #[serde(rename = "CTR")]
    pub ctr: f64,
    #[serde(rename = "Average CPC")]
    pub average_cpc: f64,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Average Position")]
    pub average_position: f64,
}

/// Default report location when the caller does not name one: next to the
/// input file, stamped with the run date.
pub fn default_output_path(input_path: &Path, run_date: NaiveDate) -> PathBuf {
    let dir = input_path.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!(
        "Keyword Traffic Estimates - {}.csv",
        run_date.format("%d-%m-%Y")
    ))
}

/// Write the full report to `path`: one header row, then one row per
/// estimate in the order given. Refuses to create a file for an empty
/// result set.
pub fn write_report(estimates: &[KeywordEstimate], path: &Path) -> Result<()> {
    if estimates.is_empty() {
        return Err(EstimatorError::EmptyResult);
    }

    let write_err = |source: csv::Error| EstimatorError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(write_err)?;
    for estimate in estimates {
        writer.serialize(estimate).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|e| write_err(csv::Error::from(e)))?;

    info!(path = %path.display(), rows = estimates.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(keyword: &str) -> KeywordEstimate {
        KeywordEstimate {
            keyword: keyword.to_string(),
            monthly_impressions: 4560.0,
            monthly_clicks: 456.0,
            ctr: 0.15,
            average_cpc: 1.0,
            cost: 100.0,
            average_position: 3.0,
        }
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_report(&[sample("first"), sample("second")], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Keyword,Monthly Impressions,Monthly Clicks,CTR,Average CPC,Cost,Average Position"
        );
        assert!(lines.next().unwrap().starts_with("first,"));
        assert!(lines.next().unwrap().starts_with("second,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_result_creates_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        assert!(matches!(
            write_report(&[], &path),
            Err(EstimatorError::EmptyResult)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_target_is_output_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(matches!(
            write_report(&[sample("kw")], &path),
            Err(EstimatorError::OutputWrite { .. })
        ));
    }

    #[test]
    fn default_path_sits_beside_input_with_run_date() {
        let input = Path::new("/data/keywords/KW.csv");
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        assert_eq!(
            default_output_path(input, date),
            Path::new("/data/keywords/Keyword Traffic Estimates - 27-08-2026.csv")
        );
    }

    #[test]
    fn default_path_handles_bare_filenames() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(
            default_output_path(Path::new("KW.csv"), date),
            Path::new("Keyword Traffic Estimates - 02-01-2026.csv")
        );
    }
}
