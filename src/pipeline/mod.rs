// src/pipeline/mod.rs

pub mod chunk;

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use chrono::Local;
use tracing::info;

use crate::error::{EstimatorError, Result};
use crate::estimate::types::{KeywordEstimateRange, TrafficEstimateRequest};
use crate::estimate::{TrafficEstimateResponse, TrafficEstimator};
use crate::input::{self, KeywordRow};
use crate::report::{self, KeywordEstimate};

/// Calendar-average days per month used to scale daily forecasts.
const DAYS_PER_MONTH: f64 = 30.4;
/// Micro-units per whole currency unit.
const MICROS_PER_UNIT: f64 = 1_000_000.0;
/// The cost column has always been reported at this scale rather than in
/// whole units from micros; kept as-is so existing reports stay comparable.
const COST_DIVISOR: f64 = 100_000.0;

/// Run parameters beyond the input path. Location and language default to
/// the United Kingdom (2826) and English (1000).
#[derive(Debug, Clone)]
pub struct EstimateOptions {
    /// Report path; derived from the input path and run date when `None`.
    pub output_path: Option<PathBuf>,
    pub location_id: i64,
    pub language_id: i64,
    /// Keywords per request, at most the service ceiling of 500.
    pub max_batch_size: usize,
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self {
            output_path: None,
            location_id: 2826,
            language_id: 1000,
            max_batch_size: chunk::MAX_KEYWORDS_PER_REQUEST,
        }
    }
}

/// Full pipeline: load keyword rows from `input_path`, query the estimator
/// one batch at a time, aggregate each min/max range to point values, and
/// write the CSV report. Returns the report path.
///
/// Batches are strictly sequential; a failure on any batch aborts the run
/// and no report is written. Output rows are in input order.
pub async fn run_traffic_estimates(
    estimator: &dyn TrafficEstimator,
    input_path: &Path,
    options: EstimateOptions,
) -> Result<PathBuf> {
    let rows = input::load_keyword_rows(input_path)?;

    let mut estimates: Vec<KeywordEstimate> = Vec::with_capacity(rows.len());
    for (batch_index, batch) in chunk::chunks(&rows, options.max_batch_size).enumerate() {
        let request =
            TrafficEstimateRequest::for_batch(batch, options.location_id, options.language_id);
        let response = estimator.estimate(&request).await.map_err(|source| {
            EstimatorError::EstimationService {
                batch_index,
                source,
            }
        })?;

        let ranges = extract_keyword_estimates(response, batch_index, batch.len())?;
        // Same index = same keyword: the service preserves submission order.
        for (row, range) in batch.iter().zip(&ranges) {
            estimates.push(aggregate(row, range));
        }
        info!(batch = batch_index, keywords = batch.len(), "batch estimated");
    }

    let output_path = match options.output_path {
        Some(path) => path,
        None => report::default_output_path(input_path, Local::now().date_naive()),
    };
    report::write_report(&estimates, &output_path)?;
    Ok(output_path)
}

/// Pull the per-keyword ranges out of the single-campaign/single-ad-group
/// response shape and verify the count matches the submitted batch.
fn extract_keyword_estimates(
    response: TrafficEstimateResponse,
    batch_index: usize,
    expected: usize,
) -> Result<Vec<KeywordEstimateRange>> {
    let service_err = |source: anyhow::Error| EstimatorError::EstimationService {
        batch_index,
        source,
    };

    let mut campaigns = response.campaign_estimates;
    if campaigns.len() != 1 {
        return Err(service_err(anyhow!(
            "expected 1 campaign estimate, got {}",
            campaigns.len()
        )));
    }
    let mut ad_groups = campaigns.remove(0).ad_group_estimates;
    if ad_groups.len() != 1 {
        return Err(service_err(anyhow!(
            "expected 1 ad group estimate, got {}",
            ad_groups.len()
        )));
    }
    let ranges = ad_groups.remove(0).keyword_estimates;
    if ranges.len() != expected {
        return Err(service_err(anyhow!(
            "submitted {expected} keywords but received {} estimates",
            ranges.len()
        )));
    }
    Ok(ranges)
}

/// Reduce one keyword's min/max forecast range to the report's point
/// values: midpoints, with daily figures scaled to a month and micro
/// amounts scaled to currency units.
fn aggregate(row: &KeywordRow, range: &KeywordEstimateRange) -> KeywordEstimate {
    let mid = |lo: f64, hi: f64| (lo + hi) / 2.0;
    let (min, max) = (&range.min, &range.max);
    KeywordEstimate {
        keyword: row.text.clone(),
        monthly_impressions: mid(min.impressions_per_day, max.impressions_per_day)
            * DAYS_PER_MONTH,
        monthly_clicks: mid(min.clicks_per_day, max.clicks_per_day) * DAYS_PER_MONTH,
        ctr: mid(min.click_through_rate, max.click_through_rate),
        average_cpc: mid(min.average_cpc_micros as f64, max.average_cpc_micros as f64)
            / MICROS_PER_UNIT,
        cost: mid(min.total_cost_micros as f64, max.total_cost_micros as f64) / COST_DIVISOR,
        average_position: mid(min.average_position, max.average_position),
    }
}
