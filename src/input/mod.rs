// src/input/mod.rs

use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EstimatorError, Result};

/// Header names the input file must carry. Column order is irrelevant and
/// extra columns are ignored.
const COL_TYPE: &str = "Type";
const COL_KEYWORD: &str = "Keyword";
const COL_MAX_CPC: &str = "Max CPC";

/// Keyword matching mode governing how an ad triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchType {
    Exact,
    Phrase,
    Broad,
}

impl MatchType {
    /// Parse the input file's `Type` column, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "exact" => Some(MatchType::Exact),
            "phrase" => Some(MatchType::Phrase),
            "broad" => Some(MatchType::Broad),
            _ => None,
        }
    }
}

/// One input keyword: text, match mode, and a max CPC bid in micro-units.
/// Immutable after load; the report preserves the load order.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRow {
    pub text: String,
    pub match_type: MatchType,
    pub max_cpc_micros: i64,
}

/// Convert a decimal currency amount to integer micro-units.
fn to_micros(amount: f64) -> i64 {
    (amount * 1_000_000.0).round() as i64
}

/// Read the input CSV into an ordered list of `KeywordRow`.
///
/// Requires the `Type`, `Keyword` and `Max CPC` columns (any order). Does
/// not deduplicate or validate keyword text. Fails with `MalformedInput`
/// when a column is missing, a row is short, the match type is unknown, or
/// the CPC is not numeric.
pub fn load_keyword_rows(path: &Path) -> Result<Vec<KeywordRow>> {
    let malformed = |detail: String| EstimatorError::MalformedInput {
        path: path.to_path_buf(),
        detail,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| malformed(format!("cannot open input file: {e}")))?;

    let headers = reader
        .headers()
        .map_err(|e| malformed(format!("cannot read header row: {e}")))?
        .clone();
    let col = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| malformed(format!("missing required column `{name}`")))
    };
    let type_idx = col(COL_TYPE)?;
    let keyword_idx = col(COL_KEYWORD)?;
    let cpc_idx = col(COL_MAX_CPC)?;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| malformed(format!("row {}: {e}", line + 1)))?;
        let field = |idx: usize, name: &str| {
            record
                .get(idx)
                .ok_or_else(|| malformed(format!("row {}: missing `{name}` field", line + 1)))
        };

        let raw_type = field(type_idx, COL_TYPE)?;
        let match_type = MatchType::parse(raw_type).ok_or_else(|| {
            malformed(format!("row {}: unknown match type `{raw_type}`", line + 1))
        })?;
        let text = field(keyword_idx, COL_KEYWORD)?.to_string();
        let raw_cpc = field(cpc_idx, COL_MAX_CPC)?;
        let max_cpc: f64 = raw_cpc.parse().map_err(|_| {
            malformed(format!("row {}: non-numeric Max CPC `{raw_cpc}`", line + 1))
        })?;

        rows.push(KeywordRow {
            text,
            match_type,
            max_cpc_micros: to_micros(max_cpc),
        });
    }

    info!(path = %path.display(), rows = rows.len(), "imported keyword rows");
    Ok(rows)
}
