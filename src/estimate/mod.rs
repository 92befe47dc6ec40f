// src/estimate/mod.rs

pub mod http;
pub mod types;

pub use http::HttpTrafficEstimator;
pub use types::{TrafficEstimateRequest, TrafficEstimateResponse};

use anyhow::Result;
use async_trait::async_trait;

/// The external traffic-estimation collaborator.
///
/// Implementations own transport and authentication; the pipeline only
/// depends on the request/response contract: per submitted keyword, one
/// min/max estimate range, in submission order. The handle is injected into
/// the pipeline entry point rather than resolved from ambient state.
#[async_trait]
pub trait TrafficEstimator: Send + Sync {
    async fn estimate(&self, request: &TrafficEstimateRequest)
        -> Result<TrafficEstimateResponse>;
}
