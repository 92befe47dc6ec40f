//! Batch traffic estimation for large keyword lists.
//!
//! Reads keyword/match-type/max-CPC rows from a CSV file, queries a
//! traffic-estimation service in chunks of at most 500 keywords, reduces
//! each returned min/max forecast range to point values, and writes a CSV
//! report in the original input order.

pub mod error;
pub mod estimate;
pub mod input;
pub mod pipeline;
pub mod report;

pub use error::EstimatorError;
pub use estimate::{HttpTrafficEstimator, TrafficEstimator};
pub use pipeline::{run_traffic_estimates, EstimateOptions};
