use anyhow::{bail, Context, Result};
use kwestimator::{run_traffic_estimates, EstimateOptions, HttpTrafficEstimator};
use reqwest::Client;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// Environment variable naming the traffic-estimation endpoint.
const ENDPOINT_ENV: &str = "KWESTIMATOR_ENDPOINT";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) parse args ───────────────────────────────────────────────
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.len() > 4 {
        bail!("usage: kwestimator <input.csv> [output.csv] [location_id] [language_id]");
    }
    let input_path = PathBuf::from(&args[0]);
    let mut options = EstimateOptions::default();
    if let Some(path) = args.get(1) {
        options.output_path = Some(PathBuf::from(path));
    }
    if let Some(raw) = args.get(2) {
        options.location_id = raw
            .parse()
            .with_context(|| format!("location_id must be numeric, got `{raw}`"))?;
    }
    if let Some(raw) = args.get(3) {
        options.language_id = raw
            .parse()
            .with_context(|| format!("language_id must be numeric, got `{raw}`"))?;
    }

    // ─── 3) build the estimator client ───────────────────────────────
    let endpoint: Url = std::env::var(ENDPOINT_ENV)
        .with_context(|| format!("{ENDPOINT_ENV} must name the traffic estimation endpoint"))?
        .parse()
        .with_context(|| format!("{ENDPOINT_ENV} is not a valid URL"))?;
    let estimator = HttpTrafficEstimator::new(Client::new(), endpoint);

    // ─── 4) run the pipeline ─────────────────────────────────────────
    let report = run_traffic_estimates(&estimator, &input_path, options).await?;
    info!(report = %report.display(), "traffic estimates written");
    Ok(())
}
