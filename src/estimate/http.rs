// src/estimate/http.rs

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::types::{TrafficEstimateRequest, TrafficEstimateResponse};
use super::TrafficEstimator;

/// JSON-over-HTTP estimator: POSTs each request to a single endpoint and
/// decodes the response body. Authentication is whatever the supplied
/// `Client` carries (default headers, middleware).
pub struct HttpTrafficEstimator {
    client: Client,
    endpoint: Url,
}

impl HttpTrafficEstimator {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl TrafficEstimator for HttpTrafficEstimator {
    async fn estimate(
        &self,
        request: &TrafficEstimateRequest,
    ) -> Result<TrafficEstimateResponse> {
        debug!(endpoint = %self.endpoint, "posting traffic estimate request");
        let resp = self
            .client
            .post(self.endpoint.as_str())
            .json(request)
            .send()
            .await
            .context("sending traffic estimate request")?
            .error_for_status()
            .context("traffic estimate request rejected")?;

        resp.json::<TrafficEstimateResponse>()
            .await
            .context("decoding traffic estimate response")
    }
}
