// src/estimate/types.rs

use serde::{Deserialize, Serialize};

use crate::input::{KeywordRow, MatchType};

/// Top-level traffic estimation request. The service models requests as
/// campaigns containing ad groups containing keywords; this pipeline always
/// submits exactly one campaign with exactly one ad group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficEstimateRequest {
    pub campaign_estimate_requests: Vec<CampaignEstimateRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignEstimateRequest {
    pub ad_group_estimate_requests: Vec<AdGroupEstimateRequest>,
    pub criteria: Vec<Criterion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGroupEstimateRequest {
    pub keyword_estimate_requests: Vec<KeywordEstimateRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEstimateRequest {
    pub keyword: Keyword,
    pub max_cpc: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub text: String,
    pub match_type: MatchType,
}

/// Currency amount in micro-units (one millionth of the account currency).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub micro_amount: i64,
}

/// Campaign-level targeting criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "xsiType")]
pub enum Criterion {
    Location { id: i64 },
    Language { id: i64 },
}

impl TrafficEstimateRequest {
    /// Build the single-campaign/single-ad-group request for one batch of
    /// keyword rows under the given targeting.
    pub fn for_batch(batch: &[KeywordRow], location_id: i64, language_id: i64) -> Self {
        let keyword_estimate_requests = batch
            .iter()
            .map(|row| KeywordEstimateRequest {
                keyword: Keyword {
                    text: row.text.clone(),
                    match_type: row.match_type,
                },
                max_cpc: Money {
                    micro_amount: row.max_cpc_micros,
                },
            })
            .collect();

        TrafficEstimateRequest {
            campaign_estimate_requests: vec![CampaignEstimateRequest {
                ad_group_estimate_requests: vec![AdGroupEstimateRequest {
                    keyword_estimate_requests,
                }],
                criteria: vec![
                    Criterion::Location { id: location_id },
                    Criterion::Language { id: language_id },
                ],
            }],
        }
    }
}

/// Top-level traffic estimation response, mirroring the request nesting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficEstimateResponse {
    pub campaign_estimates: Vec<CampaignEstimate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignEstimate {
    pub ad_group_estimates: Vec<AdGroupEstimate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGroupEstimate {
    pub keyword_estimates: Vec<KeywordEstimateRange>,
}

/// Min/max forecast range for one keyword, order-aligned with the batch
/// that requested it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEstimateRange {
    pub min: StatsEstimate,
    pub max: StatsEstimate,
}

/// One end of a forecast range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsEstimate {
    pub impressions_per_day: f64,
    pub clicks_per_day: f64,
    pub click_through_rate: f64,
    pub average_cpc_micros: i64,
    pub total_cost_micros: i64,
    pub average_position: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<KeywordRow> {
        vec![
            KeywordRow {
                text: "red shoes".into(),
                match_type: MatchType::Exact,
                max_cpc_micros: 1_500_000,
            },
            KeywordRow {
                text: "blue shoes".into(),
                match_type: MatchType::Broad,
                max_cpc_micros: 250_000,
            },
        ]
    }

    #[test]
    fn request_carries_one_campaign_one_ad_group() {
        let req = TrafficEstimateRequest::for_batch(&sample_rows(), 2826, 1000);
        assert_eq!(req.campaign_estimate_requests.len(), 1);
        let campaign = &req.campaign_estimate_requests[0];
        assert_eq!(campaign.ad_group_estimate_requests.len(), 1);
        assert_eq!(
            campaign.ad_group_estimate_requests[0]
                .keyword_estimate_requests
                .len(),
            2
        );
        assert_eq!(campaign.criteria.len(), 2);
    }

    #[test]
    fn request_serializes_with_wire_names() {
        let req = TrafficEstimateRequest::for_batch(&sample_rows()[..1], 2826, 1000);
        let json = serde_json::to_value(&req).unwrap();
        let campaign = &json["campaignEstimateRequests"][0];
        let kw = &campaign["adGroupEstimateRequests"][0]["keywordEstimateRequests"][0];
        assert_eq!(kw["keyword"]["text"], "red shoes");
        assert_eq!(kw["keyword"]["matchType"], "EXACT");
        assert_eq!(kw["maxCpc"]["microAmount"], 1_500_000);
        assert_eq!(campaign["criteria"][0]["xsiType"], "Location");
        assert_eq!(campaign["criteria"][0]["id"], 2826);
        assert_eq!(campaign["criteria"][1]["xsiType"], "Language");
        assert_eq!(campaign["criteria"][1]["id"], 1000);
    }

    #[test]
    fn response_deserializes_from_wire_names() {
        let json = r#"{
            "campaignEstimates": [{
                "adGroupEstimates": [{
                    "keywordEstimates": [{
                        "min": {
                            "impressionsPerDay": 100.0,
                            "clicksPerDay": 10.0,
                            "clickThroughRate": 0.1,
                            "averageCpcMicros": 500000,
                            "totalCostMicros": 5000000,
                            "averagePosition": 2.0
                        },
                        "max": {
                            "impressionsPerDay": 200.0,
                            "clicksPerDay": 20.0,
                            "clickThroughRate": 0.2,
                            "averageCpcMicros": 1500000,
                            "totalCostMicros": 15000000,
                            "averagePosition": 4.0
                        }
                    }]
                }]
            }]
        }"#;
        let resp: TrafficEstimateResponse = serde_json::from_str(json).unwrap();
        let range = &resp.campaign_estimates[0].ad_group_estimates[0].keyword_estimates[0];
        assert_eq!(range.min.impressions_per_day, 100.0);
        assert_eq!(range.max.average_cpc_micros, 1_500_000);
    }
}
