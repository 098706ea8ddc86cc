//! HTTP client for the public contract-award search API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use fedlead_core::{RawAward, SearchCriteria};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Rows per page, fixed by the upstream API.
pub const PAGE_LIMIT: u32 = 100;

const DEFAULT_MONTHS_BACK: u32 = 12;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid search criteria: {0}")]
    InvalidCriteria(String),
}

/// One page of award results.
#[derive(Debug, Deserialize)]
pub struct AwardSearchResponse {
    pub results: Vec<RawAward>,
}

#[derive(Debug, Serialize)]
struct AwardSearchRequest {
    filters: AwardFilters,
    fields: Vec<&'static str>,
    page: u32,
    limit: u32,
    sort: &'static str,
    order: &'static str,
}

#[derive(Debug, Serialize)]
struct AwardFilters {
    award_type_codes: Vec<&'static str>,
    time_period: Vec<TimePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    naics_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    set_aside_type_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    place_of_performance_locations: Option<Vec<PopLocation>>,
}

#[derive(Debug, Serialize)]
struct TimePeriod {
    start_date: String,
    end_date: String,
}

#[derive(Debug, Serialize)]
struct PopLocation {
    country: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zip: Option<String>,
}

const AWARD_FIELDS: &[&str] = &[
    "Award ID",
    "Recipient Name",
    "Award Amount",
    "Awarding Agency",
    "Awarding Sub Agency",
    "Awarding Office",
    "awarding_office_code",
    "awarding_agency_id",
    "agency_slug",
    "NAICS",
    "Set Aside Type",
    "Number of Offers Received",
    "Place of Performance City Code",
    "Place of Performance State Code",
];

fn build_request(criteria: &SearchCriteria, page: u32, limit: u32) -> AwardSearchRequest {
    let end = Utc::now().date_naive();
    let months = criteria.months_back.unwrap_or(DEFAULT_MONTHS_BACK);
    let start = end - ChronoDuration::days(30 * i64::from(months));

    let location = if criteria.has_location() {
        Some(vec![PopLocation {
            country: "USA",
            state: criteria.state.clone(),
            zip: criteria.zip_code.clone(),
        }])
    } else {
        None
    };

    AwardSearchRequest {
        filters: AwardFilters {
            // Contract award types only; IDVs are umbrella records, not spend.
            award_type_codes: vec!["A", "B", "C", "D"],
            time_period: vec![TimePeriod {
                start_date: start.format("%Y-%m-%d").to_string(),
                end_date: end.format("%Y-%m-%d").to_string(),
            }],
            naics_codes: criteria.naics_code.clone().map(|c| vec![c]),
            set_aside_type_codes: criteria.set_aside_code.clone().map(|c| vec![c]),
            place_of_performance_locations: location,
        },
        fields: AWARD_FIELDS.to_vec(),
        page,
        limit,
        sort: "Award Amount",
        order: "desc",
    }
}

/// Seam between the search pipeline and the upstream API, so the
/// aggregation and broadening paths are testable against a stub.
#[async_trait]
pub trait AwardApi {
    /// Fetch one page of awards matching the criteria.
    async fn fetch_page(
        &self,
        criteria: &SearchCriteria,
        page: u32,
        limit: u32,
    ) -> Result<Vec<RawAward>, SearchError>;
}

/// Client for the award search endpoint.
pub struct SpendingClient {
    client: reqwest::Client,
    base_url: String,
}

impl SpendingClient {
    /// `base_url` should be like `https://api.usaspending.gov` (no trailing
    /// slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AwardApi for SpendingClient {
    async fn fetch_page(
        &self,
        criteria: &SearchCriteria,
        page: u32,
        limit: u32,
    ) -> Result<Vec<RawAward>, SearchError> {
        let url = format!("{}/api/v2/search/spending_by_award/", self.base_url);
        let request = build_request(criteria, page, limit);

        info!(url = %url, page, limit, "fetching award page");
        let resp = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let page_data: AwardSearchResponse = resp.json().await?;
        info!(count = page_data.results.len(), "fetched award page");
        Ok(page_data.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slash() {
        let client = SpendingClient::new("https://api.usaspending.gov/".into());
        assert_eq!(client.base_url, "https://api.usaspending.gov");
    }

    #[test]
    fn request_includes_naics_and_set_aside_filters() {
        let criteria = SearchCriteria {
            naics_code: Some("541511".into()),
            set_aside_code: Some("WOSB".into()),
            ..Default::default()
        };
        let request = build_request(&criteria, 1, PAGE_LIMIT);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["filters"]["naics_codes"][0], "541511");
        assert_eq!(json["filters"]["set_aside_type_codes"][0], "WOSB");
        assert_eq!(json["page"], 1);
        assert_eq!(json["limit"], 100);
        assert!(json["filters"].get("place_of_performance_locations").is_none());
    }

    #[test]
    fn request_omits_absent_filters() {
        let request = build_request(&SearchCriteria::default(), 2, 50);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["filters"].get("naics_codes").is_none());
        assert!(json["filters"].get("set_aside_type_codes").is_none());
        assert_eq!(json["page"], 2);
    }

    #[test]
    fn request_location_carries_zip_and_state() {
        let criteria = SearchCriteria {
            zip_code: Some("01760".into()),
            state: Some("MA".into()),
            ..Default::default()
        };
        let request = build_request(&criteria, 1, PAGE_LIMIT);
        let json = serde_json::to_value(&request).unwrap();
        let loc = &json["filters"]["place_of_performance_locations"][0];
        assert_eq!(loc["country"], "USA");
        assert_eq!(loc["zip"], "01760");
        assert_eq!(loc["state"], "MA");
    }

    #[test]
    fn time_window_spans_requested_months() {
        let criteria = SearchCriteria {
            months_back: Some(6),
            ..Default::default()
        };
        let request = build_request(&criteria, 1, PAGE_LIMIT);
        let period = &request.filters.time_period[0];
        let start = chrono::NaiveDate::parse_from_str(&period.start_date, "%Y-%m-%d").unwrap();
        let end = chrono::NaiveDate::parse_from_str(&period.end_date, "%Y-%m-%d").unwrap();
        assert_eq!((end - start).num_days(), 180);
    }

    #[test]
    fn response_parses_results_array() {
        let json = r#"{"results": [{"Award ID": "X1", "Award Amount": 5000.0}]}"#;
        let resp: AwardSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].award_amount, Some(5000.0));
    }
}
