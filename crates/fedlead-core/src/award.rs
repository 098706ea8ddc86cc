//! Award records from the contract-award search API, and the search
//! criteria/summary types that cross the report-assembly boundary.

use serde::{Deserialize, Serialize};

/// A raw award row as the upstream API returns it.
///
/// The upstream addresses fields by display-label string keys, with several
/// competing identifiers for the awarding agency. All fields are optional;
/// [`RawAward::into_record`] performs the key-fallback and coercion logic
/// once so nothing downstream touches the raw shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAward {
    #[serde(rename = "Award ID")]
    pub award_id: Option<String>,
    #[serde(rename = "Award Amount")]
    pub award_amount: Option<f64>,
    #[serde(rename = "Awarding Agency")]
    pub awarding_agency: Option<String>,
    #[serde(rename = "Awarding Sub Agency")]
    pub awarding_sub_agency: Option<String>,
    #[serde(rename = "Awarding Office")]
    pub awarding_office: Option<String>,
    #[serde(rename = "awarding_office_code")]
    pub awarding_office_code: Option<String>,
    #[serde(rename = "awarding_agency_id")]
    pub awarding_agency_id: Option<u64>,
    #[serde(rename = "agency_slug")]
    pub agency_slug: Option<String>,
    #[serde(rename = "NAICS")]
    pub naics: Option<String>,
    #[serde(rename = "Set Aside Type")]
    pub set_aside_type: Option<String>,
    /// Arrives as a number or a numeric string depending on endpoint version.
    #[serde(rename = "Number of Offers Received")]
    pub number_of_offers: Option<serde_json::Value>,
    #[serde(rename = "Place of Performance City Code")]
    pub pop_city: Option<String>,
    #[serde(rename = "Place of Performance State Code")]
    pub pop_state: Option<String>,
}

impl RawAward {
    /// Adapt the raw row into a clean [`AwardRecord`].
    ///
    /// Agency key fallback order: `agency_slug` → `awarding_agency_id` →
    /// awarding agency display name. Missing names coerce to `"Unknown"`;
    /// unparseable offer counts coerce to `None` (never zero).
    pub fn into_record(self) -> AwardRecord {
        let agency_name = self
            .awarding_agency
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        let agency_key = self
            .agency_slug
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.awarding_agency_id.map(|id| id.to_string()))
            .unwrap_or_else(|| agency_name.clone());

        AwardRecord {
            agency_key,
            agency_name,
            sub_agency: self.awarding_sub_agency.unwrap_or_default(),
            office_name: self
                .awarding_office
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            office_code: self.awarding_office_code,
            amount: self.award_amount.unwrap_or(0.0),
            naics_code: self.naics,
            set_aside: self.set_aside_type.filter(|s| !s.trim().is_empty()),
            number_of_offers: parse_offer_count(self.number_of_offers.as_ref()),
            pop_city: self.pop_city,
            pop_state: self.pop_state,
        }
    }
}

/// Parse an offer count that may arrive as a JSON number or numeric string.
///
/// Blank or non-numeric values are ignored rather than counted as zero.
fn parse_offer_count(value: Option<&serde_json::Value>) -> Option<u32> {
    match value? {
        serde_json::Value::Number(n) => n.as_u64().map(|v| v as u32),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A cleaned award record, consumed once per search page.
#[derive(Debug, Clone, Serialize)]
pub struct AwardRecord {
    /// Stable agency identity after key fallback.
    pub agency_key: String,
    pub agency_name: String,
    pub sub_agency: String,
    pub office_name: String,
    pub office_code: Option<String>,
    pub amount: f64,
    pub naics_code: Option<String>,
    pub set_aside: Option<String>,
    pub number_of_offers: Option<u32>,
    pub pop_city: Option<String>,
    pub pop_state: Option<String>,
}

/// Caller-supplied search filters.
///
/// `set_aside_filtered` records that the session asked for set-aside awards
/// even after the broadener has dropped the concrete code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub naics_code: Option<String>,
    pub psc_code: Option<String>,
    pub set_aside_code: Option<String>,
    pub zip_code: Option<String>,
    pub state: Option<String>,
    /// Time window in months, counted back from today.
    pub months_back: Option<u32>,
    pub set_aside_filtered: bool,
}

impl SearchCriteria {
    pub fn has_location(&self) -> bool {
        self.zip_code.is_some() || self.state.is_some()
    }

    /// Drop the place-of-performance filter.
    pub fn without_location(&self) -> Self {
        Self {
            zip_code: None,
            state: None,
            ..self.clone()
        }
    }

    /// Drop the set-aside filter but remember that it was asked for.
    pub fn without_set_aside(&self) -> Self {
        Self {
            set_aside_code: None,
            set_aside_filtered: self.set_aside_filtered || self.set_aside_code.is_some(),
            ..self.clone()
        }
    }
}

/// A candidate relaxed search the broadener proposes to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeSearchOption {
    pub criteria: SearchCriteria,
    /// Page-extrapolated estimate, not an exact count.
    pub estimated_contracts: u32,
    pub label: String,
    pub description: String,
}

/// Roll-up totals across the returned aggregates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchSummary {
    pub office_count: usize,
    pub contract_count: u32,
    pub total_spending: f64,
    pub set_aside_spending: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_prefers_agency_slug() {
        let raw = RawAward {
            agency_slug: Some("dept-of-navy".into()),
            awarding_agency_id: Some(123),
            awarding_agency: Some("Department of the Navy".into()),
            ..Default::default()
        };
        assert_eq!(raw.into_record().agency_key, "dept-of-navy");
    }

    #[test]
    fn adapter_falls_back_to_agency_id_then_name() {
        let raw = RawAward {
            awarding_agency_id: Some(123),
            awarding_agency: Some("Department of the Navy".into()),
            ..Default::default()
        };
        assert_eq!(raw.clone().into_record().agency_key, "123");

        let raw = RawAward {
            awarding_agency: Some("Department of the Navy".into()),
            ..Default::default()
        };
        assert_eq!(raw.into_record().agency_key, "Department of the Navy");
    }

    #[test]
    fn adapter_coerces_missing_names_to_unknown() {
        let rec = RawAward::default().into_record();
        assert_eq!(rec.agency_name, "Unknown");
        assert_eq!(rec.office_name, "Unknown");
        assert_eq!(rec.sub_agency, "");
    }

    #[test]
    fn offer_count_accepts_number_and_numeric_string() {
        let raw = RawAward {
            number_of_offers: Some(serde_json::json!(5)),
            ..Default::default()
        };
        assert_eq!(raw.into_record().number_of_offers, Some(5));

        let raw = RawAward {
            number_of_offers: Some(serde_json::json!(" 7 ")),
            ..Default::default()
        };
        assert_eq!(raw.into_record().number_of_offers, Some(7));
    }

    #[test]
    fn offer_count_ignores_blank_and_garbage() {
        for v in [serde_json::json!(""), serde_json::json!("n/a"), serde_json::json!(null)] {
            let raw = RawAward {
                number_of_offers: Some(v),
                ..Default::default()
            };
            assert_eq!(raw.into_record().number_of_offers, None);
        }
    }

    #[test]
    fn blank_set_aside_is_none() {
        let raw = RawAward {
            set_aside_type: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(raw.into_record().set_aside, None);
    }

    #[test]
    fn raw_award_parses_upstream_json() {
        let json = r#"{
            "Award ID": "W912DY25C0001",
            "Award Amount": 1500000.0,
            "Awarding Agency": "Department of Defense",
            "Awarding Sub Agency": "Department of the Army",
            "Awarding Office": "ACC-APG NATICK",
            "awarding_agency_id": 1173,
            "Number of Offers Received": "3"
        }"#;
        let raw: RawAward = serde_json::from_str(json).unwrap();
        let rec = raw.into_record();
        assert_eq!(rec.agency_key, "1173");
        assert_eq!(rec.amount, 1_500_000.0);
        assert_eq!(rec.number_of_offers, Some(3));
    }

    #[test]
    fn without_set_aside_remembers_the_filter() {
        let criteria = SearchCriteria {
            naics_code: Some("541511".into()),
            set_aside_code: Some("WOSB".into()),
            ..Default::default()
        };
        let relaxed = criteria.without_set_aside();
        assert_eq!(relaxed.set_aside_code, None);
        assert!(relaxed.set_aside_filtered);
    }

    #[test]
    fn without_location_clears_zip_and_state() {
        let criteria = SearchCriteria {
            zip_code: Some("01760".into()),
            state: Some("MA".into()),
            ..Default::default()
        };
        let relaxed = criteria.without_location();
        assert!(!relaxed.has_location());
    }
}
