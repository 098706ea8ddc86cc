//! Adaptive search broadening.
//!
//! Two distinct mechanisms, per the degradation contract:
//!
//! 1. An automatic zero-result fallback, applied once before any
//!    suggestions: drop the location filter if one was applied, else drop
//!    the set-aside filter when a NAICS filter remains. One level only —
//!    if the retry still comes back empty, we move to suggestions instead
//!    of relaxing again.
//! 2. Ranked [`AlternativeSearchOption`]s: candidate relaxations probed
//!    concurrently with a bounded sample query; a candidate is surfaced
//!    only when its estimate actually beats the current result count.

use std::time::Duration;

use fedlead_core::{AlternativeSearchOption, SearchCriteria};
use futures::future::join_all;
use tracing::debug;

use crate::client::{AwardApi, SearchError};

/// Below this many distinct offices a result set counts as thin.
pub const THIN_RESULT_THRESHOLD: usize = 10;

const PROBE_SAMPLE_ROWS: u32 = 100;
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Page-based extrapolation multiplier for partial sample pages.
const ESTIMATE_MULTIPLIER: u32 = 5;
/// Estimate assigned when the probe fills a whole sample page.
const FULL_PAGE_ESTIMATE: u32 = 1_000;

/// The location-drop candidate must beat the current count by 50%.
const LOCATION_GAIN_FACTOR: f64 = 1.5;

/// One automatic relaxation level for a zero-result search.
///
/// Returns the relaxed criteria and a label for what was dropped, or
/// `None` when no automatic fallback applies.
pub fn automatic_fallback(criteria: &SearchCriteria) -> Option<(SearchCriteria, &'static str)> {
    if criteria.has_location() {
        return Some((criteria.without_location(), "location"));
    }
    if criteria.set_aside_code.is_some() && criteria.naics_code.is_some() {
        return Some((criteria.without_set_aside(), "set_aside"));
    }
    None
}

struct Candidate {
    criteria: SearchCriteria,
    label: &'static str,
    description: String,
    /// Location drops need a bigger win to be worth suggesting.
    gain_factor: f64,
}

fn candidates(criteria: &SearchCriteria) -> Vec<Candidate> {
    let mut out = Vec::new();

    if criteria.has_location() {
        out.push(Candidate {
            criteria: criteria.without_location(),
            label: "nationwide",
            description: "Search nationwide instead of your area".to_string(),
            gain_factor: LOCATION_GAIN_FACTOR,
        });
    }

    if criteria.set_aside_code.is_some() {
        out.push(Candidate {
            criteria: criteria.without_set_aside(),
            label: "all_business_types",
            description: "Include all business types, not just your set-aside".to_string(),
            gain_factor: 1.0,
        });
    }

    if let Some(prefix) = naics_industry_prefix(criteria) {
        let mut relaxed = criteria.clone();
        relaxed.naics_code = Some(prefix.clone());
        out.push(Candidate {
            criteria: relaxed,
            label: "industry_group",
            description: format!("Broaden to the whole {prefix} industry group"),
            gain_factor: 1.0,
        });
    }

    if criteria.has_location() && criteria.set_aside_code.is_some() {
        out.push(Candidate {
            criteria: criteria.without_location().without_set_aside(),
            label: "nationwide_all_types",
            description: "Search nationwide across all business types".to_string(),
            gain_factor: 1.0,
        });
    }

    // Most aggressive: keep only the industry group, drop everything else.
    let mut bare = criteria.without_location().without_set_aside();
    if let Some(prefix) = naics_industry_prefix(criteria) {
        bare.naics_code = Some(prefix);
    }
    if bare != *criteria {
        out.push(Candidate {
            criteria: bare,
            label: "remove_all_filters",
            description: "Remove all narrowing filters".to_string(),
            gain_factor: 1.0,
        });
    }

    out
}

/// 4+-digit NAICS codes relax to their 3-digit industry prefix.
fn naics_industry_prefix(criteria: &SearchCriteria) -> Option<String> {
    let code = criteria.naics_code.as_deref()?;
    if code.len() < 4 {
        return None;
    }
    code.get(..3).map(str::to_string)
}

/// Probe candidate relaxations and propose the ones that help.
///
/// Probes run concurrently as an unordered batch; each is bounded by a 5s
/// timeout and a failed or timed-out probe simply drops its candidate.
pub async fn propose_alternatives<A: AwardApi + Sync>(
    api: &A,
    criteria: &SearchCriteria,
    current_count: usize,
) -> Vec<AlternativeSearchOption> {
    let candidates = candidates(criteria);
    if candidates.is_empty() {
        return Vec::new();
    }

    let probes = candidates.iter().map(|candidate| async {
        match tokio::time::timeout(
            PROBE_TIMEOUT,
            probe_estimate(api, &candidate.criteria),
        )
        .await
        {
            Ok(Ok(estimate)) => Some(estimate),
            Ok(Err(err)) => {
                debug!(label = candidate.label, error = %err, "broadening probe failed");
                None
            }
            Err(_) => {
                debug!(label = candidate.label, "broadening probe timed out");
                None
            }
        }
    });
    let estimates = join_all(probes).await;

    candidates
        .into_iter()
        .zip(estimates)
        .filter_map(|(candidate, estimate)| {
            let estimate = estimate?;
            let floor = (current_count as f64 * candidate.gain_factor).ceil() as u32;
            if estimate as usize > current_count && estimate >= floor.max(1) {
                Some(AlternativeSearchOption {
                    criteria: candidate.criteria,
                    estimated_contracts: estimate,
                    label: candidate.label.to_string(),
                    description: candidate.description,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Sample one page and extrapolate: a full page reads as "at least a
/// thousand", anything less scales by a fixed multiplier.
async fn probe_estimate<A: AwardApi + Sync>(
    api: &A,
    criteria: &SearchCriteria,
) -> Result<u32, SearchError> {
    let rows = api.fetch_page(criteria, 1, PROBE_SAMPLE_ROWS).await?;
    let count = rows.len() as u32;
    if count >= PROBE_SAMPLE_ROWS {
        Ok(FULL_PAGE_ESTIMATE)
    } else {
        Ok(count * ESTIMATE_MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fedlead_core::RawAward;

    type PageFn = Box<dyn Fn(&SearchCriteria, u32) -> Result<Vec<RawAward>, SearchError> + Send + Sync>;

    struct StubApi {
        respond: PageFn,
    }

    #[async_trait]
    impl AwardApi for StubApi {
        async fn fetch_page(
            &self,
            criteria: &SearchCriteria,
            page: u32,
            _limit: u32,
        ) -> Result<Vec<RawAward>, SearchError> {
            (self.respond)(criteria, page)
        }
    }

    fn rows(n: usize) -> Vec<RawAward> {
        (0..n).map(|_| RawAward::default()).collect()
    }

    fn narrow_criteria() -> SearchCriteria {
        SearchCriteria {
            naics_code: Some("541511".into()),
            set_aside_code: Some("WOSB".into()),
            zip_code: Some("01760".into()),
            ..Default::default()
        }
    }

    #[test]
    fn fallback_drops_location_first() {
        let (relaxed, dropped) = automatic_fallback(&narrow_criteria()).unwrap();
        assert_eq!(dropped, "location");
        assert!(!relaxed.has_location());
        assert!(relaxed.set_aside_code.is_some());
    }

    #[test]
    fn fallback_drops_set_aside_when_no_location() {
        let criteria = SearchCriteria {
            naics_code: Some("541511".into()),
            set_aside_code: Some("WOSB".into()),
            ..Default::default()
        };
        let (relaxed, dropped) = automatic_fallback(&criteria).unwrap();
        assert_eq!(dropped, "set_aside");
        assert!(relaxed.set_aside_code.is_none());
        assert!(relaxed.set_aside_filtered);
    }

    #[test]
    fn no_fallback_without_droppable_filters() {
        let criteria = SearchCriteria {
            naics_code: Some("541511".into()),
            ..Default::default()
        };
        assert!(automatic_fallback(&criteria).is_none());
    }

    #[test]
    fn naics_prefix_requires_four_digits() {
        let criteria = SearchCriteria {
            naics_code: Some("541511".into()),
            ..Default::default()
        };
        assert_eq!(naics_industry_prefix(&criteria), Some("541".into()));

        let criteria = SearchCriteria {
            naics_code: Some("541".into()),
            ..Default::default()
        };
        assert_eq!(naics_industry_prefix(&criteria), None);
    }

    #[test]
    fn naics_prefix_tolerates_non_ascii_code() {
        let criteria = SearchCriteria {
            naics_code: Some("54é1".into()),
            ..Default::default()
        };
        assert_eq!(naics_industry_prefix(&criteria), None);
    }

    #[test]
    fn every_candidate_strictly_relaxes() {
        let original = narrow_criteria();
        for candidate in candidates(&original) {
            let c = &candidate.criteria;
            assert_ne!(*c, original, "{} changed nothing", candidate.label);
            // No candidate may introduce a filter the original lacked or
            // narrow an existing one.
            assert!(c.zip_code.is_none() || c.zip_code == original.zip_code);
            assert!(c.state.is_none() || c.state == original.state);
            assert!(
                c.set_aside_code.is_none() || c.set_aside_code == original.set_aside_code
            );
            if let (Some(relaxed), Some(orig)) =
                (c.naics_code.as_deref(), original.naics_code.as_deref())
            {
                assert!(orig.starts_with(relaxed), "{} narrowed NAICS", candidate.label);
            }
        }
    }

    #[test]
    fn candidate_chain_ends_with_remove_all() {
        let cands = candidates(&narrow_criteria());
        assert_eq!(cands.last().unwrap().label, "remove_all_filters");
        assert!(cands.iter().any(|c| c.label == "nationwide"));
        assert!(cands.iter().any(|c| c.label == "industry_group"));
    }

    #[tokio::test]
    async fn alternatives_only_when_estimate_beats_current() {
        // Probes return 4 rows → estimate 20 for every candidate.
        let api = StubApi {
            respond: Box::new(|_, _| Ok(rows(4))),
        };
        let options = propose_alternatives(&api, &narrow_criteria(), 30).await;
        assert!(options.is_empty(), "estimate 20 must not beat current 30");

        let options = propose_alternatives(&api, &narrow_criteria(), 3).await;
        assert!(!options.is_empty());
        for opt in &options {
            assert!(opt.estimated_contracts as usize > 3);
        }
    }

    #[tokio::test]
    async fn full_probe_page_estimates_one_thousand() {
        let api = StubApi {
            respond: Box::new(|_, _| Ok(rows(100))),
        };
        let options = propose_alternatives(&api, &narrow_criteria(), 12).await;
        assert!(!options.is_empty());
        assert!(options.iter().all(|o| o.estimated_contracts == 1_000));
    }

    #[tokio::test]
    async fn location_drop_needs_fifty_percent_gain() {
        // Location candidate estimates 5×14 = 70; current 60. 70 > 60 but
        // 70 < 90 (1.5×), so the nationwide option must be withheld while
        // same-estimate non-location options survive.
        let api = StubApi {
            respond: Box::new(|_, _| Ok(rows(14))),
        };
        let options = propose_alternatives(&api, &narrow_criteria(), 60).await;
        assert!(options.iter().all(|o| o.label != "nationwide"));
        assert!(options.iter().any(|o| o.label == "all_business_types"));
    }

    #[tokio::test]
    async fn failed_probe_drops_candidate_silently() {
        let api = StubApi {
            respond: Box::new(|criteria, _| {
                if criteria.has_location() {
                    Err(SearchError::Server {
                        status: 500,
                        body: "boom".into(),
                    })
                } else {
                    Ok(rows(50))
                }
            }),
        };
        // Candidates that keep the location filter error out; the rest
        // come back with estimate 250.
        let options = propose_alternatives(&api, &narrow_criteria(), 10).await;
        assert!(!options.is_empty());
        assert!(options.iter().all(|o| !o.criteria.has_location()));
    }
}
