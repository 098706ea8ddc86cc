//! Award search and per-office spending aggregation.
//!
//! [`search_contracts`] is the session entry point: it validates the
//! criteria, pages awards out of the spending API, folds them into ranked
//! [`OfficeAggregate`]s, attaches enrichment to every office, and — for
//! empty or thin result sets — broadens the search.

use std::time::Duration;

use fedlead_core::{AlternativeSearchOption, OfficeAggregate, SearchCriteria, SearchSummary};
use fedlead_refdata::ReferenceStore;
use fedlead_resolve::resolve_enrichment;
use tracing::{info, warn};

pub mod aggregate;
pub mod broaden;
pub mod client;

pub use aggregate::Aggregator;
pub use broaden::{automatic_fallback, propose_alternatives, THIN_RESULT_THRESHOLD};
pub use client::{AwardApi, SearchError, SpendingClient, PAGE_LIMIT};

/// Upper bound on pages fetched per search session.
const MAX_PAGES: u32 = 10;
/// Pause between sequential page fetches.
const PAGE_DELAY: Duration = Duration::from_millis(100);

/// Everything a search session produces for presentation.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Ranked per-office aggregates, enrichment attached.
    pub agencies: Vec<OfficeAggregate>,
    /// Probed relaxations worth offering, when the result set came back
    /// empty or thin.
    pub suggestions: Option<Vec<AlternativeSearchOption>>,
    pub summary: SearchSummary,
    /// Which filter the automatic zero-result fallback dropped, if any.
    pub fallback_applied: Option<&'static str>,
}

/// Run one search session end to end.
///
/// Pages are fetched sequentially with a short delay between requests.
/// Upstream failures never fail the session: any page error logs at
/// `warn!` and the fold continues with whatever landed before it, down to
/// an empty report when the API is unreachable. Invalid criteria are the
/// only error a caller sees. A zero-result search retries once with one
/// filter automatically relaxed before giving up.
pub async fn search_contracts<A: AwardApi + Sync>(
    api: &A,
    store: &ReferenceStore,
    criteria: &SearchCriteria,
) -> Result<SearchReport, SearchError> {
    let criteria = effective_criteria(store, criteria)?;

    let mut fallback_applied = None;
    let mut aggregator = fetch_all(api, store, &criteria).await;

    if aggregator.is_empty() {
        if let Some((relaxed, dropped)) = automatic_fallback(&criteria) {
            info!(dropped, "no results, retrying with one filter relaxed");
            aggregator = fetch_all(api, store, &relaxed).await;
            if !aggregator.is_empty() {
                fallback_applied = Some(dropped);
            }
        }
    }

    let records = aggregator.records_folded();
    let mut agencies = aggregator.finish();
    attach_enrichment(store, &mut agencies);

    let summary = summarize(&agencies);
    info!(
        records,
        offices = summary.office_count,
        total = summary.total_spending,
        "search session complete"
    );

    let suggestions = if agencies.len() < THIN_RESULT_THRESHOLD || fallback_applied.is_some() {
        let options =
            propose_alternatives(api, &criteria, summary.contract_count as usize).await;
        (!options.is_empty()).then_some(options)
    } else {
        None
    };

    Ok(SearchReport {
        agencies,
        suggestions,
        summary,
        fallback_applied,
    })
}

/// Validate the criteria and bridge a PSC-only search to NAICS.
///
/// The spending API is queried by industry, so a search needs a NAICS
/// code: either supplied directly, or mapped from the product service
/// code's prefix. Criteria with neither are rejected.
fn effective_criteria(
    store: &ReferenceStore,
    criteria: &SearchCriteria,
) -> Result<SearchCriteria, SearchError> {
    if criteria.naics_code.is_some() {
        return Ok(criteria.clone());
    }
    if let Some(psc) = criteria.psc_code.as_deref() {
        if let Some(first) = store.naics_for_psc(psc).and_then(|codes| codes.first().copied()) {
            let mut bridged = criteria.clone();
            bridged.naics_code = Some(first.to_string());
            return Ok(bridged);
        }
        return Err(SearchError::InvalidCriteria(format!(
            "no NAICS mapping for product service code {psc}"
        )));
    }
    Err(SearchError::InvalidCriteria(
        "a NAICS or product service code is required".to_string(),
    ))
}

/// Page through the spending API, folding each page as it lands.
///
/// Page failures truncate the fetch but never propagate; the aggregator
/// keeps whatever folded before the failure, which may be nothing.
async fn fetch_all<'a, A: AwardApi + Sync>(
    api: &A,
    store: &'a ReferenceStore,
    criteria: &SearchCriteria,
) -> Aggregator<'a> {
    let set_aside_session = criteria.set_aside_code.is_some() || criteria.set_aside_filtered;
    let mut aggregator = Aggregator::new(store, set_aside_session);

    for page in 1..=MAX_PAGES {
        if page > 1 {
            tokio::time::sleep(PAGE_DELAY).await;
        }
        let rows = match api.fetch_page(criteria, page, PAGE_LIMIT).await {
            Ok(rows) => rows,
            Err(err) => {
                warn!(page, error = %err, "page fetch failed, keeping partial results");
                break;
            }
        };
        let full_page = rows.len() as u32 >= PAGE_LIMIT;
        aggregator.fold_page(rows);
        if !full_page {
            break;
        }
    }

    aggregator
}

fn attach_enrichment(store: &ReferenceStore, agencies: &mut [OfficeAggregate]) {
    for agg in agencies {
        let detected = store
            .detect_command_token(&agg.office_name)
            .map(|info| info.abbreviation.clone());
        agg.enrichment = Some(resolve_enrichment(
            store,
            &agg.office_name,
            &agg.sub_agency,
            &agg.agency_name,
            detected.as_deref(),
        ));
    }
}

fn summarize(agencies: &[OfficeAggregate]) -> SearchSummary {
    let mut summary = SearchSummary {
        office_count: agencies.len(),
        ..Default::default()
    };
    for agg in agencies {
        summary.contract_count += agg.contract_count;
        summary.total_spending += agg.total_spending;
        summary.set_aside_spending += agg.set_aside_spending;
    }
    summary
}
