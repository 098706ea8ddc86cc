//! Per-office spending aggregates built by folding award pages.

use serde::Serialize;

use crate::enrichment::EnrichmentResult;

/// Composite identity for an office within one search session.
///
/// `office_id` is the upstream office code when present, with the agency
/// key as fallback, so codeless offices still bucket consistently.
pub fn office_key(office_id: &str, sub_agency: &str, office_name: &str) -> String {
    format!("{office_id}|{sub_agency}|{office_name}")
}

/// Running spending bucket for one contracting office.
///
/// Totals only ever grow while records are folded in; the percentile
/// fields stay `None` until [`OfficeAggregate::finalize_percentiles`] runs
/// once after the fold is complete.
#[derive(Debug, Clone, Serialize)]
pub struct OfficeAggregate {
    pub office_key: String,
    pub agency_name: String,
    pub sub_agency: String,
    pub office_name: String,
    pub office_code: Option<String>,
    /// "City, ST" when place of performance is known.
    pub location: Option<String>,
    pub total_spending: f64,
    pub set_aside_spending: f64,
    pub contract_count: u32,
    pub set_aside_contract_count: u32,
    /// Offer counts from records that carried a parseable value.
    pub offers_data: Vec<u32>,
    pub bids_per_contract_5th: Option<f64>,
    pub bids_per_contract_avg: Option<f64>,
    pub bids_per_contract_95th: Option<f64>,
    pub enrichment: Option<EnrichmentResult>,
}

impl OfficeAggregate {
    pub fn new(
        office_key: String,
        agency_name: String,
        sub_agency: String,
        office_name: String,
        office_code: Option<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            office_key,
            agency_name,
            sub_agency,
            office_name,
            office_code,
            location,
            total_spending: 0.0,
            set_aside_spending: 0.0,
            contract_count: 0,
            set_aside_contract_count: 0,
            offers_data: Vec::new(),
            bids_per_contract_5th: None,
            bids_per_contract_avg: None,
            bids_per_contract_95th: None,
            enrichment: None,
        }
    }

    /// Fold one award into the bucket.
    ///
    /// `set_aside` reflects the session's OR semantics: the record counts
    /// toward set-aside totals when the query filtered for set-asides or
    /// the record self-reports a set-aside type.
    pub fn fold(&mut self, amount: f64, set_aside: bool, offers: Option<u32>) {
        self.total_spending += amount;
        self.contract_count += 1;
        if set_aside {
            self.set_aside_spending += amount;
            self.set_aside_contract_count += 1;
        }
        if let Some(n) = offers {
            self.offers_data.push(n);
        }
    }

    /// Compute the 5th/avg/95th number-of-offers percentiles.
    ///
    /// Nearest-rank: index `floor(p * n)` clamped to `[0, n-1]`. Average is
    /// rounded to one decimal. All three are `None` with no samples.
    pub fn finalize_percentiles(&mut self) {
        if self.offers_data.is_empty() {
            return;
        }
        let mut sorted = self.offers_data.clone();
        sorted.sort_unstable();
        let n = sorted.len();

        let idx = |p: f64| ((p * n as f64).floor() as usize).min(n - 1);
        let sum: u64 = sorted.iter().map(|&v| v as u64).sum();

        self.bids_per_contract_5th = Some(sorted[idx(0.05)] as f64);
        self.bids_per_contract_95th = Some(sorted[idx(0.95)] as f64);
        self.bids_per_contract_avg = Some((sum as f64 / n as f64 * 10.0).round() / 10.0);
    }
}
