//! Per-office spending aggregation.
//!
//! Raw award rows fold into one [`OfficeAggregate`] per composite office
//! key. Names pass through the normalizer before keying so spelling
//! variants of the same office land in the same bucket. Percentiles and
//! ranking happen exactly once, after all pages are folded.

use std::collections::HashMap;

use fedlead_core::{OfficeAggregate, RawAward, office_key};
use fedlead_refdata::ReferenceStore;
use fedlead_resolve::Normalizer;

/// Presentation cap on ranked aggregates.
pub const TOP_OFFICES: usize = 50;

/// Set-aside spending is bucketed into bands of this width before ranking;
/// differences inside one band are presentation noise and ranking falls
/// back to total spending there.
const TIE_TOLERANCE: f64 = 1_000.0;

pub struct Aggregator<'a> {
    normalizer: Normalizer<'a>,
    /// Session-level set-aside flag: when the query filtered by set-aside,
    /// every record counts as set-aside spend (OR'd with the record's own
    /// self-reported type).
    set_aside_filtered: bool,
    buckets: HashMap<String, OfficeAggregate>,
    records_folded: usize,
}

impl<'a> Aggregator<'a> {
    pub fn new(store: &'a ReferenceStore, set_aside_filtered: bool) -> Self {
        Self {
            normalizer: Normalizer::new(store),
            set_aside_filtered,
            buckets: HashMap::new(),
            records_folded: 0,
        }
    }

    pub fn fold_page(&mut self, page: Vec<RawAward>) {
        for raw in page {
            self.fold_record(raw);
        }
    }

    fn fold_record(&mut self, raw: RawAward) {
        let record = raw.into_record();

        let office_name = self
            .normalizer
            .normalize(&record.office_name, record.office_code.as_deref());
        let sub_agency = self.normalizer.normalize(&record.sub_agency, None);

        let office_id = record
            .office_code
            .clone()
            .unwrap_or_else(|| record.agency_key.clone());
        let key = office_key(&office_id, &sub_agency, &office_name);

        let set_aside = self.set_aside_filtered || record.set_aside.is_some();

        let bucket = self.buckets.entry(key.clone()).or_insert_with(|| {
            let location = match (&record.pop_city, &record.pop_state) {
                (Some(city), Some(state)) => Some(format!("{city}, {state}")),
                (Some(city), None) => Some(city.clone()),
                (None, Some(state)) => Some(state.clone()),
                (None, None) => None,
            };
            OfficeAggregate::new(
                key,
                record.agency_name.clone(),
                sub_agency.clone(),
                office_name.clone(),
                record.office_code.clone(),
                location,
            )
        });
        bucket.fold(record.amount, set_aside, record.number_of_offers);
        self.records_folded += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn records_folded(&self) -> usize {
        self.records_folded
    }

    /// Finalize percentiles, rank, and cap to the top offices.
    pub fn finish(self) -> Vec<OfficeAggregate> {
        let mut aggregates: Vec<OfficeAggregate> = self.buckets.into_values().collect();
        for agg in &mut aggregates {
            agg.finalize_percentiles();
        }
        rank(&mut aggregates);
        aggregates.truncate(TOP_OFFICES);
        aggregates
    }
}

/// Rank by set-aside spending descending, bucketed into $1,000 bands so
/// the comparator stays a total order; within a band, fall back to total
/// spending descending.
fn rank(aggregates: &mut [OfficeAggregate]) {
    let band = |agg: &OfficeAggregate| (agg.set_aside_spending / TIE_TOLERANCE).floor();
    aggregates.sort_by(|a, b| {
        band(b)
            .partial_cmp(&band(a))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                b.total_spending
                    .partial_cmp(&a.total_spending)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn award(office: &str, amount: f64, offers: Option<u32>) -> RawAward {
        RawAward {
            awarding_office: Some(office.to_string()),
            awarding_office_code: Some(office.to_string()),
            award_amount: Some(amount),
            awarding_agency: Some("Department of Defense".to_string()),
            awarding_sub_agency: Some("Department of the Navy".to_string()),
            number_of_offers: offers.map(|n| serde_json::json!(n)),
            ..Default::default()
        }
    }

    #[test]
    fn two_awards_same_office_one_bucket() {
        let store = ReferenceStore::new();
        let mut agg = Aggregator::new(&store, false);
        agg.fold_page(vec![
            award("N68711", 1_000_000.0, Some(5)),
            award("N68711", 500_000.0, None),
        ]);

        let result = agg.finish();
        assert_eq!(result.len(), 1);
        let office = &result[0];
        assert_eq!(office.total_spending, 1_500_000.0);
        assert_eq!(office.contract_count, 2);
        assert_eq!(office.offers_data, vec![5]);
        assert_eq!(office.bids_per_contract_avg, Some(5.0));
        assert_eq!(office.office_name, "NAVFAC Southwest");
    }

    #[test]
    fn spelling_variants_bucket_together() {
        let store = ReferenceStore::new();
        let mut agg = Aggregator::new(&store, false);
        // Same office code, different raw spellings.
        agg.fold_page(vec![
            award("NAVFAC SOUTHWEST", 100.0, None),
            award("NAVFAC SOUTHWEST", 200.0, None),
        ]);
        let mut a = award("navfac southwest", 300.0, None);
        a.awarding_office_code = Some("NAVFAC SOUTHWEST".to_string());
        agg.fold_page(vec![a]);

        let result = agg.finish();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_spending, 600.0);
    }

    #[test]
    fn totals_are_conserved_across_buckets() {
        let store = ReferenceStore::new();
        let mut agg = Aggregator::new(&store, false);
        let amounts = [100.0, 250.0, 75.5, 1000.0, 42.0];
        agg.fold_page(vec![
            award("N68711", amounts[0], None),
            award("N00024", amounts[1], None),
            award("N68711", amounts[2], None),
            award("W912DY", amounts[3], None),
            award("N00024", amounts[4], None),
        ]);

        let result = agg.finish();
        let total: f64 = result.iter().map(|a| a.total_spending).sum();
        assert!((total - amounts.iter().sum::<f64>()).abs() < 1e-9);
        let count: u32 = result.iter().map(|a| a.contract_count).sum();
        assert_eq!(count, 5);
    }

    #[test]
    fn set_aside_or_semantics() {
        let store = ReferenceStore::new();

        // Record self-reports a set-aside, session did not filter.
        let mut agg = Aggregator::new(&store, false);
        let mut a = award("N68711", 500.0, None);
        a.set_aside_type = Some("8(a) Sole Source".to_string());
        agg.fold_page(vec![a, award("N68711", 300.0, None)]);
        let result = agg.finish();
        assert_eq!(result[0].set_aside_spending, 500.0);
        assert_eq!(result[0].set_aside_contract_count, 1);

        // Session filtered: everything counts.
        let mut agg = Aggregator::new(&store, true);
        agg.fold_page(vec![award("N68711", 500.0, None), award("N68711", 300.0, None)]);
        let result = agg.finish();
        assert_eq!(result[0].set_aside_spending, 800.0);
    }

    #[test]
    fn ranking_tie_band_falls_back_to_total() {
        let store = ReferenceStore::new();
        let mut agg = Aggregator::new(&store, false);

        // Office A: set-aside 10_500, total 11_000.
        let mut a1 = award("N68711", 10_500.0, None);
        a1.set_aside_type = Some("SBA".to_string());
        let a2 = award("N68711", 500.0, None);
        // Office B: set-aside 10_000 (within $1k of A), total 50_000.
        let mut b1 = award("N00024", 10_000.0, None);
        b1.set_aside_type = Some("SBA".to_string());
        let b2 = award("N00024", 40_000.0, None);

        agg.fold_page(vec![a1, a2, b1, b2]);
        let result = agg.finish();
        // Within the tolerance band, B's larger total wins despite A's
        // larger set-aside figure.
        assert_eq!(result[0].office_name, "NAVSEA Headquarters");
        assert_eq!(result[1].office_name, "NAVFAC Southwest");
    }

    #[test]
    fn ranking_outside_band_uses_set_aside() {
        let store = ReferenceStore::new();
        let mut agg = Aggregator::new(&store, false);

        let mut a = award("N68711", 50_000.0, None);
        a.set_aside_type = Some("SBA".to_string());
        let mut b = award("N00024", 10_000.0, None);
        b.set_aside_type = Some("SBA".to_string());
        let b2 = award("N00024", 90_000.0, None);

        agg.fold_page(vec![a, b, b2]);
        let result = agg.finish();
        assert_eq!(result[0].office_name, "NAVFAC Southwest");
    }

    #[test]
    fn ranking_is_total_order_on_near_band_chain() {
        // Adjacent set-aside figures differ by $900 all the way down the
        // chain; pairwise closeness must not make the order ill-defined.
        let store = ReferenceStore::new();
        let mut agg = Aggregator::new(&store, false);
        for i in 0..64u32 {
            let mut a = award(&format!("OFFICE {i}"), f64::from(i) * 900.0 + 1.0, None);
            a.awarding_office_code = Some(format!("X{i:05}"));
            a.set_aside_type = Some("SBA".to_string());
            agg.fold_page(vec![a]);
        }
        let result = agg.finish();

        let band = |v: f64| (v / TIE_TOLERANCE).floor();
        for pair in result.windows(2) {
            let (hi, lo) = (&pair[0], &pair[1]);
            assert!(
                band(hi.set_aside_spending) > band(lo.set_aside_spending)
                    || (band(hi.set_aside_spending) == band(lo.set_aside_spending)
                        && hi.total_spending >= lo.total_spending),
                "ranking not monotone: {} before {}",
                hi.office_name,
                lo.office_name
            );
        }
    }

    #[test]
    fn cap_at_top_50() {
        let store = ReferenceStore::new();
        let mut agg = Aggregator::new(&store, false);
        for i in 0..60 {
            let mut a = award(&format!("OFFICE {i}"), 100.0 * f64::from(i), None);
            a.awarding_office_code = Some(format!("X{i:05}"));
            agg.fold_page(vec![a]);
        }
        let result = agg.finish();
        assert_eq!(result.len(), TOP_OFFICES);
    }

    #[test]
    fn records_folded_counts_every_row() {
        let store = ReferenceStore::new();
        let mut agg = Aggregator::new(&store, false);
        assert!(agg.is_empty());
        agg.fold_page(vec![award("N68711", 1.0, None), award("N00024", 2.0, None)]);
        assert_eq!(agg.records_folded(), 2);
        assert!(!agg.is_empty());
    }
}
