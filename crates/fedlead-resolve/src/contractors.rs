//! Contractor suggestion: dedup by normalized name, merge across match
//! paths in priority order, rank by contact completeness.

use std::collections::HashSet;

use fedlead_core::{ContractorRecord, ContractorTier};
use fedlead_refdata::ReferenceStore;
use tracing::debug;

const MAX_SUGGESTIONS: usize = 25;

const LEGAL_SUFFIXES: &[&str] = &[
    "LLC", "INC", "INCORPORATED", "CORP", "CORPORATION", "CO", "COMPANY", "LTD", "LP", "LLP",
];

/// What to match contractors against.
#[derive(Debug, Clone, Default)]
pub struct MatchCriteria<'a> {
    pub naics_code: Option<&'a str>,
    pub psc_code: Option<&'a str>,
    /// Agency or command display name the caller is targeting.
    pub agency: Option<&'a str>,
    /// Pain points from a resolved enrichment, mapped to specialties.
    pub pain_points: &'a [String],
}

/// Identity key for dedup: uppercase, punctuation stripped, trailing
/// legal-entity suffixes removed, whitespace collapsed.
pub fn normalize_contractor_name(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| !matches!(c, ',' | '.' | '\'' | '"' | '-'))
        .collect();
    let mut words: Vec<&str> = stripped.split_whitespace().collect();
    while let Some(last) = words.last() {
        if LEGAL_SUFFIXES.contains(&last.to_uppercase().as_str()) {
            words.pop();
        } else {
            break;
        }
    }
    words.join(" ").to_uppercase()
}

/// Suggest contractors for the given criteria, deduplicated and ranked.
///
/// Merge order matters: the primary NAICS criterion (given directly or
/// bridged from a PSC) fills the result first; agency and pain-point
/// matches only add names not already present. First match wins — later
/// paths never overwrite an existing record.
pub fn suggest_contractors(store: &ReferenceStore, criteria: &MatchCriteria<'_>) -> Vec<ContractorRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<ContractorRecord> = Vec::new();

    let push = |record: &ContractorRecord, seen: &mut HashSet<String>, out: &mut Vec<ContractorRecord>| {
        let key = normalize_contractor_name(&record.name);
        if seen.insert(key) {
            out.push(record.clone());
        }
    };

    // Primary criterion: NAICS, either direct or bridged from the PSC.
    let naics_set: Vec<String> = match (criteria.naics_code, criteria.psc_code) {
        (Some(code), _) => vec![code.to_string()],
        (None, Some(psc)) => match store.naics_for_psc(psc) {
            Some(codes) => codes.into_iter().map(str::to_string).collect(),
            None => {
                // No bridge entry: all contractors, ranked by completeness.
                debug!(psc, "no PSC bridge entry, falling back to full roster");
                for record in store.all_contractors() {
                    push(record, &mut seen, &mut out);
                }
                Vec::new()
            }
        },
        (None, None) => Vec::new(),
    };

    for record in store.all_contractors() {
        if naics_matches(&naics_set, &record.naics_codes) {
            push(record, &mut seen, &mut out);
        }
    }

    // Secondary: agency name match.
    if let Some(agency) = criteria.agency {
        let lower = agency.to_lowercase();
        if !lower.trim().is_empty() {
            for record in store.all_contractors() {
                if record.agencies.iter().any(|a| {
                    let al = a.to_lowercase();
                    al.contains(&lower) || lower.contains(&al)
                }) {
                    push(record, &mut seen, &mut out);
                }
            }
        }
    }

    // Secondary: pain-point keywords → specialties.
    let specialties = store.specialties_for_pain_points(criteria.pain_points);
    if !specialties.is_empty() {
        for record in store.all_contractors() {
            if record
                .specialties
                .iter()
                .any(|s| specialties.iter().any(|wanted| s.eq_ignore_ascii_case(wanted)))
            {
                push(record, &mut seen, &mut out);
            }
        }
    }

    // Nothing matched anywhere: rank the full roster rather than
    // returning empty-handed.
    if out.is_empty() {
        for record in store.all_contractors() {
            push(record, &mut seen, &mut out);
        }
    }

    // Stable sort keeps insertion (priority) order among ties.
    out.sort_by_key(|r| std::cmp::Reverse(completeness_score(r)));
    out.truncate(MAX_SUGGESTIONS);
    out
}

/// NAICS match: exact code, or prefix containment when one side is a
/// 3-digit industry prefix.
fn naics_matches(wanted: &[String], have: &[String]) -> bool {
    wanted.iter().any(|w| {
        have.iter().any(|h| {
            h == w || (w.len() < h.len() && h.starts_with(w.as_str())) || (h.len() < w.len() && w.starts_with(h.as_str()))
        })
    })
}

/// Contact-completeness score: +3 email, +2 phone, +1 named liaison,
/// +2 supplier portal (primes only).
fn completeness_score(record: &ContractorRecord) -> u32 {
    let mut score = 0;
    if record.email.is_some() {
        score += 3;
    }
    if record.phone.is_some() {
        score += 2;
    }
    if record.sb_liaison.is_some() {
        score += 1;
    }
    if record.tier == ContractorTier::Prime && record.supplier_portal.is_some() {
        score += 2;
    }
    score
}
