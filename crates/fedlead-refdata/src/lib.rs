//! Immutable reference tables for agency resolution and contractor
//! suggestion.
//!
//! Everything here is compiled-constant data assembled once by
//! [`ReferenceStore::new`] and shared by reference afterwards. Matching
//! *policy* (tier ordering, normalization rules) lives in `fedlead-resolve`;
//! this crate only answers point lookups.

mod abbreviations;
mod budget;
mod commands;
mod contractors;
mod naics;
mod osbp;
mod pain_points;

use std::collections::HashMap;

use fedlead_core::{BudgetTrend, CommandInfo, ContractorRecord, SmallBusinessContact};
use tracing::debug;

/// Load-once lookup tables keyed the way each resolver tier needs them.
pub struct ReferenceStore {
    /// DoD command records keyed by uppercase abbreviation.
    dod_commands: HashMap<String, CommandInfo>,
    /// Civilian agency records keyed by uppercase abbreviation.
    civilian_agencies: HashMap<String, CommandInfo>,
    /// Branch fallbacks: (detection tokens, record), most specific first.
    branches: Vec<(Vec<&'static str>, CommandInfo)>,
    /// Lowercase sub-agency display name → command abbreviation.
    sub_agency_commands: HashMap<String, String>,
    /// Lowercase full command/agency name → abbreviation.
    name_to_abbr: HashMap<String, String>,
    /// Uppercase abbreviation → pain-point corpus.
    pain_points: HashMap<String, Vec<String>>,
    /// Lowercase parent-agency substring → OSBP contact, checked in order.
    osbp_directory: Vec<(&'static str, SmallBusinessContact)>,
    osbp_placeholder: SmallBusinessContact,
    primes: Vec<ContractorRecord>,
    tier2: Vec<ContractorRecord>,
    /// Lowercase parent-agency name → budget snapshot.
    budget: HashMap<&'static str, BudgetTrend>,
    /// Phrase abbreviations sorted longest-key-first for prefix matching.
    phrases: Vec<(&'static str, &'static str)>,
    office_codes: HashMap<&'static str, &'static str>,
    acronyms: HashMap<&'static str, &'static str>,
    unit_designators: HashMap<&'static str, &'static str>,
    states: HashMap<&'static str, &'static str>,
}

impl Default for ReferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceStore {
    pub fn new() -> Self {
        let dod: Vec<CommandInfo> = commands::dod_commands();
        let civ: Vec<CommandInfo> = commands::civilian_agencies();

        let mut name_to_abbr = HashMap::new();
        for c in dod.iter().chain(civ.iter()) {
            name_to_abbr.insert(c.name.to_lowercase(), c.abbreviation.clone());
        }

        let dod_commands: HashMap<String, CommandInfo> = dod
            .into_iter()
            .map(|c| (c.abbreviation.to_uppercase(), c))
            .collect();
        let civilian_agencies: HashMap<String, CommandInfo> = civ
            .into_iter()
            .map(|c| (c.abbreviation.to_uppercase(), c))
            .collect();

        let sub_agency_commands = commands::SUB_AGENCY_COMMANDS
            .iter()
            .map(|&(name, abbr)| (name.to_string(), abbr.to_string()))
            .collect();

        let pain_points = pain_points::PAIN_POINTS
            .iter()
            .map(|&(key, points)| {
                (
                    key.to_string(),
                    points.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();

        let mut phrases: Vec<_> = abbreviations::PHRASE_ABBREVIATIONS.to_vec();
        phrases.sort_by_key(|(key, _)| std::cmp::Reverse(key.len()));

        let store = Self {
            dod_commands,
            civilian_agencies,
            branches: commands::service_branches(),
            sub_agency_commands,
            name_to_abbr,
            pain_points,
            osbp_directory: osbp::osbp_directory(),
            osbp_placeholder: osbp::placeholder_contact(),
            primes: contractors::prime_roster(),
            tier2: contractors::tier2_roster(),
            budget: budget::snapshots().into_iter().collect(),
            phrases,
            office_codes: abbreviations::OFFICE_CODES.iter().copied().collect(),
            acronyms: abbreviations::ACRONYMS.iter().copied().collect(),
            unit_designators: abbreviations::UNIT_DESIGNATORS.iter().copied().collect(),
            states: abbreviations::STATES.iter().copied().collect(),
        };

        debug!(
            dod = store.dod_commands.len(),
            civilian = store.civilian_agencies.len(),
            primes = store.primes.len(),
            tier2 = store.tier2.len(),
            "reference store loaded"
        );
        store
    }

    // ── Command lookups ──

    /// Look up any command or civilian agency by abbreviation,
    /// case-insensitively.
    pub fn command(&self, abbreviation: &str) -> Option<&CommandInfo> {
        let key = abbreviation.trim().to_uppercase();
        self.dod_commands
            .get(&key)
            .or_else(|| self.civilian_agencies.get(&key))
    }

    /// Exact sub-agency display name → command record.
    pub fn command_for_sub_agency(&self, sub_agency: &str) -> Option<&CommandInfo> {
        let abbr = self.sub_agency_commands.get(&sub_agency.trim().to_lowercase())?;
        self.command(abbr)
    }

    /// Scan an office name for an embedded command token.
    pub fn detect_command_token(&self, office_name: &str) -> Option<&CommandInfo> {
        let upper = office_name.to_uppercase();
        for &(token, abbr) in commands::COMMAND_KEYWORDS {
            if upper.contains(token) {
                return self.command(abbr);
            }
        }
        None
    }

    /// Civilian agency for a parent-agency string: exact name, then
    /// abbreviation, then substring containment in both directions.
    pub fn civilian_for_parent(&self, parent_agency: &str) -> Option<&CommandInfo> {
        let trimmed = parent_agency.trim();
        if trimmed.is_empty() {
            return None;
        }
        let lower = trimmed.to_lowercase();

        if let Some(abbr) = self.name_to_abbr.get(&lower) {
            if let Some(c) = self.civilian_agencies.get(&abbr.to_uppercase()) {
                return Some(c);
            }
        }
        if let Some(c) = self.civilian_agencies.get(&trimmed.to_uppercase()) {
            return Some(c);
        }
        self.civilian_agencies.values().find(|c| {
            let name = c.name.to_lowercase();
            name.contains(&lower) || lower.contains(&name)
        })
    }

    /// Branch-level fallback: first branch whose token appears in any of
    /// the given strings.
    pub fn service_branch(&self, haystacks: &[&str]) -> Option<&CommandInfo> {
        let uppers: Vec<String> = haystacks.iter().map(|s| s.to_uppercase()).collect();
        for (tokens, info) in &self.branches {
            if tokens
                .iter()
                .any(|t| uppers.iter().any(|h| h.contains(t)))
            {
                return Some(info);
            }
        }
        None
    }

    /// Abbreviation for a full command/agency display name.
    pub fn abbreviation_for_name(&self, name: &str) -> Option<&str> {
        self.name_to_abbr
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    // ── Normalizer tables ──

    pub fn office_code_name(&self, code: &str) -> Option<&str> {
        self.office_codes.get(code.trim().to_uppercase().as_str()).copied()
    }

    /// Phrase abbreviations, longest key first.
    pub fn phrase_abbreviations(&self) -> &[(&'static str, &'static str)] {
        &self.phrases
    }

    pub fn acronym_expansion(&self, word: &str) -> Option<&str> {
        self.acronyms.get(word).copied()
    }

    pub fn keep_uppercase(&self, word: &str) -> bool {
        abbreviations::PRESERVE_UPPER.contains(&word)
    }

    pub fn unit_designator(&self, tag: &str) -> Option<&str> {
        self.unit_designators.get(tag).copied()
    }

    pub fn state_name(&self, code: &str) -> Option<&str> {
        self.states.get(code.trim().to_uppercase().as_str()).copied()
    }

    // ── Enrichment tables ──

    /// Pain points for a command abbreviation or full display name.
    pub fn pain_points_for(&self, key: &str) -> Option<&[String]> {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(points) = self.pain_points.get(&trimmed.to_uppercase()) {
            return Some(points);
        }
        let abbr = self.name_to_abbr.get(&trimmed.to_lowercase())?;
        self.pain_points.get(&abbr.to_uppercase()).map(Vec::as_slice)
    }

    /// OSBP directory lookup by parent-agency substring.
    pub fn osbp_contact(&self, parent_agency: &str) -> Option<&SmallBusinessContact> {
        let lower = parent_agency.to_lowercase();
        self.osbp_directory
            .iter()
            .find(|(key, _)| lower.contains(key))
            .map(|(_, contact)| contact)
    }

    /// Central small-business authority contact; the floor under every
    /// lookup chain.
    pub fn osbp_placeholder(&self) -> &SmallBusinessContact {
        &self.osbp_placeholder
    }

    pub fn budget_trend(&self, parent_agency: &str) -> Option<BudgetTrend> {
        let lower = parent_agency.trim().to_lowercase();
        if lower.is_empty() {
            return None;
        }
        if let Some(t) = self.budget.get(lower.as_str()) {
            return Some(*t);
        }
        self.budget
            .iter()
            .find(|(key, _)| lower.contains(*key) || key.contains(lower.as_str()))
            .map(|(_, t)| *t)
    }

    // ── Contractor tables ──

    pub fn primes(&self) -> &[ContractorRecord] {
        &self.primes
    }

    pub fn tier2(&self) -> &[ContractorRecord] {
        &self.tier2
    }

    pub fn all_contractors(&self) -> impl Iterator<Item = &ContractorRecord> {
        self.primes.iter().chain(self.tier2.iter())
    }

    /// PSC → representative NAICS codes, by 2-char prefix then first char.
    pub fn naics_for_psc(&self, psc: &str) -> Option<Vec<&'static str>> {
        let upper = psc.trim().to_uppercase();
        if let Some(prefix) = upper.get(..2) {
            if let Some(&(_, codes)) = naics::PSC_PREFIX_NAICS
                .iter()
                .find(|(key, _)| *key == prefix)
            {
                return Some(codes.to_vec());
            }
        }
        let family = upper.get(..1)?;
        naics::PSC_FAMILY_NAICS
            .iter()
            .find(|(key, _)| *key == family)
            .map(|&(_, codes)| codes.to_vec())
    }

    /// Contractor specialties suggested by an agency's pain-point text.
    pub fn specialties_for_pain_points(&self, pain_points: &[String]) -> Vec<&'static str> {
        let mut out = Vec::new();
        for point in pain_points {
            let lower = point.to_lowercase();
            for &(keyword, specialty) in pain_points::SPECIALTY_KEYWORDS {
                if lower.contains(keyword) && !out.contains(&specialty) {
                    out.push(specialty);
                }
            }
        }
        out
    }
}
