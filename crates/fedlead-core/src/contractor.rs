//! Prime and tier-2 contractor records from the reference rosters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractorTier {
    Prime,
    Tier2,
}

/// One contractor from the prime or tier-2 roster.
///
/// Identity for dedup purposes is the normalized name, not this struct;
/// see `fedlead-resolve`'s contractor module for the normalization rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractorRecord {
    pub name: String,
    pub tier: ContractorTier,
    pub naics_codes: Vec<String>,
    pub specialties: Vec<String>,
    /// Agencies this contractor is known to hold work with.
    pub agencies: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Named small-business liaison, when one is published.
    pub sb_liaison: Option<String>,
    /// Registered supplier/teaming portal (primes only).
    pub supplier_portal: Option<String>,
    pub website: Option<String>,
}

impl ContractorRecord {
    pub fn new(name: &str, tier: ContractorTier) -> Self {
        Self {
            name: name.to_string(),
            tier,
            naics_codes: Vec::new(),
            specialties: Vec::new(),
            agencies: Vec::new(),
            email: None,
            phone: None,
            sb_liaison: None,
            supplier_portal: None,
            website: None,
        }
    }
}
