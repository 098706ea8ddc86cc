//! Enrichment types: command metadata, small-business contacts, budget
//! trend, and the resolver's output record.

use serde::{Deserialize, Serialize};

/// An agency's small-business office contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmallBusinessContact {
    pub office: String,
    pub director: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Canonical record for a contracting command or civilian agency.
///
/// Loaded once from the reference store; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandInfo {
    /// Full canonical name, e.g. "Naval Facilities Engineering Systems Command".
    pub name: String,
    /// Short form, e.g. "NAVFAC".
    pub abbreviation: String,
    pub parent_agency: String,
    pub website: Option<String>,
    /// Agency-hosted procurement forecast.
    pub forecast_url: Option<String>,
    /// SAM.gov contract-opportunity search scoped to this command.
    pub sam_forecast_url: Option<String>,
    pub contact: SmallBusinessContact,
    pub capabilities: Vec<String>,
}

/// Budget-authority snapshot pair for a parent agency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTrend {
    pub fiscal_year: u16,
    pub prior_authority: f64,
    pub current_authority: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Growing,
    Flat,
    Declining,
}

impl BudgetTrend {
    /// Year-over-year direction with a ±2% flat band.
    pub fn direction(&self) -> TrendDirection {
        if self.prior_authority <= 0.0 {
            return TrendDirection::Flat;
        }
        let change = (self.current_authority - self.prior_authority) / self.prior_authority;
        if change > 0.02 {
            TrendDirection::Growing
        } else if change < -0.02 {
            TrendDirection::Declining
        } else {
            TrendDirection::Flat
        }
    }
}

/// Output of the hierarchical resolver.
///
/// `source` records which tier of the fallback chain produced the match;
/// it is non-empty whenever any pain points were found and `""` only when
/// nothing matched at all. The contact is always populated — the final
/// tier synthesizes a placeholder rather than returning nothing.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichmentResult {
    pub command: Option<String>,
    pub pain_points: Vec<String>,
    pub source: String,
    pub contact: SmallBusinessContact,
    pub forecast_url: Option<String>,
    pub sam_forecast_url: Option<String>,
    pub website: Option<String>,
    pub budget_trend: Option<BudgetTrend>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_direction_bands() {
        let t = BudgetTrend {
            fiscal_year: 2025,
            prior_authority: 100.0,
            current_authority: 110.0,
        };
        assert_eq!(t.direction(), TrendDirection::Growing);

        let t = BudgetTrend {
            prior_authority: 100.0,
            current_authority: 101.0,
            ..t
        };
        assert_eq!(t.direction(), TrendDirection::Flat);

        let t = BudgetTrend {
            prior_authority: 100.0,
            current_authority: 90.0,
            ..t
        };
        assert_eq!(t.direction(), TrendDirection::Declining);
    }

    #[test]
    fn zero_prior_authority_is_flat() {
        let t = BudgetTrend {
            fiscal_year: 2025,
            prior_authority: 0.0,
            current_authority: 50.0,
        };
        assert_eq!(t.direction(), TrendDirection::Flat);
    }
}
