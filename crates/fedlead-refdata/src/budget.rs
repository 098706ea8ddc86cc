//! Budget-authority snapshots per parent agency, FY2024 → FY2025
//! discretionary authority in dollars.

use fedlead_core::BudgetTrend;

pub(crate) const BUDGET_SNAPSHOTS: &[(&str, f64, f64)] = &[
    ("department of defense", 824_300_000_000.0, 849_800_000_000.0),
    ("department of the army", 184_500_000_000.0, 185_900_000_000.0),
    ("department of the navy", 255_800_000_000.0, 257_600_000_000.0),
    ("department of the air force", 259_000_000_000.0, 262_600_000_000.0),
    ("department of commerce", 11_400_000_000.0, 11_000_000_000.0),
    ("department of energy", 50_300_000_000.0, 52_000_000_000.0),
    ("department of health and human services", 130_700_000_000.0, 127_300_000_000.0),
    ("department of homeland security", 61_800_000_000.0, 65_000_000_000.0),
    ("department of veterans affairs", 134_800_000_000.0, 142_800_000_000.0),
    ("general services administration", 10_300_000_000.0, 10_100_000_000.0),
    ("national aeronautics and space administration", 24_900_000_000.0, 25_400_000_000.0),
    ("department of transportation", 27_800_000_000.0, 28_600_000_000.0),
    ("department of the interior", 17_800_000_000.0, 18_200_000_000.0),
    ("department of agriculture", 26_200_000_000.0, 26_500_000_000.0),
    ("department of justice", 37_500_000_000.0, 38_100_000_000.0),
    ("environmental protection agency", 10_100_000_000.0, 9_200_000_000.0),
];

pub(crate) const SNAPSHOT_FISCAL_YEAR: u16 = 2025;

pub(crate) fn snapshots() -> Vec<(&'static str, BudgetTrend)> {
    BUDGET_SNAPSHOTS
        .iter()
        .map(|&(agency, prior, current)| {
            (
                agency,
                BudgetTrend {
                    fiscal_year: SNAPSHOT_FISCAL_YEAR,
                    prior_authority: prior,
                    current_authority: current,
                },
            )
        })
        .collect()
}
