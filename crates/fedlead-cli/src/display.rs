//! Vertical card display for search reports and enrichment results.
//!
//! Renders ranked office aggregates as grouped, human-readable cards with
//! aligned key/value lines, plus contact cards and contractor rosters.

use fedlead_core::{ContractorRecord, ContractorTier, EnrichmentResult, OfficeAggregate};
use fedlead_search::SearchReport;

const MAX_OFFICES_SHOWN: usize = 10;
const MAX_PAIN_POINTS: usize = 4;

// ── Search report ──

pub fn print_search_report(report: &SearchReport) {
    if let Some(dropped) = report.fallback_applied {
        println!("(no exact matches; the {dropped} filter was relaxed)\n");
    }

    println!("=== Search Summary ===");
    println!("  {:<26} {}", "offices", report.summary.office_count);
    println!("  {:<26} {}", "contracts", report.summary.contract_count);
    println!(
        "  {:<26} {}",
        "total spending",
        dollars(report.summary.total_spending)
    );
    println!(
        "  {:<26} {}",
        "set-aside spending",
        dollars(report.summary.set_aside_spending)
    );
    println!();

    let show = report.agencies.len().min(MAX_OFFICES_SHOWN);
    for (rank, agg) in report.agencies[..show].iter().enumerate() {
        print_office_card(rank + 1, agg);
    }
    if report.agencies.len() > MAX_OFFICES_SHOWN {
        println!(
            "... and {} more offices",
            report.agencies.len() - MAX_OFFICES_SHOWN
        );
        println!();
    }

    if let Some(suggestions) = &report.suggestions {
        println!("=== Broaden Your Search ===");
        for opt in suggestions {
            println!(
                "  {:<26} ~{} contracts",
                opt.description, opt.estimated_contracts
            );
        }
        println!();
    }
}

// ── Office card ──

fn print_office_card(rank: usize, agg: &OfficeAggregate) {
    println!("=== #{} {} ===", rank, agg.office_name);
    if !agg.sub_agency.is_empty() {
        println!("{} / {}", agg.agency_name, agg.sub_agency);
    } else {
        println!("{}", agg.agency_name);
    }
    println!();

    println!("Spending");
    if let Some(code) = &agg.office_code {
        println!("  {:<26} {}", "office code", code);
    }
    if let Some(location) = &agg.location {
        println!("  {:<26} {}", "location", location);
    }
    println!("  {:<26} {}", "total", dollars(agg.total_spending));
    println!("  {:<26} {}", "set-aside", dollars(agg.set_aside_spending));
    println!("  {:<26} {}", "contracts", agg.contract_count);
    println!(
        "  {:<26} {}",
        "set-aside contracts", agg.set_aside_contract_count
    );
    if let (Some(p5), Some(avg), Some(p95)) = (
        agg.bids_per_contract_5th,
        agg.bids_per_contract_avg,
        agg.bids_per_contract_95th,
    ) {
        println!("  {:<26} {p5} / {avg} / {p95}", "bids (5th/avg/95th)");
    }
    println!();

    if let Some(enrichment) = &agg.enrichment {
        print_enrichment_body(enrichment);
    }
}

// ── Enrichment ──

pub fn print_enrichment_card(office_name: &str, result: &EnrichmentResult) {
    println!("=== {office_name} ===");
    println!();
    print_enrichment_body(result);
}

fn print_enrichment_body(result: &EnrichmentResult) {
    println!("Enrichment");
    if let Some(command) = &result.command {
        println!("  {:<26} {}", "command", command);
    }
    println!("  {:<26} {}", "source", result.source);
    if let Some(url) = &result.website {
        println!("  {:<26} {}", "website", url);
    }
    if let Some(url) = &result.forecast_url {
        println!("  {:<26} {}", "forecast", url);
    }
    if let Some(url) = &result.sam_forecast_url {
        println!("  {:<26} {}", "sam.gov opportunities", url);
    }
    if let Some(trend) = &result.budget_trend {
        println!(
            "  {:<26} FY{} {} -> {} ({:?})",
            "budget",
            trend.fiscal_year,
            dollars(trend.prior_authority),
            dollars(trend.current_authority),
            trend.direction()
        );
    }
    println!();

    println!("Small Business Office");
    println!("  {:<26} {}", "office", result.contact.office);
    if let Some(director) = &result.contact.director {
        println!("  {:<26} {}", "director", director);
    }
    if let Some(phone) = &result.contact.phone {
        println!("  {:<26} {}", "phone", phone);
    }
    if let Some(email) = &result.contact.email {
        println!("  {:<26} {}", "email", email);
    }
    if let Some(address) = &result.contact.address {
        println!("  {:<26} {}", "address", address);
    }
    println!();

    if !result.pain_points.is_empty() {
        println!("Likely Needs");
        for point in result.pain_points.iter().take(MAX_PAIN_POINTS) {
            println!("  - {point}");
        }
        println!();
    }
}

// ── Contractors ──

pub fn print_contractor_list(matches: &[ContractorRecord]) {
    if matches.is_empty() {
        println!("No teaming partners matched.");
        return;
    }

    println!("=== Teaming Partners ({}) ===", matches.len());
    println!();
    for record in matches {
        let tier = match record.tier {
            ContractorTier::Prime => "prime",
            ContractorTier::Tier2 => "tier 2",
        };
        println!("  {:<34} [{}]", record.name, tier);
        if !record.specialties.is_empty() {
            println!("    {:<24} {}", "specialties", record.specialties.join(", "));
        }
        if !record.agencies.is_empty() {
            println!("    {:<24} {}", "agencies", record.agencies.join(", "));
        }
        if let Some(liaison) = &record.sb_liaison {
            println!("    {:<24} {}", "sb liaison", liaison);
        }
        if let Some(email) = &record.email {
            println!("    {:<24} {}", "email", email);
        }
        if let Some(phone) = &record.phone {
            println!("    {:<24} {}", "phone", phone);
        }
        if let Some(portal) = &record.supplier_portal {
            println!("    {:<24} {}", "supplier portal", portal);
        }
        if let Some(site) = &record.website {
            println!("    {:<24} {}", "website", site);
        }
        println!();
    }
}

fn dollars(amount: f64) -> String {
    let whole = amount.round() as i64;
    let mut digits = whole.abs().to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let rest = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            rest
        } else {
            format!("{rest},{grouped}")
        };
    }
    grouped = if grouped.is_empty() {
        digits
    } else {
        format!("{digits},{grouped}")
    };
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_groups_thousands() {
        assert_eq!(dollars(0.0), "$0");
        assert_eq!(dollars(999.0), "$999");
        assert_eq!(dollars(1_500_000.0), "$1,500,000");
        assert_eq!(dollars(12_345.6), "$12,346");
        assert_eq!(dollars(-2_500.0), "-$2,500");
    }
}
