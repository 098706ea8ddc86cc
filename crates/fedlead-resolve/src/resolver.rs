//! Hierarchical agency enrichment.
//!
//! Resolution walks a fixed priority chain over the reference store; the
//! first tier that produces a match wins and its tag is recorded in
//! `EnrichmentResult::source` for auditing. Absence of data never errors —
//! the final tier synthesizes a contact from the OSBP directory, so every
//! agency gets *some* small-business contact.

use fedlead_core::{CommandInfo, EnrichmentResult, SmallBusinessContact};
use fedlead_refdata::ReferenceStore;
use tracing::debug;

/// Inputs to one resolution, shared by every tier.
struct ResolveContext<'a> {
    store: &'a ReferenceStore,
    office_name: &'a str,
    sub_agency: &'a str,
    parent_agency: &'a str,
    detected_command: Option<&'a str>,
}

type Tier = for<'a> fn(&ResolveContext<'a>) -> Option<EnrichmentResult>;

/// Ordered fallback chain; first `Some` wins. Adding a tier is one line.
const TIERS: &[(&str, Tier)] = &[
    ("explicit_command", tier_explicit_command),
    ("office_token", tier_office_token),
    ("sub_agency_map", tier_sub_agency_map),
    ("service_branch", tier_service_branch),
    ("civilian_agency", tier_civilian_agency),
    ("osbp_directory", tier_osbp_directory),
];

/// Resolve enrichment for an office.
///
/// Inputs are expected to be normalized already (the aggregator runs names
/// through the [`Normalizer`](crate::Normalizer) before resolving).
pub fn resolve_enrichment(
    store: &ReferenceStore,
    office_name: &str,
    sub_agency: &str,
    parent_agency: &str,
    detected_command: Option<&str>,
) -> EnrichmentResult {
    let ctx = ResolveContext {
        store,
        office_name,
        sub_agency,
        parent_agency,
        detected_command,
    };

    for (tag, tier) in TIERS {
        if let Some(result) = tier(&ctx) {
            debug!(office = office_name, source = tag, "enrichment resolved");
            return result;
        }
    }

    // Unreachable in practice: the OSBP tier always produces a contact.
    placeholder_result(store, parent_agency)
}

/// Pain-point lookup chain: explicit command → command detected from the
/// office name → sub-agency → parent agency. Returns the points and the
/// tier tag that produced them; `("", [])` when nothing matched.
pub fn pain_points_for_command(
    store: &ReferenceStore,
    command: Option<&str>,
    office_name: &str,
    sub_agency: &str,
    parent_agency: &str,
) -> (Vec<String>, String) {
    if let Some(cmd) = command {
        if let Some(points) = store.pain_points_for(cmd) {
            return (points.to_vec(), "explicit_command".to_string());
        }
    }
    if let Some(info) = store.detect_command_token(office_name) {
        if let Some(points) = store.pain_points_for(&info.abbreviation) {
            return (points.to_vec(), "office_token".to_string());
        }
    }
    if let Some(points) = store.pain_points_for(sub_agency) {
        return (points.to_vec(), "sub_agency".to_string());
    }
    if let Some(points) = store.pain_points_for(parent_agency) {
        return (points.to_vec(), "parent_agency".to_string());
    }
    (Vec::new(), String::new())
}

// ── Tiers ──

fn tier_explicit_command(ctx: &ResolveContext<'_>) -> Option<EnrichmentResult> {
    let info = ctx.store.command(ctx.detected_command?)?;
    Some(command_result(ctx.store, info, "explicit_command"))
}

fn tier_office_token(ctx: &ResolveContext<'_>) -> Option<EnrichmentResult> {
    let info = ctx.store.detect_command_token(ctx.office_name)?;
    Some(command_result(ctx.store, info, "office_token"))
}

fn tier_sub_agency_map(ctx: &ResolveContext<'_>) -> Option<EnrichmentResult> {
    let info = ctx
        .store
        .command_for_sub_agency(ctx.sub_agency)
        .or_else(|| ctx.store.command_for_sub_agency(ctx.office_name))?;
    Some(command_result(ctx.store, info, "sub_agency_map"))
}

fn tier_service_branch(ctx: &ResolveContext<'_>) -> Option<EnrichmentResult> {
    let info = ctx
        .store
        .service_branch(&[ctx.office_name, ctx.sub_agency, ctx.parent_agency])?;
    Some(EnrichmentResult {
        command: None,
        pain_points: Vec::new(),
        source: "service_branch".to_string(),
        contact: info.contact.clone(),
        forecast_url: info.forecast_url.clone(),
        sam_forecast_url: info.sam_forecast_url.clone(),
        website: info.website.clone(),
        budget_trend: ctx.store.budget_trend(ctx.parent_agency),
    })
}

fn tier_civilian_agency(ctx: &ResolveContext<'_>) -> Option<EnrichmentResult> {
    let info = ctx.store.civilian_for_parent(ctx.parent_agency)?;
    Some(command_result(ctx.store, info, "civilian_agency"))
}

fn tier_osbp_directory(ctx: &ResolveContext<'_>) -> Option<EnrichmentResult> {
    let contact = ctx.store.osbp_contact(ctx.parent_agency)?.clone();
    Some(synthetic_result(ctx.store, ctx.parent_agency, contact, "osbp_directory"))
}

// ── Assembly ──

/// Build the full enrichment for a matched command or civilian agency.
fn command_result(store: &ReferenceStore, info: &CommandInfo, source: &str) -> EnrichmentResult {
    let pain_points = store
        .pain_points_for(&info.abbreviation)
        .map(<[String]>::to_vec)
        .unwrap_or_default();
    EnrichmentResult {
        command: Some(info.name.clone()),
        pain_points,
        source: source.to_string(),
        contact: info.contact.clone(),
        forecast_url: info.forecast_url.clone(),
        sam_forecast_url: info.sam_forecast_url.clone(),
        website: info.website.clone(),
        budget_trend: store.budget_trend(&info.parent_agency),
    }
}

fn synthetic_result(
    store: &ReferenceStore,
    parent_agency: &str,
    contact: SmallBusinessContact,
    source: &str,
) -> EnrichmentResult {
    EnrichmentResult {
        command: None,
        pain_points: Vec::new(),
        source: source.to_string(),
        contact,
        forecast_url: None,
        sam_forecast_url: Some(
            "https://sam.gov/search/?index=opp&is_active=true".to_string(),
        ),
        website: None,
        budget_trend: store.budget_trend(parent_agency),
    }
}

fn placeholder_result(store: &ReferenceStore, parent_agency: &str) -> EnrichmentResult {
    synthetic_result(
        store,
        parent_agency,
        store.osbp_placeholder().clone(),
        "osbp_placeholder",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_command_wins() {
        let store = ReferenceStore::new();
        let r = resolve_enrichment(&store, "Some Office", "", "", Some("NAVSEA"));
        assert_eq!(r.source, "explicit_command");
        assert_eq!(r.command.as_deref(), Some("Naval Sea Systems Command"));
        assert!(!r.pain_points.is_empty());
    }

    #[test]
    fn office_token_detected() {
        let store = ReferenceStore::new();
        let r = resolve_enrichment(&store, "NAVFAC Southwest", "", "Department of the Navy", None);
        assert_eq!(r.source, "office_token");
        assert_eq!(
            r.command.as_deref(),
            Some("Naval Facilities Engineering Systems Command")
        );
        assert!(r.contact.email.is_some());
    }

    #[test]
    fn sub_agency_exact_match_tier() {
        let store = ReferenceStore::new();
        let r = resolve_enrichment(
            &store,
            "Contracting Office Alpha",
            "Defense Logistics Agency",
            "Department of Defense",
            None,
        );
        assert_eq!(r.source, "sub_agency_map");
        assert_eq!(r.command.as_deref(), Some("Defense Logistics Agency"));
    }

    #[test]
    fn service_branch_fallback() {
        let store = ReferenceStore::new();
        let r = resolve_enrichment(
            &store,
            "Regional Contracting Office",
            "Department of the Army",
            "Department of Defense",
            None,
        );
        assert_eq!(r.source, "service_branch");
        assert!(r.command.is_none());
        assert!(r.contact.office.contains("Army"));
        assert!(r.sam_forecast_url.is_some());
    }

    #[test]
    fn civilian_agency_by_parent() {
        let store = ReferenceStore::new();
        let r = resolve_enrichment(&store, "Random Obscure Office", "", "Department of Commerce", None);
        assert_eq!(r.source, "civilian_agency");
        assert_eq!(r.command.as_deref(), Some("Department of Commerce"));
        // Known agency contact, not the generic placeholder.
        assert!(r.contact.office.contains("DOC"));
        assert!(!r.pain_points.is_empty());
    }

    #[test]
    fn osbp_directory_synthesis() {
        let store = ReferenceStore::new();
        let r = resolve_enrichment(&store, "Bureau Office", "", "Department of the Treasury", None);
        assert_eq!(r.source, "osbp_directory");
        assert!(r.command.is_none());
        assert!(r.contact.office.contains("Treasury"));
    }

    #[test]
    fn contact_never_empty_for_any_parent() {
        let store = ReferenceStore::new();
        for parent in [
            "Department of Commerce",
            "Department of the Treasury",
            "Architectural and Transportation Barriers Compliance Board",
            "",
        ] {
            let r = resolve_enrichment(&store, "Office", "", parent, None);
            assert!(!r.contact.office.is_empty(), "empty contact for {parent:?}");
        }
    }

    #[test]
    fn unknown_everything_gets_placeholder() {
        let store = ReferenceStore::new();
        let r = resolve_enrichment(&store, "Widget Office", "", "Independent Widget Commission", None);
        assert_eq!(r.source, "osbp_placeholder");
        assert!(r.contact.office.contains("SBA"));
    }

    #[test]
    fn budget_trend_attached_when_known() {
        let store = ReferenceStore::new();
        let r = resolve_enrichment(&store, "NAVSEA Headquarters", "", "Department of the Navy", None);
        assert!(r.budget_trend.is_some());
    }

    #[test]
    fn pain_point_chain_tiers() {
        let store = ReferenceStore::new();

        let (points, source) =
            pain_points_for_command(&store, Some("USACE"), "", "", "");
        assert!(!points.is_empty());
        assert_eq!(source, "explicit_command");

        let (points, source) =
            pain_points_for_command(&store, None, "USACE Savannah District", "", "");
        assert!(!points.is_empty());
        assert_eq!(source, "office_token");

        let (points, source) = pain_points_for_command(
            &store,
            None,
            "Office",
            "Defense Information Systems Agency",
            "",
        );
        assert!(!points.is_empty());
        assert_eq!(source, "sub_agency");

        let (points, source) =
            pain_points_for_command(&store, None, "Office", "", "Department of Commerce");
        assert!(!points.is_empty());
        assert_eq!(source, "parent_agency");

        let (points, source) = pain_points_for_command(&store, None, "Office", "", "Nowhere");
        assert!(points.is_empty());
        assert!(source.is_empty());
    }

    #[test]
    fn source_nonempty_whenever_pain_points_found() {
        let store = ReferenceStore::new();
        let r = resolve_enrichment(&store, "DLA Troop Support", "", "Department of Defense", None);
        if !r.pain_points.is_empty() {
            assert!(!r.source.is_empty());
        }
    }
}
