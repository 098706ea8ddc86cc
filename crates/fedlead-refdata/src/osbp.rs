//! OSBP directory for the resolver's final fallback tier.
//!
//! Keys are lowercase substrings matched against the normalized parent
//! agency. Covers agencies that have no full command record; the
//! placeholder routes everything else to the central small-business
//! authority so the contact field is never empty.

use fedlead_core::SmallBusinessContact;

fn contact(office: &str, phone: &str, email: &str) -> SmallBusinessContact {
    SmallBusinessContact {
        office: office.to_string(),
        director: None,
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
        address: None,
    }
}

pub(crate) fn osbp_directory() -> Vec<(&'static str, SmallBusinessContact)> {
    vec![
        (
            "treasury",
            contact(
                "Treasury Office of Small and Disadvantaged Business Utilization",
                "202-622-0530",
                "osdbu@treasury.gov",
            ),
        ),
        (
            "state",
            contact(
                "Department of State Office of Small and Disadvantaged Business Utilization",
                "703-875-6822",
                "smallbusiness@state.gov",
            ),
        ),
        (
            "labor",
            contact(
                "Department of Labor Office of Small and Disadvantaged Business Utilization",
                "202-693-7299",
                "osdbu@dol.gov",
            ),
        ),
        (
            "education",
            contact(
                "Department of Education Office of Small and Disadvantaged Business Utilization",
                "202-245-6300",
                "small.business@ed.gov",
            ),
        ),
        (
            "housing",
            contact(
                "HUD Office of Small and Disadvantaged Business Utilization",
                "202-402-5477",
                "osdbu@hud.gov",
            ),
        ),
        (
            "social security",
            contact(
                "SSA Office of Small and Disadvantaged Business Utilization",
                "410-965-9457",
                "small.business@ssa.gov",
            ),
        ),
        (
            "personnel management",
            contact(
                "OPM Contracting and Small Business Office",
                "202-606-1800",
                "smallbusiness@opm.gov",
            ),
        ),
        (
            "nuclear regulatory",
            contact(
                "NRC Small Business and Civil Rights Office",
                "301-415-7380",
                "smallbusiness@nrc.gov",
            ),
        ),
        (
            "national science",
            contact(
                "NSF Small Business Office",
                "703-292-8030",
                "smallbusiness@nsf.gov",
            ),
        ),
        (
            "smithsonian",
            contact(
                "Smithsonian Supplier Diversity Program",
                "202-633-7290",
                "suppliers@si.edu",
            ),
        ),
    ]
}

/// Central small-business authority contact, used when no directory entry
/// matches any substring of the parent agency.
pub(crate) fn placeholder_contact() -> SmallBusinessContact {
    contact(
        "SBA Office of Government Contracting",
        "800-827-5722",
        "answerdesk@sba.gov",
    )
}
