//! Canonical command and agency metadata.
//!
//! Three populations: DoD contracting commands (matched by abbreviation,
//! sub-agency name, or office-name token), civilian agencies (matched from
//! the parent-agency string), and service-branch fallbacks (matched when
//! nothing more specific fits).

use fedlead_core::{CommandInfo, SmallBusinessContact};

fn sb(office: &str, director: Option<&str>, phone: &str, email: &str) -> SmallBusinessContact {
    SmallBusinessContact {
        office: office.to_string(),
        director: director.map(str::to_string),
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
        address: None,
    }
}

fn cmd(
    name: &str,
    abbreviation: &str,
    parent_agency: &str,
    website: &str,
    contact: SmallBusinessContact,
    capabilities: &[&str],
) -> CommandInfo {
    CommandInfo {
        name: name.to_string(),
        abbreviation: abbreviation.to_string(),
        parent_agency: parent_agency.to_string(),
        website: Some(website.to_string()),
        forecast_url: Some(format!("{website}/business-opportunities")),
        sam_forecast_url: Some(format!(
            "https://sam.gov/search/?index=opp&keywords={}",
            abbreviation.to_lowercase()
        )),
        contact,
        capabilities: capabilities.iter().map(|s| s.to_string()).collect(),
    }
}

pub(crate) fn dod_commands() -> Vec<CommandInfo> {
    vec![
        cmd(
            "Naval Facilities Engineering Systems Command",
            "NAVFAC",
            "Department of the Navy",
            "https://www.navfac.navy.mil",
            sb(
                "NAVFAC Office of Small Business Programs",
                Some("Jackie Michel"),
                "202-685-9140",
                "navfac.osbp@navy.mil",
            ),
            &["facilities engineering", "base operations support", "construction", "utilities"],
        ),
        cmd(
            "Naval Sea Systems Command",
            "NAVSEA",
            "Department of the Navy",
            "https://www.navsea.navy.mil",
            sb(
                "NAVSEA Office of Small Business Programs",
                Some("Kimberly Rayfield"),
                "202-781-4123",
                "navsea.osbp@navy.mil",
            ),
            &["shipbuilding", "combat systems", "ship maintenance", "undersea systems"],
        ),
        cmd(
            "Naval Air Systems Command",
            "NAVAIR",
            "Department of the Navy",
            "https://www.navair.navy.mil",
            sb(
                "NAVAIR Office of Small Business Programs",
                None,
                "301-757-9044",
                "navair.osbp@navy.mil",
            ),
            &["aircraft systems", "avionics", "flight test", "sustainment engineering"],
        ),
        cmd(
            "Naval Information Warfare Systems Command",
            "NAVWAR",
            "Department of the Navy",
            "https://www.navwar.navy.mil",
            sb(
                "NAVWAR Office of Small Business Programs",
                None,
                "619-524-7068",
                "navwar.osbp@navy.mil",
            ),
            &["C4ISR", "cybersecurity", "networks", "space systems"],
        ),
        cmd(
            "Naval Supply Systems Command",
            "NAVSUP",
            "Department of the Navy",
            "https://www.navsup.navy.mil",
            sb(
                "NAVSUP Office of Small Business Programs",
                None,
                "717-605-3037",
                "navsup.osbp@navy.mil",
            ),
            &["supply chain", "logistics", "fleet support", "fuel"],
        ),
        cmd(
            "U.S. Army Corps of Engineers",
            "USACE",
            "Department of the Army",
            "https://www.usace.army.mil",
            sb(
                "USACE Office of Small Business Programs",
                Some("Stacey Hirata"),
                "202-761-8789",
                "usace.smallbusiness@usace.army.mil",
            ),
            &["civil works", "military construction", "environmental remediation", "dredging"],
        ),
        cmd(
            "Army Contracting Command",
            "ACC",
            "Department of the Army",
            "https://acc.army.mil",
            sb(
                "ACC Office of Small Business Programs",
                None,
                "256-955-7087",
                "acc.smallbusiness@army.mil",
            ),
            &["installation contracting", "weapons systems", "soldier equipment", "research support"],
        ),
        cmd(
            "Mission and Installation Contracting Command",
            "MICC",
            "Department of the Army",
            "https://micc.army.mil",
            sb(
                "MICC Office of Small Business Programs",
                None,
                "210-466-2056",
                "micc.smallbusiness@army.mil",
            ),
            &["base support services", "training support", "food service", "grounds maintenance"],
        ),
        cmd(
            "Air Force Materiel Command",
            "AFMC",
            "Department of the Air Force",
            "https://www.afmc.af.mil",
            sb(
                "AFMC Small Business Office",
                None,
                "937-257-2427",
                "afmc.sb@us.af.mil",
            ),
            &["weapons sustainment", "depot maintenance", "test and evaluation", "research"],
        ),
        cmd(
            "Air Force Life Cycle Management Center",
            "AFLCMC",
            "Department of the Air Force",
            "https://www.aflcmc.af.mil",
            sb(
                "AFLCMC Small Business Office",
                None,
                "937-255-0898",
                "aflcmc.sb@us.af.mil",
            ),
            &["aircraft acquisition", "digital engineering", "armament", "mission planning"],
        ),
        cmd(
            "Defense Logistics Agency",
            "DLA",
            "Department of Defense",
            "https://www.dla.mil",
            sb(
                "DLA Office of Small Business Programs",
                Some("Dwight Deneal"),
                "703-767-9465",
                "dlasmallbusinessoffice@dla.mil",
            ),
            &["troop support", "energy", "aviation parts", "land and maritime parts"],
        ),
        cmd(
            "Defense Information Systems Agency",
            "DISA",
            "Department of Defense",
            "https://www.disa.mil",
            sb(
                "DISA Office of Small Business Programs",
                None,
                "301-225-7933",
                "disa.osbp@mail.mil",
            ),
            &["enterprise IT", "networks", "cloud", "command and control"],
        ),
        cmd(
            "Defense Health Agency",
            "DHA",
            "Department of Defense",
            "https://www.health.mil",
            sb(
                "DHA Small Business Programs Office",
                None,
                "703-275-6277",
                "dha.sbo@health.mil",
            ),
            &["medical services", "health IT", "medical logistics", "clinical support"],
        ),
        cmd(
            "Marine Corps Systems Command",
            "MARCORSYSCOM",
            "Department of the Navy",
            "https://www.marcorsyscom.marines.mil",
            sb(
                "MCSC Office of Small Business Programs",
                None,
                "703-432-3946",
                "mcsc.sbp@usmc.mil",
            ),
            &["ground weapon systems", "communications", "logistics systems", "infantry equipment"],
        ),
    ]
}

pub(crate) fn civilian_agencies() -> Vec<CommandInfo> {
    vec![
        cmd(
            "Department of Commerce",
            "DOC",
            "Department of Commerce",
            "https://www.commerce.gov",
            sb(
                "DOC Office of Small and Disadvantaged Business Utilization",
                Some("Jeremy Hilton"),
                "202-482-1472",
                "osdbu@doc.gov",
            ),
            &["scientific services", "IT modernization", "weather systems", "census support"],
        ),
        cmd(
            "Department of Energy",
            "DOE",
            "Department of Energy",
            "https://www.energy.gov",
            sb(
                "DOE Office of Small and Disadvantaged Business Utilization",
                None,
                "202-586-7377",
                "smallbusiness@hq.doe.gov",
            ),
            &["national laboratory support", "environmental management", "grid modernization"],
        ),
        cmd(
            "Department of Health and Human Services",
            "HHS",
            "Department of Health and Human Services",
            "https://www.hhs.gov",
            sb(
                "HHS Office of Small and Disadvantaged Business Utilization",
                None,
                "202-690-7300",
                "osdbu@hhs.gov",
            ),
            &["public health services", "biomedical research support", "health IT"],
        ),
        cmd(
            "Department of Homeland Security",
            "DHS",
            "Department of Homeland Security",
            "https://www.dhs.gov",
            sb(
                "DHS Office of Small and Disadvantaged Business Utilization",
                Some("Darlene Bullock"),
                "202-447-5555",
                "osdbu@hq.dhs.gov",
            ),
            &["border security technology", "screening", "emergency management", "cybersecurity"],
        ),
        cmd(
            "Department of Veterans Affairs",
            "VA",
            "Department of Veterans Affairs",
            "https://www.va.gov",
            sb(
                "VA Office of Small and Disadvantaged Business Utilization",
                None,
                "202-461-4300",
                "osdbu@va.gov",
            ),
            &["medical facilities", "health services", "benefits IT", "construction"],
        ),
        cmd(
            "General Services Administration",
            "GSA",
            "General Services Administration",
            "https://www.gsa.gov",
            sb(
                "GSA Office of Small and Disadvantaged Business Utilization",
                Some("Exodie Roe III"),
                "855-672-8472",
                "smallbusiness@gsa.gov",
            ),
            &["federal real estate", "acquisition vehicles", "fleet", "technology services"],
        ),
        cmd(
            "National Aeronautics and Space Administration",
            "NASA",
            "National Aeronautics and Space Administration",
            "https://www.nasa.gov",
            sb(
                "NASA Office of Small Business Programs",
                Some("Dwight Deneal"),
                "202-358-2088",
                "smallbusiness@nasa.gov",
            ),
            &["space systems", "mission operations", "research and development", "engineering services"],
        ),
        cmd(
            "Department of Transportation",
            "DOT",
            "Department of Transportation",
            "https://www.transportation.gov",
            sb(
                "DOT Office of Small and Disadvantaged Business Utilization",
                None,
                "202-366-1930",
                "osdbu@dot.gov",
            ),
            &["highway programs", "aviation systems", "transit", "safety analysis"],
        ),
        cmd(
            "Department of the Interior",
            "DOI",
            "Department of the Interior",
            "https://www.doi.gov",
            sb(
                "DOI Office of Small and Disadvantaged Business Utilization",
                None,
                "202-208-3493",
                "osdbu@ios.doi.gov",
            ),
            &["land management", "wildland fire support", "park operations", "surveying"],
        ),
        cmd(
            "Department of Agriculture",
            "USDA",
            "Department of Agriculture",
            "https://www.usda.gov",
            sb(
                "USDA Office of Small and Disadvantaged Business Utilization",
                None,
                "202-720-7117",
                "sbcoordinators@usda.gov",
            ),
            &["forestry services", "rural development", "food safety", "research support"],
        ),
        cmd(
            "Department of Justice",
            "DOJ",
            "Department of Justice",
            "https://www.justice.gov",
            sb(
                "DOJ Office of Small and Disadvantaged Business Utilization",
                None,
                "202-616-0521",
                "osdbu@usdoj.gov",
            ),
            &["litigation support", "detention services", "forensics", "investigative IT"],
        ),
        cmd(
            "Environmental Protection Agency",
            "EPA",
            "Environmental Protection Agency",
            "https://www.epa.gov",
            sb(
                "EPA Office of Small and Disadvantaged Business Utilization",
                None,
                "202-566-2075",
                "osdbu@epa.gov",
            ),
            &["environmental remediation", "laboratory services", "water programs", "enforcement support"],
        ),
    ]
}

/// Branch-level fallbacks, matched on tokens anywhere in the office,
/// sub-agency, or parent-agency strings. Ordered most-specific first so
/// "Department of the Navy" hits Navy before the DoD-wide entry.
pub(crate) fn service_branches() -> Vec<(Vec<&'static str>, CommandInfo)> {
    let branch = |name: &str, abbr: &str, contact: SmallBusinessContact| CommandInfo {
        name: name.to_string(),
        abbreviation: abbr.to_string(),
        parent_agency: "Department of Defense".to_string(),
        website: None,
        forecast_url: None,
        sam_forecast_url: Some(
            "https://sam.gov/search/?index=opp&is_active=true".to_string(),
        ),
        contact,
        capabilities: Vec::new(),
    };

    vec![
        (
            vec!["ARMY"],
            branch(
                "Army Office of Small Business Programs",
                "ARMY-OSBP",
                sb(
                    "Army Office of Small Business Programs",
                    None,
                    "703-697-2868",
                    "army.osbp@army.mil",
                ),
            ),
        ),
        (
            vec!["NAVY", "MARINE"],
            branch(
                "Navy Office of Small Business Programs",
                "NAVY-OSBP",
                sb(
                    "Department of the Navy Office of Small Business Programs",
                    None,
                    "202-685-6485",
                    "smallbusiness@navy.mil",
                ),
            ),
        ),
        (
            vec!["AIR FORCE", "SPACE FORCE"],
            branch(
                "Air Force Small Business Programs",
                "AF-SBP",
                sb(
                    "Air Force Office of Small Business Programs",
                    None,
                    "571-256-8052",
                    "usaf.smallbiz@us.af.mil",
                ),
            ),
        ),
        (
            vec!["DEFENSE", "DOD"],
            branch(
                "DoD Office of Small Business Programs",
                "DOD-OSBP",
                sb(
                    "DoD Office of Small Business Programs",
                    None,
                    "571-372-6191",
                    "osd.small-business@mail.mil",
                ),
            ),
        ),
    ]
}

/// Sub-agency display names (lowercase) → command abbreviation, for the
/// exact-match tier. Covers both current and legacy official names.
pub(crate) const SUB_AGENCY_COMMANDS: &[(&str, &str)] = &[
    ("naval facilities engineering systems command", "NAVFAC"),
    ("naval facilities engineering command", "NAVFAC"),
    ("naval sea systems command", "NAVSEA"),
    ("naval air systems command", "NAVAIR"),
    ("naval information warfare systems command", "NAVWAR"),
    ("space and naval warfare systems command", "NAVWAR"),
    ("naval supply systems command", "NAVSUP"),
    ("u.s. army corps of engineers", "USACE"),
    ("army corps of engineers", "USACE"),
    ("army contracting command", "ACC"),
    ("mission and installation contracting command", "MICC"),
    ("air force materiel command", "AFMC"),
    ("air force life cycle management center", "AFLCMC"),
    ("defense logistics agency", "DLA"),
    ("defense information systems agency", "DISA"),
    ("defense health agency", "DHA"),
    ("marine corps systems command", "MARCORSYSCOM"),
];

/// Tokens that identify a command when embedded in an office name.
/// Checked in order; longer/more specific tokens come first.
pub(crate) const COMMAND_KEYWORDS: &[(&str, &str)] = &[
    ("MARCORSYSCOM", "MARCORSYSCOM"),
    ("CORPS OF ENGINEERS", "USACE"),
    ("NAVFAC", "NAVFAC"),
    ("NAVSEA", "NAVSEA"),
    ("NAVAIR", "NAVAIR"),
    ("NAVWAR", "NAVWAR"),
    ("SPAWAR", "NAVWAR"),
    ("NAVSUP", "NAVSUP"),
    ("FLC ", "NAVSUP"),
    ("USACE", "USACE"),
    ("AFLCMC", "AFLCMC"),
    ("AFMC", "AFMC"),
    ("MICC", "MICC"),
    ("ACC-", "ACC"),
    ("ACC ", "ACC"),
    ("DLA", "DLA"),
    ("DISA", "DISA"),
    ("DHA", "DHA"),
];
