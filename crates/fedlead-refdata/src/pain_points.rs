//! Pain-point corpus: recurring acquisition problems per command/agency,
//! keyed by command or agency abbreviation.

pub(crate) const PAIN_POINTS: &[(&str, &[&str])] = &[
    (
        "NAVFAC",
        &[
            "Aging shore infrastructure with a growing maintenance backlog",
            "Utility system resilience at coastal installations",
            "Demand for design-build capacity on MILCON projects",
            "Environmental compliance at legacy industrial sites",
        ],
    ),
    (
        "NAVSEA",
        &[
            "Shipyard capacity shortfalls delaying submarine availabilities",
            "Obsolete parts sourcing for legacy hull, mechanical and electrical systems",
            "Workforce gaps in naval nuclear and welding trades",
            "Cybersecurity hardening of shipboard control systems",
        ],
    ),
    (
        "NAVAIR",
        &[
            "Sustainment cost growth across aging aircraft fleets",
            "Diminishing manufacturing sources for avionics components",
            "Test range modernization and instrumentation upgrades",
            "Software certification backlog for mission systems",
        ],
    ),
    (
        "NAVWAR",
        &[
            "Legacy network consolidation and cloud migration",
            "Zero-trust architecture rollout across afloat networks",
            "Spectrum management tooling modernization",
            "Rapid fielding of C4ISR capabilities to the fleet",
        ],
    ),
    (
        "NAVSUP",
        &[
            "Supply chain visibility across fleet logistics centers",
            "Fuel distribution infrastructure recapitalization",
            "Warehouse automation and inventory accuracy",
            "Hazardous material tracking and disposal",
        ],
    ),
    (
        "USACE",
        &[
            "Aging locks, dams and levee infrastructure",
            "Environmental remediation at formerly used defense sites",
            "Disaster response surge contracting capacity",
            "Dredging backlog in federal navigation channels",
        ],
    ),
    (
        "ACC",
        &[
            "Contract closeout backlog across installation contracts",
            "Obsolescence in soldier equipment and ground systems",
            "Shortage of qualified contracting officer representatives",
            "Small business participation in weapons system subcontracts",
        ],
    ),
    (
        "MICC",
        &[
            "Base operations support cost growth",
            "Training range maintenance and modernization",
            "Food service and dining facility labor shortages",
            "Installation energy resilience projects",
        ],
    ),
    (
        "AFMC",
        &[
            "Depot maintenance throughput for aging airframes",
            "Diminishing manufacturing sources for sustainment parts",
            "Test infrastructure recapitalization",
            "Digital engineering adoption across program offices",
        ],
    ),
    (
        "AFLCMC",
        &[
            "Software factory scaling for weapon system programs",
            "Legacy avionics modernization across fielded fleets",
            "Agile contracting for rapid capability insertion",
            "Data rights and technical data package gaps",
        ],
    ),
    (
        "DLA",
        &[
            "Counterfeit part detection in the supply chain",
            "Long lead times on aviation and maritime spares",
            "Demand forecasting accuracy for consumables",
            "Supplier base erosion for low-volume items",
        ],
    ),
    (
        "DISA",
        &[
            "Network modernization under the DODIN umbrella",
            "Cloud service provisioning at impact levels 5 and 6",
            "Endpoint security across a global user base",
            "Legacy application rationalization",
        ],
    ),
    (
        "DHA",
        &[
            "Electronic health record rollout support",
            "Medical logistics standardization across treatment facilities",
            "Clinical staffing shortages at remote installations",
            "Telehealth infrastructure expansion",
        ],
    ),
    (
        "MARCORSYSCOM",
        &[
            "Expeditionary equipment weight and power reduction",
            "Ground vehicle corrosion control",
            "Tactical communications interoperability",
            "Rapid prototyping of counter-UAS capabilities",
        ],
    ),
    (
        "DOC",
        &[
            "Weather satellite ground system modernization",
            "Census field operations technology refresh",
            "Patent examination workflow automation",
            "Fisheries survey vessel maintenance",
        ],
    ),
    (
        "DOE",
        &[
            "National laboratory facility deferred maintenance",
            "Legacy nuclear waste cleanup milestones",
            "Grid security and resilience research support",
            "High-performance computing facility operations",
        ],
    ),
    (
        "HHS",
        &[
            "Public health data system interoperability",
            "Strategic national stockpile logistics",
            "Grants management system modernization",
            "Biomedical research facility operations",
        ],
    ),
    (
        "DHS",
        &[
            "Border surveillance technology integration",
            "Screening equipment maintenance at ports of entry",
            "Legacy case management system replacement",
            "Surge staffing for disaster response",
        ],
    ),
    (
        "VA",
        &[
            "Medical center construction cost and schedule overruns",
            "Health record system deployment support",
            "Claims processing automation",
            "Aging medical equipment replacement",
        ],
    ),
    (
        "GSA",
        &[
            "Federal building deferred maintenance backlog",
            "Workplace modernization for reduced footprints",
            "Fleet electrification infrastructure",
            "Acquisition system consolidation",
        ],
    ),
    (
        "NASA",
        &[
            "Aging center infrastructure and test stands",
            "Institutional IT modernization",
            "Mission operations staffing continuity",
            "Environmental compliance at propulsion test sites",
        ],
    ),
    (
        "DOT",
        &[
            "Air traffic control facility sustainment",
            "Highway safety data analysis capacity",
            "Transit grant oversight support",
            "NOTAM and aviation data system modernization",
        ],
    ),
    (
        "DOI",
        &[
            "Wildland fire aviation support contracts",
            "National park deferred maintenance",
            "Water infrastructure in reclamation projects",
            "Survey and mapping technology refresh",
        ],
    ),
    (
        "USDA",
        &[
            "Forest service road and bridge maintenance",
            "Rural broadband program support",
            "Laboratory modernization for food safety",
            "Wildfire fuel reduction treatments",
        ],
    ),
    (
        "DOJ",
        &[
            "Detention facility medical services",
            "Digital evidence storage and processing",
            "Legacy case management modernization",
            "Language services for immigration courts",
        ],
    ),
    (
        "EPA",
        &[
            "Superfund site remediation throughput",
            "Laboratory network consolidation",
            "Water infrastructure loan program support",
            "Environmental data system modernization",
        ],
    ),
];

/// Pain-point keyword → contractor specialty, for the suggestion path that
/// maps an agency's problems onto roster capabilities.
pub(crate) const SPECIALTY_KEYWORDS: &[(&str, &str)] = &[
    ("cyber", "cybersecurity"),
    ("network", "IT infrastructure"),
    ("cloud", "cloud migration"),
    ("software", "software development"),
    ("data", "data analytics"),
    ("infrastructure", "construction"),
    ("maintenance", "maintenance and sustainment"),
    ("construction", "construction"),
    ("environmental", "environmental remediation"),
    ("remediation", "environmental remediation"),
    ("supply", "logistics"),
    ("logistics", "logistics"),
    ("medical", "healthcare services"),
    ("health", "healthcare services"),
    ("staffing", "professional staffing"),
    ("training", "training services"),
    ("energy", "energy services"),
    ("modernization", "IT modernization"),
];
