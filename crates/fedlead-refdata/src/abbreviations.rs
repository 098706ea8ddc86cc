//! Abbreviation, office-code, and name-expansion tables for the normalizer.

/// Known office codes → canonical office names. Exact-code lookup wins over
/// every textual heuristic.
pub(crate) const OFFICE_CODES: &[(&str, &str)] = &[
    ("N68711", "NAVFAC Southwest"),
    ("N62470", "NAVFAC Atlantic"),
    ("N40085", "NAVFAC Mid-Atlantic"),
    ("N00024", "NAVSEA Headquarters"),
    ("N00019", "NAVAIR Headquarters"),
    ("N00039", "NAVWAR Headquarters"),
    ("W912DY", "USACE Engineering and Support Center, Huntsville"),
    ("W912HN", "USACE Savannah District"),
    ("W91ZLK", "ACC-APG"),
    ("FA8601", "AFLCMC Wright-Patterson AFB"),
    ("SPE300", "DLA Troop Support"),
    ("SPE7M0", "DLA Land and Maritime"),
    ("HT0011", "DHA Contracting Activity"),
    ("HC1028", "DISA Procurement Services Directorate"),
    ("M67854", "MARCORSYSCOM Contracts"),
];

/// Multi-word/structured abbreviations expanded before anything else.
/// Keys are matched whole or as a leading prefix; checked longest-first.
pub(crate) const PHRASE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("ACC-APG", "Army Contracting Command - Aberdeen Proving Ground"),
    ("ACC-RSA", "Army Contracting Command - Redstone Arsenal"),
    ("ACC-NJ", "Army Contracting Command - New Jersey"),
    ("ACC-ORL", "Army Contracting Command - Orlando"),
    ("NAVSUP FLC", "NAVSUP Fleet Logistics Center"),
    ("NSWC", "Naval Surface Warfare Center"),
    ("NUWC", "Naval Undersea Warfare Center"),
    ("NIWC", "Naval Information Warfare Center"),
    ("ERDC", "USACE Engineer Research and Development Center"),
];

/// Single-token acronyms, substituted as whole words.
pub(crate) const ACRONYMS: &[(&str, &str)] = &[
    ("BN", "Battalion"),
    ("BDE", "Brigade"),
    ("DET", "Detachment"),
    ("DIV", "Division"),
    ("CMD", "Command"),
    ("CTR", "Center"),
    ("CNTR", "Center"),
    ("HQ", "Headquarters"),
    ("HQS", "Headquarters"),
    ("OFC", "Office"),
    ("DEPT", "Department"),
    ("DIR", "Directorate"),
    ("REG", "Regional"),
    ("NATL", "National"),
    ("GRD", "Guard"),
    ("SPT", "Support"),
    ("SVCS", "Services"),
    ("LOG", "Logistics"),
    ("MAINT", "Maintenance"),
    ("ENGRG", "Engineering"),
    ("FT", "Fort"),
    ("MT", "Mount"),
];

/// Acronyms that must stay uppercase through title-casing.
pub(crate) const PRESERVE_UPPER: &[&str] = &[
    "NAVFAC", "NAVSEA", "NAVAIR", "NAVWAR", "NAVSUP", "USACE", "ACC", "MICC",
    "AFMC", "AFLCMC", "DLA", "DISA", "DHA", "MARCORSYSCOM", "SPAWAR", "NSWC",
    "NUWC", "NIWC", "FLC", "ERDC", "USPFO", "ARNG", "DOD", "US", "USA",
    "USAF", "USMC", "USN", "AFB", "JB", "IT", "II", "III", "IV",
];

/// Unit designators for the numeric-unit rewrite (`802 CONS` → `802nd
/// Contracting Squadron`).
pub(crate) const UNIT_DESIGNATORS: &[(&str, &str)] = &[
    ("CONS", "Contracting Squadron"),
    ("CONF", "Contracting Flight"),
    ("CES", "Civil Engineer Squadron"),
    ("LRS", "Logistics Readiness Squadron"),
    ("MDG", "Medical Group"),
    ("MSG", "Mission Support Group"),
    ("FW", "Fighter Wing"),
    ("AW", "Airlift Wing"),
    ("ABW", "Air Base Wing"),
    ("AMW", "Air Mobility Wing"),
];

/// USPS state codes → full names, for the USPFO/National Guard rewrites.
pub(crate) const STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
    ("DC", "District of Columbia"),
    ("PR", "Puerto Rico"),
    ("GU", "Guam"),
];
