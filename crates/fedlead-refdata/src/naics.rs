//! PSC → NAICS bridge table.
//!
//! Product Service Codes map through their 2-character prefix (or, failing
//! that, their first character) to a small set of representative NAICS
//! codes. Coverage is intentionally partial; unmapped PSCs fall back to the
//! full roster ranked by contact completeness.

/// Two-character PSC prefixes → representative NAICS codes.
pub(crate) const PSC_PREFIX_NAICS: &[(&str, &[&str])] = &[
    ("70", &["541512", "541519"]),  // IT equipment and software
    ("D3", &["541512", "518210"]),  // IT and telecom services
    ("R4", &["541611", "541690"]),  // professional support services
    ("R7", &["541612", "561320"]),  // management/staffing support
    ("66", &["334516", "334519"]),  // instruments and lab equipment
    ("Y1", &["236220"]),            // construction of buildings
    ("Z1", &["236220", "238220"]),  // maintenance of real property
    ("Z2", &["237990"]),            // repair/alteration of structures
    ("S2", &["561210", "561720"]),  // housekeeping/facility services
    ("F5", &["562910"]),            // environmental remediation
    ("Q5", &["621111", "621399"]),  // medical services
    ("U0", &["611430"]),            // training services
    ("J0", &["811310"]),            // equipment maintenance
    ("V1", &["484110", "488510"]),  // transportation services
    ("W1", &["532490"]),            // equipment lease
];

/// Single-character fallbacks for PSC families without a 2-char entry.
pub(crate) const PSC_FAMILY_NAICS: &[(&str, &[&str])] = &[
    ("D", &["541512"]),
    ("R", &["541611"]),
    ("Y", &["236220"]),
    ("Z", &["236220"]),
    ("S", &["561210"]),
    ("J", &["811310"]),
    ("Q", &["621111"]),
    ("U", &["611430"]),
    ("F", &["562910"]),
    ("7", &["541519"]),
    ("6", &["334516"]),
];
