//! Office-name canonicalization.
//!
//! Raw office names arrive in every style the upstream's source systems
//! use: bare office codes, run-together abbreviations ("ACC-APG NATICK"),
//! National Guard property-office shorthand ("USPFO ACTIVITY CT ARNG"),
//! numeric unit designators ("802 CONS"), and shouting uppercase. The
//! pipeline applies, in order: exact office-code lookup, phrase
//! abbreviation expansion, structured regex rewrites, whole-word acronym
//! expansion, and title-casing with an uppercase preserve list.
//!
//! The pipeline is a fixpoint: every rewrite produces text that no rewrite
//! matches again, so `normalize(normalize(x)) == normalize(x)`.

use fedlead_refdata::ReferenceStore;
use once_cell::sync::Lazy;
use regex::Regex;

/// `USPFO [ACTIVITY] <state> [ARNG|ANG]`
static USPFO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^USPFO(?:\s+ACTIVITY)?[\s,-]+([A-Z]{2})(?:\s+(ARNG|ANG))?$").unwrap()
});

/// `<number>[ordinal] <unit designator>`
static UNIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:ST|ND|RD|TH)?\s+([A-Z]+)$").unwrap());

const GLUE_WORDS: &[&str] = &["of", "and", "the", "for", "at", "in"];

/// Pure office-name normalizer over the reference tables.
pub struct Normalizer<'a> {
    store: &'a ReferenceStore,
}

impl<'a> Normalizer<'a> {
    pub fn new(store: &'a ReferenceStore) -> Self {
        Self { store }
    }

    /// Canonicalize a raw office name.
    ///
    /// An exact office-code hit wins over every textual heuristic.
    pub fn normalize(&self, raw_name: &str, office_code: Option<&str>) -> String {
        if let Some(code) = office_code {
            if let Some(name) = self.store.office_code_name(code) {
                return name.to_string();
            }
        }

        let cleaned = collapse_whitespace(raw_name.trim());
        if cleaned.is_empty() {
            return String::new();
        }
        let upper = cleaned.to_uppercase();

        if let Some(expanded) = self.expand_phrase(&upper) {
            return expanded;
        }

        if let Some(caps) = USPFO_RE.captures(&upper) {
            let code = &caps[1];
            let state = self.store.state_name(code).unwrap_or(code);
            let suffix = match caps.get(2).map(|m| m.as_str()) {
                Some("ARNG") => " Army National Guard",
                Some("ANG") => " Air National Guard",
                _ => "",
            };
            return format!("U.S. Property and Fiscal Office - {state}{suffix}");
        }

        if let Some(caps) = UNIT_RE.captures(&upper) {
            if let Some(unit) = self.store.unit_designator(&caps[2]) {
                if let Ok(n) = caps[1].parse::<u32>() {
                    return format!("{} {unit}", ordinal(n));
                }
            }
        }

        let expanded = self.expand_acronyms(&cleaned);
        self.title_case(&expanded)
    }

    /// Multi-word abbreviation expansion: exact match, or a leading prefix
    /// followed by a separator. Trailing text is normalized and appended
    /// after a comma ("ACC-APG NATICK" → "... Proving Ground, Natick").
    fn expand_phrase(&self, upper: &str) -> Option<String> {
        for &(key, expansion) in self.store.phrase_abbreviations() {
            if upper == key {
                return Some(expansion.to_string());
            }
            if let Some(rest) = upper.strip_prefix(key) {
                if rest.starts_with([' ', ',', '-']) {
                    let rest = rest.trim_start_matches([' ', ',', '-']);
                    if rest.is_empty() {
                        return Some(expansion.to_string());
                    }
                    let tail = self.title_case(&self.expand_acronyms(rest));
                    return Some(format!("{expansion}, {tail}"));
                }
            }
        }
        None
    }

    /// Whole-word acronym substitution, preserving trailing commas.
    fn expand_acronyms(&self, input: &str) -> String {
        let words: Vec<String> = input
            .split_whitespace()
            .map(|word| {
                let (core, trailing) = split_trailing_comma(word);
                match self.store.acronym_expansion(core.to_uppercase().as_str()) {
                    Some(expansion) => format!("{expansion}{trailing}"),
                    None => word.to_string(),
                }
            })
            .collect();
        words.join(" ")
    }

    fn title_case(&self, input: &str) -> String {
        let words: Vec<String> = input
            .split_whitespace()
            .enumerate()
            .map(|(i, word)| {
                let (core, trailing) = split_trailing_comma(word);
                let upper = core.to_uppercase();
                if self.store.keep_uppercase(upper.as_str()) {
                    return format!("{upper}{trailing}");
                }
                if core.contains('.') {
                    return word.to_string();
                }
                let lower = core.to_lowercase();
                if i > 0 && GLUE_WORDS.contains(&lower.as_str()) {
                    return format!("{lower}{trailing}");
                }
                format!("{}{trailing}", capitalize_segments(core))
            })
            .collect();
        words.join(" ")
    }
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn split_trailing_comma(word: &str) -> (&str, &str) {
    match word.strip_suffix(',') {
        Some(core) => (core, ","),
        None => (word, ""),
    }
}

/// Capitalize the first letter of each hyphen/slash-separated segment,
/// lowercasing the remainder.
fn capitalize_segments(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_start = true;
    for c in word.chars() {
        if c == '-' || c == '/' || c == '(' {
            out.push(c);
            at_start = true;
        } else if at_start {
            out.extend(c.to_uppercase());
            at_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th-13th, 21st, ...
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer(store: &ReferenceStore) -> Normalizer<'_> {
        Normalizer::new(store)
    }

    #[test]
    fn office_code_beats_text() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        assert_eq!(
            n.normalize("SOMETHING ELSE ENTIRELY", Some("N68711")),
            "NAVFAC Southwest"
        );
    }

    #[test]
    fn acc_apg_scenario() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        assert_eq!(
            n.normalize("ACC-APG Natick", None),
            "Army Contracting Command - Aberdeen Proving Ground, Natick"
        );
    }

    #[test]
    fn phrase_exact_match() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        assert_eq!(
            n.normalize("ACC-RSA", None),
            "Army Contracting Command - Redstone Arsenal"
        );
    }

    #[test]
    fn phrase_prefix_requires_separator() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        // "ACC-APGX" must not expand via the ACC-APG key.
        assert_eq!(n.normalize("ACC-APGX", None), "Acc-Apgx");
    }

    #[test]
    fn uspfo_with_state_and_component() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        assert_eq!(
            n.normalize("USPFO CT ARNG", None),
            "U.S. Property and Fiscal Office - Connecticut Army National Guard"
        );
        assert_eq!(
            n.normalize("USPFO ACTIVITY TX ANG", None),
            "U.S. Property and Fiscal Office - Texas Air National Guard"
        );
        assert_eq!(
            n.normalize("USPFO, OH", None),
            "U.S. Property and Fiscal Office - Ohio"
        );
    }

    #[test]
    fn numeric_unit_ordinal() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        assert_eq!(n.normalize("802 CONS", None), "802nd Contracting Squadron");
        assert_eq!(n.normalize("1 CES", None), "1st Civil Engineer Squadron");
        assert_eq!(n.normalize("11 LRS", None), "11th Logistics Readiness Squadron");
        assert_eq!(n.normalize("23 FW", None), "23rd Fighter Wing");
    }

    #[test]
    fn acronym_expansion_whole_word() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        assert_eq!(
            n.normalize("MICC FT HOOD", None),
            "MICC Fort Hood"
        );
        // "FT" embedded in a longer word stays put.
        assert_eq!(n.normalize("CRAFT SHOP", None), "Craft Shop");
    }

    #[test]
    fn title_case_preserves_known_acronyms() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        assert_eq!(
            n.normalize("NAVFAC SOUTHWEST CORE", None),
            "NAVFAC Southwest Core"
        );
        assert_eq!(
            n.normalize("WRIGHT-PATTERSON AFB OH", None),
            "Wright-Patterson AFB Oh"
        );
    }

    #[test]
    fn glue_words_stay_lowercase() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        assert_eq!(
            n.normalize("OFFICE OF THE SECRETARY", None),
            "Office of the Secretary"
        );
    }

    #[test]
    fn empty_and_whitespace_inputs() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        assert_eq!(n.normalize("", None), "");
        assert_eq!(n.normalize("   ", None), "");
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(112), "112th");
        assert_eq!(ordinal(802), "802nd");
    }

    #[test]
    fn normalization_is_idempotent() {
        let store = ReferenceStore::new();
        let n = normalizer(&store);
        let fixtures = [
            "ACC-APG Natick",
            "USPFO CT ARNG",
            "USPFO ACTIVITY TX ANG",
            "802 CONS",
            "NAVSUP FLC NORFOLK",
            "NSWC CRANE",
            "MICC FT HOOD",
            "NAVFAC SOUTHWEST",
            "US ARMY CORPS OF ENGINEERS, MOBILE DISTRICT",
            "OFFICE OF THE SECRETARY",
            "W6QK ACC-APG",
            "DLA TROOP SUPPORT",
            "Random Obscure Office",
        ];
        for raw in fixtures {
            let once = n.normalize(raw, None);
            let twice = n.normalize(&once, None);
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }
}
