//! Permission evaluation.
//!
//! Decides YES/NO for a `(distributor, region)` pair. Excludes are
//! scanned first and a matching exclude always wins, regardless of how
//! specific any include is. If neither list matches, the answer is NO.

use serde::Serialize;

use crate::distributor::Distributor;

/// Outcome of a permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl Decision {
    /// The wire representation (`YES` / `NO`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Yes => "YES",
            Decision::No => "NO",
        }
    }
}

/// Returns true if `region` matches `token`.
///
/// Region tokens are dash-joined hierarchical paths with the broadest
/// level last, so a token matches when the region string ends with it:
/// `INDIA` matches `CHENNAI-TAMILNADU-INDIA`. Equality is a special
/// case of the suffix check but is kept explicit for clarity; both
/// produce a single match.
pub fn token_matches(region: &str, token: &str) -> bool {
    region == token || region.ends_with(token)
}

/// Evaluates permission for `region` against the distributor's rules.
///
/// The requested region is upper-cased here; stored tokens are taken
/// as-is (normalizing them is the loader's responsibility).
///
/// Order of evaluation:
/// 1. First matching exclude token → `No`.
/// 2. Otherwise, first matching include token → `Yes`.
/// 3. Otherwise → `No` (default deny).
pub fn evaluate(distributor: &Distributor, region: &str) -> Decision {
    let region = region.to_uppercase();

    for excl in &distributor.excludes {
        if token_matches(&region, excl) {
            return Decision::No;
        }
    }

    for incl in &distributor.includes {
        if token_matches(&region, incl) {
            return Decision::Yes;
        }
    }

    Decision::No
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distributor(includes: &[&str], excludes: &[&str]) -> Distributor {
        Distributor {
            name: "D1".to_string(),
            includes: includes.iter().map(|s| s.to_string()).collect(),
            excludes: excludes.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_include_suffix_grants_permission() {
        let d = distributor(
            &["INDIA", "UNITEDSTATES"],
            &["KARNATAKA-INDIA", "CHENNAI-TAMILNADU-INDIA"],
        );
        assert_eq!(evaluate(&d, "CHICAGO-ILLINOIS-UNITEDSTATES"), Decision::Yes);
    }

    #[test]
    fn test_exact_exclude_beats_broader_include() {
        let d = distributor(
            &["INDIA", "UNITEDSTATES"],
            &["KARNATAKA-INDIA", "CHENNAI-TAMILNADU-INDIA"],
        );
        // INDIA would include it, but the exact exclude wins.
        assert_eq!(evaluate(&d, "CHENNAI-TAMILNADU-INDIA"), Decision::No);
    }

    #[test]
    fn test_exclude_suffix_beats_include() {
        let d = distributor(
            &["INDIA", "UNITEDSTATES"],
            &["KARNATAKA-INDIA", "CHENNAI-TAMILNADU-INDIA"],
        );
        assert_eq!(evaluate(&d, "BANGALORE-KARNATAKA-INDIA"), Decision::No);
    }

    #[test]
    fn test_default_deny_when_nothing_matches() {
        let d = distributor(&["INDIA"], &[]);
        assert_eq!(evaluate(&d, "LONDON-ENGLAND-UNITEDKINGDOM"), Decision::No);
    }

    #[test]
    fn test_empty_rule_lists_deny_everything() {
        let d = distributor(&[], &[]);
        assert_eq!(evaluate(&d, "ANY-REGION"), Decision::No);
        assert_eq!(evaluate(&d, ""), Decision::No);
    }

    #[test]
    fn test_request_region_is_normalized_to_uppercase() {
        let d = distributor(&["INDIA"], &[]);
        assert_eq!(evaluate(&d, "chennai-tamilnadu-india"), Decision::Yes);
    }

    #[test]
    fn test_exact_token_equality_matches() {
        let d = distributor(&["INDIA"], &[]);
        assert_eq!(evaluate(&d, "INDIA"), Decision::Yes);
    }

    #[test]
    fn test_exclude_precedence_with_identical_token_in_both_lists() {
        let d = distributor(&["INDIA"], &["INDIA"]);
        assert_eq!(evaluate(&d, "CHENNAI-TAMILNADU-INDIA"), Decision::No);
    }

    #[test]
    fn test_token_matches_suffix_semantics() {
        assert!(token_matches("CHENNAI-TAMILNADU-INDIA", "INDIA"));
        assert!(token_matches("CHENNAI-TAMILNADU-INDIA", "TAMILNADU-INDIA"));
        assert!(token_matches("INDIA", "INDIA"));
        assert!(!token_matches("INDIA", "CHENNAI-TAMILNADU-INDIA"));
        assert!(!token_matches("INDIANA-UNITEDSTATES", "INDIA"));
    }

    #[test]
    fn test_decision_wire_values() {
        assert_eq!(serde_json::to_string(&Decision::Yes).unwrap(), "\"YES\"");
        assert_eq!(serde_json::to_string(&Decision::No).unwrap(), "\"NO\"");
        assert_eq!(Decision::Yes.as_str(), "YES");
        assert_eq!(Decision::No.as_str(), "NO");
    }
}
