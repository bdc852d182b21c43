//! Generative morphology.
//!
//! `variants` expands a normalized guess into the set of normalized forms it
//! should also reveal: plural/singular alternations and the common French
//! gender/number suffix swaps. The rules are additive suffix rewrites and
//! deliberately conservative: they can both under- and over-generate on
//! irregular forms, which is acceptable because every produced form is only
//! ever compared against words actually on the board.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Gender/number suffix alternations, applied in both directions.
const SUFFIX_PAIRS: &[(&str, &str)] = &[
    ("euse", "eur"),
    ("ive", "if"),
    ("enne", "en"),
    ("elle", "el"),
    ("ette", "et"),
    ("onne", "on"),
    ("ere", "er"),
    ("ete", "et"),
];

/// Short function words that morphology alone must not reveal: they collide
/// with generated plural/suffix forms of unrelated guesses. A board token
/// carrying one of these keys is only revealed when the raw token text equals
/// the raw guess exactly.
pub(crate) static NO_MORPH_REVEAL: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "a", "ai", "as", "au", "aux", "en", "es", "est", "et", "eu", "on", "or", "os", "ou", "y",
    ])
});

/// Expand `base` (a normalized key) into the full set of forms it reveals.
/// The base itself is always included; the result is a set, order-free.
pub(crate) fn variants(base: &str) -> HashSet<String> {
    let mut out = HashSet::new();
    out.insert(base.to_string());

    let len = base.chars().count();

    if len > 1 {
        out.insert(format!("{base}s"));
        if let Some(stem) = base.strip_suffix('s') {
            out.insert(stem.to_string());
        }
    }

    if base.ends_with("eau") {
        out.insert(format!("{base}x"));
    }
    if base.ends_with("eaux") {
        out.insert(base[..base.len() - 1].to_string());
    }

    if let Some(stem) = base.strip_suffix("al") {
        out.insert(format!("{stem}aux"));
    }
    if len > 3 {
        if let Some(stem) = base.strip_suffix("aux") {
            out.insert(format!("{stem}al"));
        }
    }

    if len > 2 && (base.ends_with("au") || base.ends_with("eu")) {
        out.insert(format!("{base}x"));
    }
    if len > 3 && (base.ends_with("aux") || base.ends_with("eux")) {
        out.insert(base[..base.len() - 1].to_string());
    }

    for &(a, b) in SUFFIX_PAIRS {
        if let Some(stem) = base.strip_suffix(a) {
            out.insert(format!("{stem}{b}"));
        }
        if let Some(stem) = base.strip_suffix(b) {
            out.insert(format!("{stem}{a}"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_always_included() {
        assert!(variants("maison").contains("maison"));
        assert!(variants("x").contains("x"));
        assert!(variants("").contains(""));
    }

    #[test]
    fn plural_and_singular() {
        let v = variants("maison");
        assert!(v.contains("maisons"));
        let v = variants("maisons");
        assert!(v.contains("maison"));
        // Single letters don't pluralize.
        assert!(!variants("x").contains("xs"));
    }

    #[test]
    fn al_aux_alternation() {
        assert!(variants("cheval").contains("chevaux"));
        assert!(variants("journal").contains("journaux"));
        assert!(variants("chevaux").contains("cheval"));
        assert!(variants("journaux").contains("journal"));
    }

    #[test]
    fn eau_and_eu_take_x() {
        assert!(variants("bateau").contains("bateaux"));
        assert!(variants("bateaux").contains("bateau"));
        assert!(variants("jeu").contains("jeux"));
        assert!(variants("jeux").contains("jeu"));
        assert!(variants("noyau").contains("noyaux"));
    }

    #[test]
    fn gender_suffix_pairs_swap_both_ways() {
        assert!(variants("chanteuse").contains("chanteur"));
        assert!(variants("chanteur").contains("chanteuse"));
        assert!(variants("sportive").contains("sportif"));
        assert!(variants("sportif").contains("sportive"));
        assert!(variants("parisienne").contains("parisien"));
        assert!(variants("premiere").contains("premier"));
        assert!(variants("lionne").contains("lion"));
    }

    #[test]
    fn digits_pass_through_mostly_unscathed() {
        let v = variants("1905");
        assert!(v.contains("1905"));
        // Only the generic plural applies.
        assert_eq!(v.len(), 2);
    }
}
