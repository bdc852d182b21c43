//! Token canonicalization.
//!
//! `normalize` is pure and total: it never fails, and the empty string maps to
//! the empty string. It is also idempotent, so keys can be re-normalized
//! safely at any boundary.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Elision prefixes stripped during normalization, longest first so `qu'`
/// wins over a bare consonant prefix. `l'arbre` and `arbre` must share a key.
const ELISION_PREFIXES: &[&str] = &["qu'", "l'", "d'", "j'", "m'", "t'", "n'", "s'"];

/// Reduce `token` to its canonical comparison key.
///
/// Steps, in order: compose (NFC), fold apostrophe variants to `'`, lowercase,
/// expand ligatures (œ→oe, æ→ae, ß→ss), strip a recognized elision prefix,
/// decompose and drop combining marks, keep only letters/digits/hyphens, then
/// collapse hyphen runs and trim edge hyphens.
///
/// # Example
/// ```
/// use motcache::normalize;
///
/// assert_eq!(normalize("L'Arbre"), "arbre");
/// assert_eq!(normalize("cœur"), "coeur");
/// ```
pub fn normalize(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }

    // Compose first so precomposed and decomposed inputs fold identically.
    let composed: String = token.nfc().collect();

    let mut lowered = String::with_capacity(composed.len());
    for ch in composed.chars() {
        let ch = match ch {
            '\u{2018}' | '\u{2019}' | '\u{2032}' | '\u{02BC}' => '\'',
            _ => ch,
        };
        for lc in ch.to_lowercase() {
            match lc {
                'œ' => lowered.push_str("oe"),
                'æ' => lowered.push_str("ae"),
                'ß' => lowered.push_str("ss"),
                _ => lowered.push(lc),
            }
        }
    }

    let stripped = strip_elision(&lowered);

    let mut out = String::with_capacity(stripped.len());
    let mut last_was_hyphen = false;
    for ch in stripped.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch == '-' {
            if !last_was_hyphen {
                out.push('-');
                last_was_hyphen = true;
            }
        } else if ch.is_alphanumeric() {
            out.push(ch);
            last_was_hyphen = false;
        }
        // anything else (apostrophes, punctuation, symbols) is dropped
    }

    out.trim_matches('-').to_string()
}

fn strip_elision(word: &str) -> &str {
    for prefix in ELISION_PREFIXES {
        if let Some(rest) = word.strip_prefix(prefix) {
            return rest;
        }
    }
    word
}
