//! Numeric token parsing.
//!
//! Board tokens count as numeric when the whole token is a decimal digit run
//! or a Roman numeral: centuries and monarch ordinals are Roman on
//! fr.wikipedia, and a year guess should land hints on both spellings.
//! Guesses themselves are only treated numerically when they are decimal
//! digits; that gate lives in `trigger.rs`.

fn roman_value(c: char) -> Option<i64> {
    match c {
        'i' => Some(1),
        'v' => Some(5),
        'x' => Some(10),
        'l' => Some(50),
        'c' => Some(100),
        'd' => Some(500),
        'm' => Some(1000),
        _ => None,
    }
}

/// Parse a full-token Roman numeral (case-insensitive, standard subtractive
/// reading). Returns `None` when any character is not a Roman digit.
pub(crate) fn roman_to_int(s: &str) -> Option<i64> {
    let lower = s.trim().to_lowercase();
    if !regex!(r"^[ivxlcdm]+$").is_match(&lower) {
        return None;
    }

    let mut total = 0;
    let mut prev = 0;
    for c in lower.chars().rev() {
        let value = roman_value(c)?;
        if value < prev {
            total -= value;
        } else {
            total += value;
        }
        prev = value;
    }
    Some(total)
}

/// Parse a board token as an integer: decimal digits first, Roman otherwise.
pub(crate) fn parse_numeric_token(s: &str) -> Option<i64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    if regex!(r"^\d+$").is_match(t) {
        return t.parse::<i64>().ok();
    }
    roman_to_int(t)
}
