//! Guess pre-classification.
//!
//! One cheap scan of the normalized guess produces the trait mask that gates
//! the strategy chain. The scan never looks at the board: it only answers
//! "which strategies could possibly apply to this guess".

bitflags::bitflags! {
    /// Coarse classification of a normalized guess.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct GuessTraits: u8 {
        /// The guess is one or more decimal digits and nothing else.
        const NUMERIC       = 1 << 0;
        /// The guess is long enough (≥ 3 chars) for typo matching.
        const TYPO_ELIGIBLE = 1 << 1;
    }
}

impl GuessTraits {
    pub fn scan(normalized: &str) -> Self {
        let mut traits = GuessTraits::empty();

        if regex!(r"^\d+$").is_match(normalized) {
            traits |= GuessTraits::NUMERIC;
        }
        if normalized.chars().count() >= 3 {
            traits |= GuessTraits::TYPO_ELIGIBLE;
        }

        traits
    }
}
