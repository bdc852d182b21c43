//! Guess resolution engine.
//!
//! This module is the operational core of the crate: one guess goes in, the
//! board and ledger come out mutated, deterministically. Given the same
//! document and the same guess sequence, the resulting board, ledger and win
//! flag are always identical: there is no randomness, no ranking, and no
//! hidden state outside the [`crate::Game`] aggregate.
//!
//! ## How the parts work together
//!
//! Applying a guess is a short pipeline:
//!
//! ```text
//! raw guess ── trim / dedupe ──┐
//!                              │ normalize          (text::normalize)
//!                              v
//!                    GuessTraits::scan              (trigger.rs)
//!                              │ gates the chain
//!                              v
//!                  strategy chain, in fixed order   (strategies.rs)
//!                    1. direct / morphological reveal
//!                    2. numeric proximity hint
//!                    3. static relation hint
//!                    4. typo proximity hint
//!                              │ first match wins
//!                              v
//!                    ledger update + win check      (resolve.rs)
//! ```
//!
//! The chain is an explicit ordered table, not nested conditionals: each entry
//! declares which guess traits it requires or excludes, runs against the
//! board, and reports whether it matched. Strategies 2–4 are mutually
//! exclusive with a direct reveal and with each other.
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: coarse per-guess classification (`GuessTraits`) used to
//!   gate strategies before any board scan.
//! - `strategies.rs`: the four matching strategies and their fixed order.
//! - `resolve.rs`: the transition function itself (history/ledger
//!   bookkeeping, chain execution, win detection, full reveal).
//! - `distance.rs`: Levenshtein edit distance for the typo strategy.
//! - `numeric.rs`: decimal and Roman-numeral token parsing for the numeric
//!   strategy.
//! - `relation.rs`: the per-document normalized clue→target and category
//!   indexes.
//!
//! ## Debugging
//!
//! Set `MOTCACHE_DEBUG_STRATEGIES=1` to print which strategies were skipped,
//! run and matched for each guess.

pub(crate) mod distance;
pub(crate) mod numeric;
pub(crate) mod relation;
pub(crate) mod resolve;
pub(crate) mod strategies;
pub(crate) mod trigger;

#[cfg(test)]
mod tests;
