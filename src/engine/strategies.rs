//! The four matching strategies, in their fixed priority order.
//!
//! Every strategy receives the whole game mutably, scans the board, performs
//! its reveals or hints in place and reports a [`StrategyEffect`]. The table
//! order is the priority contract: direct reveals always beat hints, and the
//! three hint strategies never run for the same guess.

use crate::api::Game;
use crate::engine::distance::distance;
use crate::engine::numeric::parse_numeric_token;
use crate::engine::trigger::GuessTraits;
use crate::rules::morph::{self, variants};
use crate::{GuessContext, Strategy, StrategyEffect};

pub(crate) static STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "direct-reveal",
        requires: GuessTraits::empty(),
        excludes: GuessTraits::empty(),
        apply: direct_reveal,
    },
    Strategy {
        name: "numeric-proximity",
        requires: GuessTraits::NUMERIC,
        excludes: GuessTraits::empty(),
        apply: numeric_proximity,
    },
    Strategy {
        name: "static-relation",
        requires: GuessTraits::empty(),
        excludes: GuessTraits::NUMERIC,
        apply: relation_hint,
    },
    Strategy {
        name: "typo-proximity",
        requires: GuessTraits::TYPO_ELIGIBLE,
        excludes: GuessTraits::NUMERIC,
        apply: typo_proximity,
    },
];

/// Strategy 1: reveal every occurrence of the guess, its morphological
/// variants and its conjugated forms. Blocklisted short words only fall when
/// the raw token text equals the raw guess exactly.
fn direct_reveal(game: &mut Game, ctx: &GuessContext) -> StrategyEffect {
    let mut reveal_keys = variants(&ctx.norm);
    if let Some(conjugated) = game.conjugations.get(&ctx.norm) {
        reveal_keys.extend(conjugated.iter().cloned());
    }

    let mut revealed = 0;
    for token in &mut game.board {
        if token.is_punctuation || !(token.hidden || token.is_close_guess) {
            continue;
        }
        if !reveal_keys.contains(&token.norm) {
            continue;
        }
        if morph::NO_MORPH_REVEAL.contains(token.norm.as_str()) && token.original != ctx.raw {
            continue;
        }
        token.hidden = false;
        token.is_close_guess = false;
        token.display_as = None;
        token.closest_guess_distance = None;
        revealed += 1;
    }

    if revealed > 0 { StrategyEffect::Revealed(revealed) } else { StrategyEffect::Miss }
}

/// Strategy 2: per-token best-hint watermark on numeric tokens. Each numeric
/// board token independently keeps the closest guess seen so far; a new guess
/// only takes a token over when it is strictly closer.
fn numeric_proximity(game: &mut Game, ctx: &GuessContext) -> StrategyEffect {
    let Ok(guess_value) = ctx.norm.parse::<i64>() else {
        return StrategyEffect::Miss;
    };

    let mut updated = false;
    for token in &mut game.board {
        if token.is_punctuation || !(token.hidden || token.is_close_guess) {
            continue;
        }
        let Some(value) = parse_numeric_token(&token.original) else {
            continue;
        };
        let diff = (value as i128 - guess_value as i128).unsigned_abs();
        let diff = i64::try_from(diff).unwrap_or(i64::MAX);
        if token.closest_guess_distance.is_none_or(|best| diff < best) {
            token.hidden = false;
            token.is_close_guess = true;
            token.display_as = Some(ctx.raw.clone());
            token.closest_guess_distance = Some(diff);
            updated = true;
        }
    }

    if updated { StrategyEffect::Hinted } else { StrategyEffect::Miss }
}

/// Strategy 3: static relations. A guess that is a known clue hints every
/// hidden occurrence of its target; a guess belonging to a semantic category
/// hints every hidden member of that category.
fn relation_hint(game: &mut Game, ctx: &GuessContext) -> StrategyEffect {
    let target = game.relations.target_of(&ctx.norm);
    let category = game.relations.category_of(&ctx.norm);
    if target.is_none() && category.is_none() {
        return StrategyEffect::Miss;
    }

    let mut hinted = false;
    for token in &mut game.board {
        if token.is_punctuation || !token.hidden {
            continue;
        }
        let is_target = target == Some(token.norm.as_str());
        let in_category = category.is_some_and(|members| members.contains(&token.norm));
        if is_target || in_category {
            token.hidden = false;
            token.is_close_guess = true;
            token.display_as = Some(ctx.raw.clone());
            hinted = true;
        }
    }

    if hinted { StrategyEffect::Hinted } else { StrategyEffect::Miss }
}

/// Strategy 4: typo proximity. Find the document's hidden word closest to the
/// guess by edit distance and, when it is within the length-scaled threshold,
/// hint exactly one board occurrence: the first still-hidden one.
fn typo_proximity(game: &mut Game, ctx: &GuessContext) -> StrategyEffect {
    let guess_len = ctx.norm.chars().count();
    let threshold = if guess_len <= 4 { 1 } else { 2 };

    let mut best: Option<(&String, usize)> = None;
    for word in &game.hidden_unique {
        let len = word.chars().count();
        if len < 3 || len.abs_diff(guess_len) > 2 {
            continue;
        }
        let d = distance(word, &ctx.norm);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((word, d));
        }
        if d == 0 {
            break;
        }
    }

    let Some((target, best_distance)) = best else {
        return StrategyEffect::Miss;
    };
    // Distance 0 means the word was already found under this key (it stays in
    // the load-time list after being revealed); that is not a typo.
    if best_distance == 0 || best_distance > threshold {
        return StrategyEffect::Miss;
    }

    for token in &mut game.board {
        if token.is_punctuation || !token.hidden || &token.norm != target {
            continue;
        }
        token.hidden = false;
        token.is_close_guess = true;
        token.display_as = Some(ctx.raw.clone());
        return StrategyEffect::Hinted;
    }
    StrategyEffect::Miss
}
