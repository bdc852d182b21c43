//! The guess transition function and its bookkeeping.
//!
//! `apply_guess` is atomic: it validates the input, runs the strategy chain,
//! writes the ledger and checks the win condition before returning. Callers
//! that receive guesses from several sources (local input, relayed peers) must
//! serialize calls; holding the `&mut Game` is exactly that discipline.

use crate::api::{Game, GameStatus, GuessOutcome, GuessRecord};
use crate::engine::strategies::STRATEGIES;
use crate::engine::trigger::GuessTraits;
use crate::text::normalize::normalize;
use crate::{GuessContext, StrategyEffect};

pub(crate) fn apply_guess(game: &mut Game, raw: &str) -> GuessOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() || game.status != GameStatus::Playing {
        return GuessOutcome::default();
    }

    // History records every attempt, including re-submissions of found words.
    game.history.insert(0, trimmed.to_string());

    let norm = normalize(trimmed);
    if norm.is_empty() {
        return GuessOutcome::default();
    }
    if game.ledger.get(&norm).is_some_and(|record| record.found) {
        return GuessOutcome::default();
    }

    game.guess_count += 1;

    let traits = GuessTraits::scan(&norm);
    let ctx = GuessContext { raw: trimmed.to_string(), norm };
    let debug = std::env::var_os("MOTCACHE_DEBUG_STRATEGIES").is_some();

    let mut effect = StrategyEffect::Miss;
    for strategy in STRATEGIES {
        if !strategy.active_for(traits) {
            if debug {
                eprintln!("[strategy:skip] name=\"{}\" traits={traits:?}", strategy.name);
            }
            continue;
        }
        let result = (strategy.apply)(game, &ctx);
        if debug {
            eprintln!("[strategy:run] name=\"{}\" effect={result:?}", strategy.name);
        }
        if result != StrategyEffect::Miss {
            effect = result;
            break;
        }
    }

    match effect {
        StrategyEffect::Revealed(count) => {
            let prior = game.ledger.get(&ctx.norm).map_or(0, |record| record.count);
            game.ledger.insert(
                ctx.norm.clone(),
                GuessRecord {
                    found: true,
                    count: prior + count,
                    is_title: game.title_words.contains(&ctx.norm),
                    is_synonym: false,
                },
            );
        }
        StrategyEffect::Hinted => {
            game.ledger.insert(
                ctx.norm.clone(),
                GuessRecord { found: false, count: 0, is_title: false, is_synonym: true },
            );
        }
        StrategyEffect::Miss => {
            // A pure miss is still recorded, for history and analytics.
            game.ledger.insert(
                ctx.norm.clone(),
                GuessRecord { found: false, count: 0, is_title: false, is_synonym: false },
            );
        }
    }

    let won = check_win(game);
    GuessOutcome { board_changed: effect != StrategyEffect::Miss, won }
}

/// Won iff the title has words and every one of them has been found. On the
/// winning transition, hidden occurrences of title words are revealed even
/// when their board form was never guessed directly.
fn check_win(game: &mut Game) -> bool {
    if game.status != GameStatus::Playing || game.title_words.is_empty() {
        return false;
    }
    let all_found = game
        .title_words
        .iter()
        .all(|word| game.ledger.get(word).is_some_and(|record| record.found));
    if !all_found {
        return false;
    }

    game.status = GameStatus::Won;
    for token in &mut game.board {
        if !token.is_punctuation && token.hidden && game.title_words.contains(&token.norm) {
            token.hidden = false;
            token.is_close_guess = false;
        }
    }
    true
}

/// User-triggered surrender: unmask the whole board. The ledger is untouched.
pub(crate) fn full_reveal(game: &mut Game) {
    if game.status != GameStatus::Playing {
        return;
    }
    for token in &mut game.board {
        token.hidden = false;
        token.is_close_guess = false;
        token.display_as = None;
        token.closest_guess_distance = None;
    }
    game.status = GameStatus::Revealed;
}
