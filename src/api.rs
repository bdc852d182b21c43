//! Public surface of the crate.
//!
//! A [`Game`] is the per-document aggregate: board, ledger, title words,
//! relation index and conjugation lookup are built together at load time and
//! discarded together when the next document replaces them. The engine's two
//! transitions, [`Game::apply_guess`] and [`Game::full_reveal`], are
//! synchronous and atomic; exclusive ownership of the `Game` is the
//! serialization discipline for callers feeding it from several sources.

use std::collections::{HashMap, HashSet};

use crate::engine::relation::RelationIndex;
use crate::engine::resolve;
use crate::rules;
use crate::text::{normalize, tokenize};

/// A document handed to the engine by an acquisition collaborator (or by a
/// peer's `load-article` event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: Option<String>,
    pub content: String,
}

/// Where the current round stands. Guesses are only processed while
/// `Playing`; both terminal states keep the board fully visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Revealed,
}

/// One unit of the document's rendered sequence.
///
/// Punctuation/whitespace runs are always visible and never matched. For word
/// tokens, `hidden` masks the word, and `is_close_guess` marks a token shown
/// as a hint chip: visible only because of a near-miss, displaying
/// `display_as` instead of its true text. `is_close_guess` implies
/// `hidden == false`, and `display_as` is only set while `is_close_guess`
/// holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw source substring, casing and diacritics preserved.
    pub original: String,
    pub is_punctuation: bool,
    pub hidden: bool,
    pub is_close_guess: bool,
    /// Text shown in place of `original` while this token is a hint chip.
    pub display_as: Option<String>,
    /// Best numeric-hint distance seen so far; a new numeric guess must beat
    /// it strictly to take the token over.
    pub closest_guess_distance: Option<i64>,
    pub(crate) norm: String,
}

impl Token {
    /// The token's normalized comparison key (empty for punctuation).
    pub fn normalized(&self) -> &str {
        &self.norm
    }
}

/// Per-guess outcome record, keyed by normalized guess in the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuessRecord {
    /// True once this guess caused at least one true reveal.
    pub found: bool,
    /// Total board tokens revealed by this guess over the game.
    pub count: usize,
    /// Whether the guess is one of the document's title words.
    pub is_title: bool,
    /// Whether the guess only produced a hint (numeric, relation or typo).
    pub is_synonym: bool,
}

/// What one call to [`Game::apply_guess`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuessOutcome {
    /// At least one token was revealed or hinted.
    pub board_changed: bool,
    /// The win condition newly became true on this guess.
    pub won: bool,
}

/// Raw relation source data: clue→target pairs plus category word lists,
/// possibly mixed case and accented. Normalized and document-filtered at load
/// time. `Default` yields the built-in database.
#[derive(Debug, Clone)]
pub struct RelationData {
    pub pairs: Vec<(String, String)>,
    pub categories: Vec<Vec<String>>,
}

impl Default for RelationData {
    fn default() -> Self {
        rules::relations::default_data()
    }
}

/// The per-document game state, owned by exactly one caller at a time.
#[derive(Debug, Clone)]
pub struct Game {
    title: String,
    url: Option<String>,
    pub(crate) status: GameStatus,
    pub(crate) board: Vec<Token>,
    pub(crate) ledger: HashMap<String, GuessRecord>,
    pub(crate) history: Vec<String>,
    pub(crate) guess_count: u32,
    pub(crate) title_words: HashSet<String>,
    /// Distinct normalized hidden words, in first-occurrence order. The order
    /// is the deterministic tie-break of the typo strategy.
    pub(crate) hidden_unique: Vec<String>,
    pub(crate) relations: RelationIndex,
    pub(crate) conjugations: HashMap<String, Vec<String>>,
}

impl Game {
    /// Load a document with the built-in relation and conjugation tables.
    pub fn load(article: Article) -> Game {
        Game::load_with(
            article,
            &RelationData::default(),
            &rules::conjugation::DEFAULT_CONJUGATIONS,
        )
    }

    /// Load a document with caller-supplied relation data and conjugation
    /// lookup. Every entry of both is re-normalized here, so mixed-case or
    /// accented source data is fine.
    pub fn load_with(
        article: Article,
        relations: &RelationData,
        conjugations: &HashMap<String, Vec<String>>,
    ) -> Game {
        let title_words: HashSet<String> = article
            .title
            .split(' ')
            .map(normalize)
            .filter(|word| !word.is_empty())
            .collect();

        let board = tokenize(&article.content, &rules::common_words::COMMON_WORDS);

        let mut hidden_unique = Vec::new();
        let mut hidden_set = HashSet::new();
        for token in &board {
            if token.is_punctuation || !token.hidden {
                continue;
            }
            if hidden_set.insert(token.norm.clone()) {
                hidden_unique.push(token.norm.clone());
            }
        }

        let relations = RelationIndex::build(relations, &hidden_set);
        let conjugations = normalize_conjugations(conjugations);

        Game {
            title: article.title,
            url: article.url,
            status: GameStatus::Playing,
            board,
            ledger: HashMap::new(),
            history: Vec::new(),
            guess_count: 0,
            title_words,
            hidden_unique,
            relations,
            conjugations,
        }
    }

    /// Resolve one guess against the board: run the strategy chain, update
    /// the ledger and check the win condition. Empty or whitespace-only input
    /// is absorbed as a no-op, as is a guess already marked found. Whether the
    /// guess came from local input or a relayed peer makes no difference here;
    /// only the caller's re-broadcast decision cares, and the engine never
    /// re-emits a guess it processed.
    pub fn apply_guess(&mut self, raw: &str) -> GuessOutcome {
        resolve::apply_guess(self, raw)
    }

    /// Surrender: unmask every token. Does not touch the ledger.
    pub fn full_reveal(&mut self) {
        resolve::full_reveal(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The ordered token sequence, for rendering.
    pub fn board(&self) -> &[Token] {
        &self.board
    }

    /// The guess ledger, keyed by normalized guess.
    pub fn ledger(&self) -> &HashMap<String, GuessRecord> {
        &self.ledger
    }

    /// The normalized words of the document title, all of which must be found
    /// to win. An empty title means the game can never be won.
    pub fn title_words(&self) -> &HashSet<String> {
        &self.title_words
    }

    /// Raw guesses in submission order, newest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Guesses that were actually resolved (non-empty, not already found).
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// Distinct hidden words the document started with.
    pub fn total_unique_words(&self) -> usize {
        self.hidden_unique.len()
    }

    /// Distinct guesses that revealed at least one token.
    pub fn found_words_count(&self) -> usize {
        self.ledger.values().filter(|record| record.found).count()
    }
}

fn normalize_conjugations(table: &HashMap<String, Vec<String>>) -> HashMap<String, Vec<String>> {
    let mut out = HashMap::new();
    for (infinitive, forms) in table {
        let key = normalize(infinitive);
        if key.is_empty() {
            continue;
        }
        let forms: Vec<String> =
            forms.iter().map(|form| normalize(form)).filter(|form| !form.is_empty()).collect();
        if forms.is_empty() {
            continue;
        }
        out.insert(key, forms);
    }
    out
}
