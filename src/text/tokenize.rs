//! Document tokenization.
//!
//! Splits a raw document into maximal runs of two kinds: word runs (a letter
//! or digit followed by letters, marks, digits, apostrophes or hyphens) and
//! separator runs (whitespace plus the punctuation set below). Original text
//! is preserved verbatim so the board re-renders faithfully; characters in
//! neither class are dropped.

use std::collections::HashSet;

use crate::api::Token;
use crate::text::normalize::normalize;

/// Cut `document` into the ordered token sequence of a fresh board.
///
/// Word runs become word tokens, hidden unless their normalized form is in
/// `common_words` (the fixed allow-list of function words that start visible).
/// Separator runs become always-visible punctuation tokens.
pub fn tokenize(document: &str, common_words: &HashSet<String>) -> Vec<Token> {
    // Word alternative first: at a shared start position the word run wins.
    let splitter = regex!(
        r#"([\p{L}\p{N}][\p{L}\p{M}\p{N}'’‘-]*)|([\s.,;:?!()"'’‘“”«»—–…]+)"#
    );

    let mut tokens = Vec::new();
    for run in splitter.find_iter(document) {
        let text = run.as_str();
        let is_word = text.chars().next().is_some_and(char::is_alphanumeric);

        if is_word {
            let norm = normalize(text);
            let hidden = !common_words.contains(&norm);
            tokens.push(Token {
                original: text.to_string(),
                is_punctuation: false,
                hidden,
                is_close_guess: false,
                display_as: None,
                closest_guess_distance: None,
                norm,
            });
        } else {
            tokens.push(Token {
                original: text.to_string(),
                is_punctuation: true,
                hidden: false,
                is_close_guess: false,
                display_as: None,
                closest_guess_distance: None,
                norm: String::new(),
            });
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_common() -> HashSet<String> {
        HashSet::new()
    }

    fn originals(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.original.as_str()).collect()
    }

    #[test]
    fn words_and_separators_alternate_in_order() {
        let tokens = tokenize("Jeanne d'Arc est née à Orléans.", &no_common());
        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| !t.is_punctuation)
            .map(|t| t.original.as_str())
            .collect();
        assert_eq!(words, vec!["Jeanne", "d'Arc", "est", "née", "à", "Orléans"]);

        // Everything round-trips: no character of this input is dropped.
        assert_eq!(originals(&tokens), "Jeanne d'Arc est née à Orléans.");
    }

    #[test]
    fn elided_token_stays_one_word() {
        let tokens = tokenize("L'arbre", &no_common());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].original, "L'arbre");
        assert_eq!(tokens[0].normalized(), "arbre");

        // Curly apostrophe, as fr.wikipedia renders it.
        let tokens = tokenize("d\u{2019}Arc", &no_common());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].normalized(), "arc");
    }

    #[test]
    fn digit_runs_are_word_tokens() {
        let tokens = tokenize("en 1905, puis 1910", &no_common());
        let year: Vec<&Token> =
            tokens.iter().filter(|t| !t.is_punctuation && t.original == "1905").collect();
        assert_eq!(year.len(), 1);
        assert!(year[0].hidden);
    }

    #[test]
    fn common_words_start_visible() {
        let common: HashSet<String> = ["est", "a"].iter().map(|w| w.to_string()).collect();
        let tokens = tokenize("Elle est à Paris", &no_common());
        assert!(tokens.iter().all(|t| t.is_punctuation || t.hidden));

        let tokens = tokenize("Elle est à Paris", &common);
        let est = tokens.iter().find(|t| t.original == "est").unwrap();
        let a = tokens.iter().find(|t| t.original == "à").unwrap();
        let paris = tokens.iter().find(|t| t.original == "Paris").unwrap();
        assert!(!est.hidden);
        assert!(!a.hidden, "the allow-list is matched on normalized keys");
        assert!(paris.hidden);
    }

    #[test]
    fn punctuation_runs_are_never_matchable() {
        let tokens = tokenize("« Oui », dit-elle… (enfin !)", &no_common());
        for t in &tokens {
            if t.is_punctuation {
                assert!(!t.hidden);
                assert!(!t.is_close_guess);
            }
        }
        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| !t.is_punctuation)
            .map(|t| t.original.as_str())
            .collect();
        assert_eq!(words, vec!["Oui", "dit-elle", "enfin"]);
    }

    #[test]
    fn hyphenated_words_hold_together() {
        let tokens = tokenize("grand-père", &no_common());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].normalized(), "grand-pere");
    }
}
