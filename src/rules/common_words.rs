//! Function words that start the game visible.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Allow-list of common French function words. Entries are stored in
/// normalized form (lowercase, accent-free) because the tokenizer matches
/// them against `normalize(run)`.
pub(crate) static COMMON_WORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    [
        // articles & determiners
        "le", "la", "les", "un", "une", "des", "de", "du", "au", "aux", "ce", "cet", "cette",
        "ces", "son", "sa", "ses", "leur", "leurs", "notre", "votre", "nos", "vos", "mon", "ma",
        "mes", "ton", "ta", "tes", "quel", "quelle", "quels", "quelles",
        // pronouns
        "je", "tu", "il", "elle", "ils", "elles", "on", "nous", "vous", "se", "lui", "y", "en",
        "qui", "que", "quoi", "dont", "ou",
        // prepositions & conjunctions
        "a", "dans", "par", "pour", "sur", "sous", "vers", "avec", "sans", "entre", "chez",
        "et", "mais", "donc", "ni", "car", "si", "comme", "lors", "pendant", "depuis",
        "apres", "avant", "puis",
        // frequent verb forms
        "est", "sont", "etait", "etaient", "fut", "furent", "ete", "etre", "sera", "seront",
        "ont", "avait", "avaient", "eut",
        // adverbs & misc
        "ne", "pas", "plus", "tres", "tout", "toute", "tous", "toutes", "meme", "aussi",
        "encore", "deja", "ainsi", "alors", "bien", "peu", "non", "oui",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
});
