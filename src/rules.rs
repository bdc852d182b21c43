//! Static language tables.
//!
//! Everything under `rules/` is fixed data or fixed rewrite rules: the
//! function-word allow-list, the generative morphology rules, the related-word
//! and semantic-category databases, and the default conjugation table. None of
//! it depends on the loaded document; document-scoped filtering and
//! normalization happen at load time in `engine::relation` and `api`.

pub(crate) mod common_words;
pub(crate) mod conjugation;
pub(crate) mod morph;
pub(crate) mod relations;
