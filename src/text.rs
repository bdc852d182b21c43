//! Text canonicalization and board construction.
//!
//! Everything downstream compares words through one function: [`normalize`]
//! reduces a raw token to its canonical lowercase, accent-free,
//! elision-stripped key, and [`tokenize`] cuts a raw document into the ordered
//! token sequence the reveal machinery mutates.
//!
//! ```text
//! raw document ── tokenize ──> [Token]          (original text preserved)
//!                      │
//!                      └─ normalize(run) ──> comparison key + hidden/visible
//! ```
//!
//! Two raw tokens that differ only by case, diacritics, apostrophe style or a
//! leading elision must produce identical keys; every equality check in the
//! engine relies on that.

pub mod normalize;
pub mod tokenize;

pub(crate) use normalize::normalize;
pub(crate) use tokenize::tokenize;
