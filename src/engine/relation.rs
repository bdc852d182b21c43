//! Per-document relation index.
//!
//! Raw relation data (clue→target pairs and category word lists) is normalized
//! once per document load. The clue→target side is filtered down to targets
//! that actually occur among the document's hidden words, so a guess lookup
//! during play is a plain map probe with no dead entries. Entries that
//! normalize to the empty string are dropped rather than indexed.

use std::collections::{HashMap, HashSet};

use crate::api::RelationData;
use crate::text::normalize::normalize;

#[derive(Debug, Clone, Default)]
pub(crate) struct RelationIndex {
    clue_to_target: HashMap<String, String>,
    categories: Vec<HashSet<String>>,
    member_to_category: HashMap<String, usize>,
}

impl RelationIndex {
    /// Normalize and index `data` for a document whose distinct hidden
    /// normalized words are `hidden`.
    pub fn build(data: &RelationData, hidden: &HashSet<String>) -> Self {
        let mut clue_to_target = HashMap::new();
        for (clue, target) in &data.pairs {
            let clue = normalize(clue);
            let target = normalize(target);
            if clue.is_empty() || target.is_empty() {
                continue;
            }
            if hidden.contains(&target) {
                clue_to_target.insert(clue, target);
            }
        }

        let mut categories: Vec<HashSet<String>> = Vec::new();
        let mut member_to_category = HashMap::new();
        for raw_members in &data.categories {
            let members: HashSet<String> = raw_members
                .iter()
                .map(|w| normalize(w))
                .filter(|w| !w.is_empty())
                .collect();
            if members.is_empty() {
                continue;
            }
            let id = categories.len();
            for member in &members {
                // A word registered in several categories keeps the last one.
                member_to_category.insert(member.clone(), id);
            }
            categories.push(members);
        }

        RelationIndex { clue_to_target, categories, member_to_category }
    }

    /// The target a normalized clue maps to, if it is hidden in this document.
    pub fn target_of(&self, guess: &str) -> Option<&str> {
        self.clue_to_target.get(guess).map(String::as_str)
    }

    /// The full category set a normalized guess belongs to, if any.
    pub fn category_of(&self, guess: &str) -> Option<&HashSet<String>> {
        self.member_to_category.get(guess).map(|&id| &self.categories[id])
    }
}
