//! Synonym grouping of entity surface forms.
//!
//! Co-referential surface forms ("Путин", "Путина", "В. Путин") must act as
//! one opinion end, so every opinion end is resolved to a synonym group id.
//! Grouping is an explicitly owned registry: pipelines that auto-annotate
//! no-label pairs register unseen surface forms on first use, which makes the
//! collection mutable state scoped to one pipeline build. Do not share one
//! collection across concurrent runs.

use crate::{Error, Result};
use std::collections::HashMap;

/// Synonym group identifier.
pub type GroupId = u32;

/// Word normalizer used to key synonym groups.
pub trait Stemmer {
    /// Normalize a single word to its stem.
    fn stem(&self, word: &str) -> String;
}

/// Suffix-stripping stemmer for Russian surface forms.
///
/// Lowercases and strips the most common inflectional endings. This stands in
/// for a full lemmatizer: the only requirement here is that inflected forms
/// of the same mention collapse to one key.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuStemmer;

/// Inflectional endings, longest first so the longest match wins.
const RU_SUFFIXES: &[&str] = &[
    "иями", "ями", "ами", "иях", "иям", "его", "ому", "ему", "ого", "ыми", "ими", "ией", "ах",
    "ях", "ам", "ям", "ом", "ем", "ой", "ей", "ов", "ев", "ий", "ый", "ая", "яя", "ое", "ее",
    "ие", "ые", "ью", "ия", "ь", "а", "я", "о", "е", "у", "ю", "ы", "и",
];

impl Stemmer for RuStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let chars: Vec<char> = lower.chars().collect();
        // Short words carry no strippable ending.
        if chars.len() <= 3 {
            return lower;
        }
        for suffix in RU_SUFFIXES {
            let suffix_len = suffix.chars().count();
            if chars.len() > suffix_len + 2 && lower.ends_with(suffix) {
                return chars[..chars.len() - suffix_len].iter().collect();
            }
        }
        lower
    }
}

/// A registry mapping normalized surface forms to synonym group ids.
pub struct SynonymsCollection {
    stemmer: Box<dyn Stemmer>,
    index: HashMap<String, GroupId>,
    groups: Vec<Vec<String>>,
    read_only: bool,
}

impl std::fmt::Debug for SynonymsCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynonymsCollection")
            .field("groups", &self.groups.len())
            .field("read_only", &self.read_only)
            .finish()
    }
}

impl SynonymsCollection {
    /// Create an empty, mutable collection backed by the given stemmer.
    pub fn new(stemmer: impl Stemmer + 'static) -> Self {
        SynonymsCollection {
            stemmer: Box::new(stemmer),
            index: HashMap::new(),
            groups: Vec::new(),
            read_only: false,
        }
    }

    /// Create a stemmer-backed collection for Russian text.
    #[must_use]
    pub fn stemmer_based() -> Self {
        SynonymsCollection::new(RuStemmer)
    }

    /// Freeze the collection: lookups only, registration becomes an error.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Number of synonym groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Normalization key for a (possibly multi-word) surface form.
    fn key(&self, value: &str) -> String {
        value
            .split_whitespace()
            .map(|w| self.stemmer.stem(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Group id of a surface form, if registered.
    #[must_use]
    pub fn group_id(&self, value: &str) -> Option<GroupId> {
        self.index.get(&self.key(value)).copied()
    }

    /// Whether the surface form belongs to a registered group.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.group_id(value).is_some()
    }

    /// Register a surface form into a fresh group.
    ///
    /// Errors on a read-only collection; registering an already known form
    /// returns its existing group.
    pub fn register(&mut self, value: &str) -> Result<GroupId> {
        let key = self.key(value);
        if let Some(&id) = self.index.get(&key) {
            return Ok(id);
        }
        if self.read_only {
            return Err(Error::MissingSynonym(value.to_string()));
        }
        let id = self.groups.len() as GroupId;
        self.groups.push(vec![value.to_string()]);
        self.index.insert(key, id);
        Ok(id)
    }

    /// Group id of a surface form, registering it on first use.
    ///
    /// This is the register-on-first-use semantics the no-label annotator
    /// relies on; on a read-only collection an unknown form is
    /// [`Error::MissingSynonym`].
    pub fn existing_or_register(&mut self, value: &str) -> Result<GroupId> {
        match self.group_id(value) {
            Some(id) => Ok(id),
            None => self.register(value),
        }
    }

    /// Add a surface form to an existing group.
    pub fn add_to_group(&mut self, value: &str, group: GroupId) -> Result<()> {
        if self.read_only {
            return Err(Error::MissingSynonym(value.to_string()));
        }
        let key = self.key(value);
        let slot = self
            .groups
            .get_mut(group as usize)
            .ok_or_else(|| Error::invalid_config(format!("no synonym group {group}")))?;
        slot.push(value.to_string());
        self.index.insert(key, group);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflected_forms_share_a_group() {
        let mut syn = SynonymsCollection::stemmer_based();
        let a = syn.existing_or_register("Собянин").unwrap();
        let b = syn.existing_or_register("Собянина").unwrap();
        assert_eq!(a, b);
        assert_eq!(syn.group_count(), 1);
    }

    #[test]
    fn distinct_forms_get_distinct_groups() {
        let mut syn = SynonymsCollection::stemmer_based();
        let a = syn.existing_or_register("Путин").unwrap();
        let b = syn.existing_or_register("Собянин").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn read_only_rejects_unknown_forms() {
        let mut syn = SynonymsCollection::stemmer_based();
        syn.register("Путин").unwrap();
        syn.set_read_only(true);

        assert!(syn.existing_or_register("Путин").is_ok());
        let err = syn.existing_or_register("Навальный").unwrap_err();
        assert!(matches!(err, crate::Error::MissingSynonym(_)));
    }

    #[test]
    fn grouping_is_case_insensitive() {
        let mut syn = SynonymsCollection::stemmer_based();
        let a = syn.existing_or_register("МОСКВА").unwrap();
        let b = syn.existing_or_register("Москва").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn explicit_group_membership() {
        let mut syn = SynonymsCollection::stemmer_based();
        let g = syn.register("РФ").unwrap();
        syn.add_to_group("Россия", g).unwrap();
        assert_eq!(syn.group_id("Россия"), Some(g));
    }

    #[test]
    fn multiword_forms_are_keyed_per_word() {
        let mut syn = SynonymsCollection::stemmer_based();
        let a = syn.existing_or_register("Владимир Путин").unwrap();
        let b = syn.existing_or_register("Владимира Путина").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn short_words_are_not_stemmed() {
        let s = RuStemmer;
        assert_eq!(s.stem("РФ"), "рф");
        assert_eq!(s.stem("мэр"), "мэр");
    }
}
