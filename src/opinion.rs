//! Text opinions and the synonym-keyed opinion collection.

use crate::labels::Label;
use crate::synonyms::{GroupId, SynonymsCollection};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A labeled candidate relation between two entity mentions of one document.
///
/// Mention ids are the corpus-assigned identifiers; surface forms are carried
/// along because synonym grouping is defined over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOpinion<L: Label> {
    /// Source mention id.
    pub source_id: String,
    /// Target mention id.
    pub target_id: String,
    /// Source surface form.
    pub source_value: String,
    /// Target surface form.
    pub target_value: String,
    /// Resolved label.
    pub label: L,
}

/// What to do when an opinion end has no synonym group yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEnds {
    /// Register the surface form into a fresh group (mutates the collection).
    Register,
    /// Reject the opinion with [`Error::MissingSynonym`].
    Reject,
}

/// A set of opinions keyed by synonym-grouped entity identity.
///
/// One fresh instance per annotator per document. Insertion enforces the
/// no-duplicate invariant: two opinions whose ends resolve to the same
/// ordered group pair cannot coexist.
#[derive(Debug)]
pub struct OpinionCollection<L: Label> {
    opinions: Vec<TextOpinion<L>>,
    keys: HashSet<(GroupId, GroupId)>,
    error_on_duplicates: bool,
    missing_ends: MissingEnds,
}

impl<L: Label> OpinionCollection<L> {
    /// Create a collection.
    ///
    /// `error_on_duplicates` selects between failing (`true`) and silently
    /// skipping (`false`) when a group pair is inserted twice.
    #[must_use]
    pub fn new(error_on_duplicates: bool, missing_ends: MissingEnds) -> Self {
        OpinionCollection {
            opinions: Vec::new(),
            keys: HashSet::new(),
            error_on_duplicates,
            missing_ends,
        }
    }

    /// Resolve the synonym-group key of an opinion without inserting it.
    pub fn key_of(
        &self,
        opinion: &TextOpinion<L>,
        synonyms: &mut SynonymsCollection,
    ) -> Result<(GroupId, GroupId)> {
        let resolve = |synonyms: &mut SynonymsCollection, value: &str| match self.missing_ends {
            MissingEnds::Register => synonyms.existing_or_register(value),
            MissingEnds::Reject => synonyms
                .group_id(value)
                .ok_or_else(|| Error::MissingSynonym(value.to_string())),
        };
        let source = resolve(synonyms, &opinion.source_value)?;
        let target = resolve(synonyms, &opinion.target_value)?;
        Ok((source, target))
    }

    /// Insert an opinion, resolving its ends through `synonyms`.
    ///
    /// Returns `true` if the opinion was added, `false` if its key was
    /// already present and duplicates are tolerated.
    pub fn add(
        &mut self,
        opinion: TextOpinion<L>,
        synonyms: &mut SynonymsCollection,
    ) -> Result<bool> {
        let key = self.key_of(&opinion, synonyms)?;
        if self.keys.contains(&key) {
            if self.error_on_duplicates {
                return Err(Error::DuplicateOpinion(key.0, key.1));
            }
            return Ok(false);
        }
        self.keys.insert(key);
        self.opinions.push(opinion);
        Ok(true)
    }

    /// Whether an ordered group pair is already claimed.
    #[must_use]
    pub fn contains_key(&self, key: (GroupId, GroupId)) -> bool {
        self.keys.contains(&key)
    }

    /// Number of collected opinions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.opinions.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opinions.is_empty()
    }

    /// Iterate over collected opinions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TextOpinion<L>> {
        self.opinions.iter()
    }

    /// Consume the collection, yielding opinions in insertion order.
    #[must_use]
    pub fn into_opinions(self) -> Vec<TextOpinion<L>> {
        self.opinions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::sentinerel::SentimentLabel;

    fn opinion(src: &str, dst: &str, label: SentimentLabel) -> TextOpinion<SentimentLabel> {
        TextOpinion {
            source_id: "T1".into(),
            target_id: "T2".into(),
            source_value: src.into(),
            target_value: dst.into(),
            label,
        }
    }

    #[test]
    fn duplicate_group_pair_is_an_error_when_strict() {
        let mut syn = SynonymsCollection::stemmer_based();
        let mut coll = OpinionCollection::new(true, MissingEnds::Register);

        coll.add(opinion("Путин", "Собянин", SentimentLabel::Positive), &mut syn)
            .unwrap();
        // Inflected forms resolve to the same group pair.
        let err = coll
            .add(opinion("Путина", "Собянина", SentimentLabel::Negative), &mut syn)
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateOpinion(_, _)));
    }

    #[test]
    fn duplicate_group_pair_is_skipped_when_tolerant() {
        let mut syn = SynonymsCollection::stemmer_based();
        let mut coll = OpinionCollection::new(false, MissingEnds::Register);

        assert!(coll
            .add(opinion("Путин", "Собянин", SentimentLabel::Positive), &mut syn)
            .unwrap());
        assert!(!coll
            .add(opinion("Путин", "Собянин", SentimentLabel::Negative), &mut syn)
            .unwrap());
        assert_eq!(coll.len(), 1);
    }

    #[test]
    fn direction_matters() {
        let mut syn = SynonymsCollection::stemmer_based();
        let mut coll = OpinionCollection::new(true, MissingEnds::Register);

        coll.add(opinion("Путин", "Собянин", SentimentLabel::Positive), &mut syn)
            .unwrap();
        coll.add(opinion("Собянин", "Путин", SentimentLabel::Positive), &mut syn)
            .unwrap();
        assert_eq!(coll.len(), 2);
    }

    #[test]
    fn rejecting_missing_ends_needs_preregistered_groups() {
        let mut syn = SynonymsCollection::stemmer_based();
        let mut coll = OpinionCollection::new(true, MissingEnds::Reject);

        let err = coll
            .add(opinion("Путин", "Собянин", SentimentLabel::Positive), &mut syn)
            .unwrap_err();
        assert!(matches!(err, Error::MissingSynonym(_)));

        syn.register("Путин").unwrap();
        syn.register("Собянин").unwrap();
        assert!(coll
            .add(opinion("Путин", "Собянин", SentimentLabel::Positive), &mut syn)
            .unwrap());
    }
}
