//! Text processing: sentence segmentation and term indexing.
//!
//! Pipelines never look at raw text directly; they consume a
//! [`ParsedDocument`], which fixes a term (token) index for every entity
//! mention. Term and sentence distances between mentions, the quantities the
//! pairing algorithm and the distance filter are defined over, are computed
//! from those indices.

use crate::document::{Document, EntityMention};
use crate::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Position of an entity mention in the parsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermPosition {
    /// Sentence index within the document.
    pub sentence: usize,
    /// Term index within the sentence.
    pub term: usize,
    /// Term index within the whole document.
    pub global_term: usize,
}

/// A term (token) span, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    /// Start character offset.
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
}

/// A segmented sentence.
#[derive(Debug, Clone)]
pub struct Sentence {
    /// Start character offset in the document text.
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
    /// Terms of the sentence, in order.
    pub terms: Vec<Term>,
}

/// A document together with its segmentation and mention positions.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    doc: Arc<Document>,
    sentences: Vec<Sentence>,
    positions: HashMap<String, TermPosition>,
}

impl ParsedDocument {
    /// The underlying document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Segmented sentences.
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Position of a mention, if it could be located in the text.
    #[must_use]
    pub fn position(&self, mention_id: &str) -> Option<TermPosition> {
        self.positions.get(mention_id).copied()
    }

    /// Mention lookup by corpus-assigned id.
    #[must_use]
    pub fn entity(&self, mention_id: &str) -> Option<&EntityMention> {
        self.doc.entity(mention_id)
    }

    /// Term distance between two mentions, in document-global terms.
    ///
    /// `None` when either mention could not be located in the text.
    #[must_use]
    pub fn term_distance(&self, a: &str, b: &str) -> Option<usize> {
        let pa = self.position(a)?;
        let pb = self.position(b)?;
        Some(pa.global_term.abs_diff(pb.global_term))
    }

    /// Sentence distance between two mentions.
    #[must_use]
    pub fn sentence_distance(&self, a: &str, b: &str) -> Option<usize> {
        let pa = self.position(a)?;
        let pb = self.position(b)?;
        Some(pa.sentence.abs_diff(pb.sentence))
    }
}

/// How raw document text becomes a [`ParsedDocument`].
pub trait TextProcessor {
    /// Segment and index a document.
    fn process(&self, doc: Arc<Document>) -> Result<ParsedDocument>;
}

/// Whitespace tokenizer with newline/punctuation sentence splitting.
///
/// Sentences end at a newline or at `.` `!` `?` followed by whitespace; terms
/// are maximal non-whitespace runs. This matches how the corpus releases lay
/// out one report per file with sentence-per-line formatting.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleTextProcessor;

impl SimpleTextProcessor {
    /// Create a processor.
    #[must_use]
    pub fn new() -> Self {
        SimpleTextProcessor
    }
}

impl TextProcessor for SimpleTextProcessor {
    fn process(&self, doc: Arc<Document>) -> Result<ParsedDocument> {
        let sentences = segment(&doc.text);

        let mut positions = HashMap::new();
        let mut global = 0usize;
        for (si, sentence) in sentences.iter().enumerate() {
            for (ti, term) in sentence.terms.iter().enumerate() {
                for mention in &doc.entities {
                    if mention.start >= term.start && mention.start < term.end {
                        positions.entry(mention.id.clone()).or_insert(TermPosition {
                            sentence: si,
                            term: ti,
                            global_term: global + ti,
                        });
                    }
                }
            }
            global += sentence.terms.len();
        }

        for mention in &doc.entities {
            if !positions.contains_key(&mention.id) {
                log::debug!(
                    "mention {} in {} not locatable at offset {}",
                    mention.id,
                    doc.id,
                    mention.start
                );
            }
        }

        Ok(ParsedDocument {
            doc,
            sentences,
            positions,
        })
    }
}

/// Split text into sentences of terms, tracking character offsets.
fn segment(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut terms = Vec::new();
    let mut sentence_start = 0usize;
    let mut term_start: Option<usize> = None;
    let mut boundary_pending = false;

    let mut offset = 0usize;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if let Some(start) = term_start.take() {
                terms.push(Term { start, end: offset });
            }
            if boundary_pending || ch == '\n' {
                if !terms.is_empty() {
                    sentences.push(Sentence {
                        start: sentence_start,
                        end: offset,
                        terms: std::mem::take(&mut terms),
                    });
                }
                sentence_start = offset + 1;
                boundary_pending = false;
            }
        } else {
            if term_start.is_none() {
                term_start = Some(offset);
            }
            boundary_pending = matches!(ch, '.' | '!' | '?');
        }
        offset += 1;
    }
    if let Some(start) = term_start {
        terms.push(Term { start, end: offset });
    }
    if !terms.is_empty() {
        sentences.push(Sentence {
            start: sentence_start,
            end: offset,
            terms,
        });
    }

    sentences
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn terms_are_ordered_and_disjoint(text in "[ а-яa-z.!?\n]{0,80}") {
            let sentences = segment(&text);
            let mut last_end = 0usize;
            for sentence in &sentences {
                for term in &sentence.terms {
                    prop_assert!(term.start < term.end);
                    prop_assert!(term.start >= last_end);
                    last_end = term.end;
                }
            }
        }

        #[test]
        fn term_count_matches_whitespace_split(text in "[а-яa-z ]{0,80}") {
            let sentences = segment(&text);
            let terms: usize = sentences.iter().map(|s| s.terms.len()).sum();
            prop_assert_eq!(terms, text.split_whitespace().count());
        }

        #[test]
        fn offsets_stay_within_text(text in "[ а-яa-z.!?\n]{0,80}") {
            let char_count = text.chars().count();
            for sentence in segment(&text) {
                for term in sentence.terms {
                    prop_assert!(term.end <= char_count);
                }
            }
        }
    }
}
