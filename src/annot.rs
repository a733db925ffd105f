//! Text opinion annotators.
//!
//! An annotator proposes candidate [`TextOpinion`]s for one parsed document.
//! Two kinds exist:
//!
//! - [`PredefinedAnnotator`] reads the document's gold relation annotations,
//!   resolving type tokens through a label formatter. Tokens the formatter
//!   does not list are out of the target label set and skipped.
//! - [`AlgoBasedAnnotator`] runs a pairing algorithm over entity mentions and
//!   assigns a constant label: the no-label annotator that supplies negative
//!   pairs for training.

use crate::document::EntityMention;
use crate::labels::{Label, LabelFormatter};
use crate::opinion::TextOpinion;
use crate::synonyms::SynonymsCollection;
use crate::text::ParsedDocument;
use crate::{Error, Result};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

/// Proposes candidate opinions for a document.
pub trait TextOpinionAnnotator<L: Label> {
    /// Annotator name, for logging.
    fn name(&self) -> &'static str;

    /// Produce candidate opinions, in a deterministic order.
    fn annotate(&self, parsed: &ParsedDocument) -> Result<Vec<TextOpinion<L>>>;
}

/// Gold annotator over the document's relation annotations.
#[derive(Debug)]
pub struct PredefinedAnnotator<L, F> {
    formatter: F,
    _label: PhantomData<L>,
}

impl<L: Label, F: LabelFormatter<L>> PredefinedAnnotator<L, F> {
    /// Create an annotator resolving tokens through `formatter`.
    pub fn new(formatter: F) -> Self {
        PredefinedAnnotator {
            formatter,
            _label: PhantomData,
        }
    }
}

impl<L: Label, F: LabelFormatter<L>> TextOpinionAnnotator<L> for PredefinedAnnotator<L, F> {
    fn name(&self) -> &'static str {
        "predefined"
    }

    fn annotate(&self, parsed: &ParsedDocument) -> Result<Vec<TextOpinion<L>>> {
        let doc = parsed.document();
        let mut opinions = Vec::new();

        for relation in &doc.relations {
            // Tokens outside the formatter table are not part of the target
            // label set (e.g. structural relations in a sentiment pipeline).
            let Some(label) = self.formatter.try_format(&relation.type_token) else {
                continue;
            };
            let source = doc.entity(&relation.source_id).ok_or_else(|| {
                Error::parse(format!(
                    "relation {} in {} references unknown mention {}",
                    relation.id, doc.id, relation.source_id
                ))
            })?;
            let target = doc.entity(&relation.target_id).ok_or_else(|| {
                Error::parse(format!(
                    "relation {} in {} references unknown mention {}",
                    relation.id, doc.id, relation.target_id
                ))
            })?;

            opinions.push(TextOpinion {
                source_id: source.id.clone(),
                target_id: target.id.clone(),
                source_value: source.text.clone(),
                target_value: target.text.clone(),
                label,
            });
        }

        Ok(opinions)
    }
}

/// Windowed entity-pair generation.
///
/// Produces every ordered pair of distinct mentions lying within
/// `dist_in_sents` sentences and `dist_in_terms_bound` terms of each other.
/// Identity is the corpus-assigned mention id; mentions that could not be
/// located in the text are left out.
#[derive(Debug, Clone, Copy)]
pub struct PairBasedAlgorithm {
    dist_in_sents: usize,
    dist_in_terms_bound: usize,
}

impl PairBasedAlgorithm {
    /// Create an algorithm. `dist_in_terms_bound` must be at least 1.
    pub fn new(dist_in_sents: usize, dist_in_terms_bound: usize) -> Result<Self> {
        if dist_in_terms_bound == 0 {
            return Err(Error::invalid_config(
                "dist_in_terms_bound must be at least 1",
            ));
        }
        Ok(PairBasedAlgorithm {
            dist_in_sents,
            dist_in_terms_bound,
        })
    }

    /// Ordered mention pairs within the window.
    pub fn pairs<'a>(
        &self,
        parsed: &'a ParsedDocument,
    ) -> Vec<(&'a EntityMention, &'a EntityMention)> {
        let entities = &parsed.document().entities;
        let mut out = Vec::new();

        for source in entities {
            for target in entities {
                if source.id == target.id {
                    continue;
                }
                let Some(sent_dist) = parsed.sentence_distance(&source.id, &target.id) else {
                    continue;
                };
                if sent_dist > self.dist_in_sents {
                    continue;
                }
                let Some(term_dist) = parsed.term_distance(&source.id, &target.id) else {
                    continue;
                };
                if term_dist > self.dist_in_terms_bound {
                    continue;
                }
                out.push((source, target));
            }
        }

        out
    }
}

/// No-label annotator: pairing algorithm plus a constant label.
///
/// Registers unseen surface forms into the synonym collection on first use;
/// the collection is shared only within one pipeline build, never across
/// concurrent runs.
pub struct AlgoBasedAnnotator<L> {
    algo: PairBasedAlgorithm,
    label: L,
    synonyms: Rc<RefCell<SynonymsCollection>>,
}

impl<L: Label> AlgoBasedAnnotator<L> {
    /// Create an annotator assigning `label` to every generated pair.
    pub fn new(
        algo: PairBasedAlgorithm,
        label: L,
        synonyms: Rc<RefCell<SynonymsCollection>>,
    ) -> Self {
        AlgoBasedAnnotator {
            algo,
            label,
            synonyms,
        }
    }

    /// The synonym collection this annotator registers into.
    #[must_use]
    pub fn synonyms(&self) -> Rc<RefCell<SynonymsCollection>> {
        Rc::clone(&self.synonyms)
    }
}

impl<L: Label> TextOpinionAnnotator<L> for AlgoBasedAnnotator<L> {
    fn name(&self) -> &'static str {
        "nolabel"
    }

    fn annotate(&self, parsed: &ParsedDocument) -> Result<Vec<TextOpinion<L>>> {
        let mut synonyms = self.synonyms.borrow_mut();
        let mut opinions = Vec::new();

        for (source, target) in self.algo.pairs(parsed) {
            let source_group = synonyms.existing_or_register(&source.text)?;
            let target_group = synonyms.existing_or_register(&target.text)?;
            // Co-referential mentions are one opinion end, not a pair.
            if source_group == target_group {
                continue;
            }
            opinions.push(TextOpinion {
                source_id: source.id.clone(),
                target_id: target.id.clone(),
                source_value: source.text.clone(),
                target_value: target.text.clone(),
                label: self.label.clone(),
            });
        }

        Ok(opinions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::sources::sentinerel::{SentimentLabel, SentimentLabelFormatter};
    use crate::text::{SimpleTextProcessor, TextProcessor};
    use std::sync::Arc;

    fn parsed(text: &str, ann: &str) -> ParsedDocument {
        let doc = Document::from_brat("d", text, ann).unwrap();
        SimpleTextProcessor::new().process(Arc::new(doc)).unwrap()
    }

    #[test]
    fn predefined_resolves_gold_labels() {
        let parsed = parsed(
            "Путин хвалит Собянина",
            "T1\tPERSON 0 5\tПутин\nT2\tPERSON 13 21\tСобянина\n\
             R1\tPOSITIVE_TO Arg1:T1 Arg2:T2\n",
        );
        let annot = PredefinedAnnotator::new(SentimentLabelFormatter);
        let opinions = annot.annotate(&parsed).unwrap();
        assert_eq!(opinions.len(), 1);
        assert_eq!(opinions[0].label, SentimentLabel::Positive);
        assert_eq!(opinions[0].source_id, "T1");
    }

    #[test]
    fn predefined_skips_out_of_scope_tokens() {
        let parsed = parsed(
            "Путин хвалит Собянина",
            "T1\tPERSON 0 5\tПутин\nT2\tPERSON 13 21\tСобянина\n\
             R1\tWORKS_AS Arg1:T1 Arg2:T2\n",
        );
        let annot = PredefinedAnnotator::new(SentimentLabelFormatter);
        assert!(annot.annotate(&parsed).unwrap().is_empty());
    }

    #[test]
    fn predefined_rejects_dangling_relation_endpoints() {
        let parsed = parsed(
            "Путин хвалит Собянина",
            "T1\tPERSON 0 5\tПутин\nR1\tPOSITIVE_TO Arg1:T1 Arg2:T9\n",
        );
        let annot = PredefinedAnnotator::new(SentimentLabelFormatter);
        let err = annot.annotate(&parsed).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn pair_algorithm_respects_term_bound() {
        let parsed = parsed(
            "Путин слово слово слово Собянин",
            "T1\tPERSON 0 5\tПутин\nT2\tPERSON 24 31\tСобянин\n",
        );
        let tight = PairBasedAlgorithm::new(0, 2).unwrap();
        assert!(tight.pairs(&parsed).is_empty());

        let wide = PairBasedAlgorithm::new(0, 10).unwrap();
        assert_eq!(wide.pairs(&parsed).len(), 2); // both directions
    }

    #[test]
    fn pair_algorithm_respects_sentence_window() {
        let parsed = parsed(
            "Путин здесь.\nСобянин там.",
            "T1\tPERSON 0 5\tПутин\nT2\tPERSON 13 20\tСобянин\n",
        );
        let same_sentence = PairBasedAlgorithm::new(0, 50).unwrap();
        assert!(same_sentence.pairs(&parsed).is_empty());

        let adjacent = PairBasedAlgorithm::new(1, 50).unwrap();
        assert_eq!(adjacent.pairs(&parsed).len(), 2);
    }

    #[test]
    fn zero_term_bound_is_rejected() {
        assert!(PairBasedAlgorithm::new(0, 0).is_err());
    }

    #[test]
    fn nolabel_annotator_registers_surface_forms() {
        let parsed = parsed(
            "Путин хвалит Собянина",
            "T1\tPERSON 0 5\tПутин\nT2\tPERSON 13 21\tСобянина\n",
        );
        let synonyms = Rc::new(RefCell::new(SynonymsCollection::stemmer_based()));
        let annot = AlgoBasedAnnotator::new(
            PairBasedAlgorithm::new(0, 50).unwrap(),
            SentimentLabel::NoLabel,
            Rc::clone(&synonyms),
        );

        let opinions = annot.annotate(&parsed).unwrap();
        assert_eq!(opinions.len(), 2);
        assert_eq!(synonyms.borrow().group_count(), 2);
    }

    #[test]
    fn nolabel_annotator_skips_coreferential_pairs() {
        let parsed = parsed(
            "Путин и Путина видели",
            "T1\tPERSON 0 5\tПутин\nT2\tPERSON 8 14\tПутина\n",
        );
        let synonyms = Rc::new(RefCell::new(SynonymsCollection::stemmer_based()));
        let annot = AlgoBasedAnnotator::new(
            PairBasedAlgorithm::new(0, 50).unwrap(),
            SentimentLabel::NoLabel,
            synonyms,
        );
        assert!(annot.annotate(&parsed).unwrap().is_empty());
    }
}
