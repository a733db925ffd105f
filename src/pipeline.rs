//! The generic text-opinion extraction pipeline.
//!
//! A pipeline wires a document provider, a text processor, an ordered list of
//! annotators and a filter chain. Running it over a set of document ids is a
//! single synchronous pass: fetch, parse, annotate, filter, collect. No
//! retries, no partial results; the first error aborts the run.

use crate::annot::TextOpinionAnnotator;
use crate::document::DocId;
use crate::filters::{passes_all, TextOpinionFilter};
use crate::labels::Label;
use crate::opinion::{MissingEnds, OpinionCollection, TextOpinion};
use crate::provider::DocProvider;
use crate::synonyms::SynonymsCollection;
use crate::text::TextProcessor;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Split role a pipeline serves.
///
/// A closed set: every build yields exactly these four pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataType {
    /// Training split: gold plus auto-annotated no-label pairs.
    Train,
    /// Test split: no-label pairs only (no gold at inference time).
    Test,
    /// Evaluation reference: gold only.
    Etalon,
    /// Development split: same composition as Train.
    Dev,
}

impl DataType {
    /// All split roles, in build order.
    #[must_use]
    pub fn all() -> [DataType; 4] {
        [DataType::Train, DataType::Test, DataType::Etalon, DataType::Dev]
    }

    /// Lowercase role name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Train => "train",
            DataType::Test => "test",
            DataType::Etalon => "etalon",
            DataType::Dev => "dev",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opinions extracted from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentOpinions<L: Label> {
    /// Source document id.
    pub doc_id: DocId,
    /// Surviving opinions, in annotator order.
    pub opinions: Vec<TextOpinion<L>>,
}

/// A wired, runnable opinion extraction pipeline.
///
/// Annotator order matters: a later annotator's candidate is dropped when its
/// synonym-group pair was already claimed by an earlier one, so no-label
/// pairs never shadow gold annotations.
pub struct OpinionPipeline<L: Label> {
    provider: Rc<dyn DocProvider>,
    processor: Rc<dyn TextProcessor>,
    annotators: Vec<Rc<dyn TextOpinionAnnotator<L>>>,
    filters: Vec<Rc<dyn TextOpinionFilter>>,
    synonyms: Rc<RefCell<SynonymsCollection>>,
}

impl<L: Label> OpinionPipeline<L> {
    /// Wire a pipeline from its parts.
    pub fn new(
        provider: Rc<dyn DocProvider>,
        processor: Rc<dyn TextProcessor>,
        annotators: Vec<Rc<dyn TextOpinionAnnotator<L>>>,
        filters: Vec<Rc<dyn TextOpinionFilter>>,
        synonyms: Rc<RefCell<SynonymsCollection>>,
    ) -> Self {
        OpinionPipeline {
            provider,
            processor,
            annotators,
            filters,
            synonyms,
        }
    }

    /// Number of annotators wired into this pipeline.
    #[must_use]
    pub fn annotator_count(&self) -> usize {
        self.annotators.len()
    }

    /// Run over the given documents, in order.
    pub fn run(&self, doc_ids: &[DocId]) -> Result<Vec<DocumentOpinions<L>>> {
        let mut results = Vec::with_capacity(doc_ids.len());
        for id in doc_ids {
            results.push(self.run_document(id)?);
        }
        Ok(results)
    }

    /// Run over a single document.
    pub fn run_document(&self, id: &DocId) -> Result<DocumentOpinions<L>> {
        let doc = self.provider.by_id(id)?;
        let parsed = self.processor.process(doc)?;

        // Group pairs claimed by earlier annotators, filtered or not:
        // a gold pair excluded by a filter must not reappear as no-label.
        let mut claimed = HashSet::new();
        let mut kept = Vec::new();

        for annotator in &self.annotators {
            // One fresh collection per annotator per document. Within one
            // annotator a repeated group pair is a duplicate annotation and
            // aborts the run.
            let mut collection = OpinionCollection::new(true, MissingEnds::Register);
            let candidates = annotator.annotate(&parsed)?;
            log::debug!(
                "{}: annotator {} proposed {} candidates",
                id,
                annotator.name(),
                candidates.len()
            );

            let mut new_keys = Vec::new();
            for opinion in candidates {
                let key = {
                    let mut synonyms = self.synonyms.borrow_mut();
                    collection.key_of(&opinion, &mut synonyms)?
                };
                if claimed.contains(&key) {
                    continue;
                }
                {
                    let mut synonyms = self.synonyms.borrow_mut();
                    collection.add(opinion, &mut synonyms)?;
                }
                new_keys.push(key);
            }
            claimed.extend(new_keys);

            for opinion in collection.into_opinions() {
                if passes_all(&self.filters, &opinion.source_id, &opinion.target_id, &parsed) {
                    kept.push(opinion);
                }
            }
        }

        log::info!("{}: extracted {} opinions", id, kept.len());
        Ok(DocumentOpinions {
            doc_id: id.clone(),
            opinions: kept,
        })
    }
}
