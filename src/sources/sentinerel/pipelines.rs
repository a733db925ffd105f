//! The SentiNEREL text-opinion extraction pipeline factory.
//!
//! One `build` call produces four pipelines, one per split role:
//!
//! | Split  | Annotators              |
//! |--------|-------------------------|
//! | Train  | predefined + no-label   |
//! | Test   | no-label only           |
//! | Etalon | predefined only         |
//! | Dev    | predefined + no-label   |
//!
//! All four share one document provider, one filter chain (built-ins first,
//! caller extras appended after) and one synonym collection; the collection
//! is mutable pipeline-build-scoped state and must not be shared across
//! concurrent runs.

use crate::annot::{AlgoBasedAnnotator, PairBasedAlgorithm, PredefinedAnnotator, TextOpinionAnnotator};
use crate::filters::{DistanceLimitedFilter, TextOpinionFilter};
use crate::labels::{Label, LabelFormatter};
use crate::pipeline::{DataType, OpinionPipeline};
use crate::provider::{DocProvider, FileDocProvider};
use crate::synonyms::SynonymsCollection;
use crate::text::{SimpleTextProcessor, TextProcessor};
use crate::{Error, Result};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use super::io::{read_dataset_split, DataFolding, SentiNerelVersion};
use super::labels::{SentimentLabel, SentimentLabelFormatter};
use super::prof_filter::ProfessionAsCharacteristicFilter;

/// Where the factory takes documents from.
pub enum DocSource {
    /// Resolve the listing and fold split from an on-disk release. The
    /// returned [`ExtractionPipelines::folding`] is `Some`.
    Release {
        /// Data root holding the release directory.
        root: PathBuf,
        /// Release version.
        version: SentiNerelVersion,
    },
    /// Use a caller-supplied provider; fold resolution is skipped and
    /// [`ExtractionPipelines::folding`] is `None`.
    Provider(Rc<dyn DocProvider>),
}

/// Factory parameters beyond the document source.
pub struct PipelineConfig<L: Label, F> {
    /// Formatter resolving gold relation tokens; also delimits the label set.
    pub label_formatter: F,
    /// Constant label for auto-annotated pairs.
    pub no_label: L,
    /// Term-distance bound for candidate pairs and the distance filter.
    pub terms_per_context: usize,
    /// Sentence window for candidate pairs.
    pub sentence_distance: usize,
    /// Cap on the total resolved document count (release source only).
    pub docs_limit: Option<usize>,
    /// Filters appended after the two built-ins, in the given order.
    pub extra_filters: Vec<Rc<dyn TextOpinionFilter>>,
    /// Text processor; defaults to [`SimpleTextProcessor`].
    pub text_processor: Option<Rc<dyn TextProcessor>>,
    /// Synonym collection shared by the build; defaults to a fresh
    /// stemmer-backed one.
    pub synonyms: Option<Rc<RefCell<SynonymsCollection>>>,
}

impl Default for PipelineConfig<SentimentLabel, SentimentLabelFormatter> {
    fn default() -> Self {
        PipelineConfig {
            label_formatter: SentimentLabelFormatter,
            no_label: SentimentLabel::NoLabel,
            terms_per_context: 50,
            sentence_distance: 0,
            docs_limit: None,
            extra_filters: Vec::new(),
            text_processor: None,
            synonyms: None,
        }
    }
}

/// The four pipelines of one build, plus the fold split when the factory
/// resolved the document set itself.
pub struct ExtractionPipelines<L: Label> {
    train: OpinionPipeline<L>,
    test: OpinionPipeline<L>,
    etalon: OpinionPipeline<L>,
    dev: OpinionPipeline<L>,
    /// Fold split resolved from the release; `None` with a caller-supplied
    /// provider.
    pub folding: Option<DataFolding>,
}

impl<L: Label> std::fmt::Debug for ExtractionPipelines<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionPipelines")
            .field("folding", &self.folding)
            .finish_non_exhaustive()
    }
}

impl<L: Label> ExtractionPipelines<L> {
    /// The pipeline serving a split role.
    #[must_use]
    pub fn get(&self, split: DataType) -> &OpinionPipeline<L> {
        match split {
            DataType::Train => &self.train,
            DataType::Test => &self.test,
            DataType::Etalon => &self.etalon,
            DataType::Dev => &self.dev,
        }
    }

    /// Iterate over all split roles and their pipelines.
    pub fn iter(&self) -> impl Iterator<Item = (DataType, &OpinionPipeline<L>)> {
        DataType::all().into_iter().map(move |d| (d, self.get(d)))
    }
}

/// Build the four SentiNEREL extraction pipelines.
///
/// Configuration is validated before any I/O: a bad `terms_per_context`
/// never touches the disk. Failures past that point propagate unmodified: a
/// missing release directory fails the build, missing files and malformed
/// documents fail the pipeline run.
pub fn create_text_opinion_extraction_pipeline<L, F>(
    source: DocSource,
    config: PipelineConfig<L, F>,
) -> Result<ExtractionPipelines<L>>
where
    L: Label + 'static,
    F: LabelFormatter<L> + 'static,
{
    if config.terms_per_context == 0 {
        return Err(Error::invalid_config("terms_per_context must be at least 1"));
    }

    let (provider, folding): (Rc<dyn DocProvider>, Option<DataFolding>) = match source {
        DocSource::Release { root, version } => {
            let (filenames, folding) =
                read_dataset_split(&root, version, config.docs_limit)?;
            (Rc::new(FileDocProvider::new(filenames)), Some(folding))
        }
        DocSource::Provider(provider) => (provider, None),
    };

    let processor: Rc<dyn TextProcessor> = config
        .text_processor
        .unwrap_or_else(|| Rc::new(SimpleTextProcessor::new()));
    let synonyms = config
        .synonyms
        .unwrap_or_else(|| Rc::new(RefCell::new(SynonymsCollection::stemmer_based())));

    // Built-ins first; caller extras can only narrow the result further.
    let mut filters: Vec<Rc<dyn TextOpinionFilter>> = vec![
        Rc::new(ProfessionAsCharacteristicFilter),
        Rc::new(DistanceLimitedFilter::new(config.terms_per_context)),
    ];
    filters.extend(config.extra_filters);

    let predefined: Rc<dyn TextOpinionAnnotator<L>> =
        Rc::new(PredefinedAnnotator::new(config.label_formatter));
    let train_neut: Rc<dyn TextOpinionAnnotator<L>> = Rc::new(create_nolabel_annotator(
        config.terms_per_context,
        config.no_label.clone(),
        config.sentence_distance,
        Some(Rc::clone(&synonyms)),
    )?);
    let test_neut: Rc<dyn TextOpinionAnnotator<L>> = Rc::new(create_nolabel_annotator(
        config.terms_per_context,
        config.no_label,
        config.sentence_distance,
        Some(Rc::clone(&synonyms)),
    )?);

    let build = |annotators: Vec<Rc<dyn TextOpinionAnnotator<L>>>| {
        OpinionPipeline::new(
            Rc::clone(&provider),
            Rc::clone(&processor),
            annotators,
            filters.clone(),
            Rc::clone(&synonyms),
        )
    };

    Ok(ExtractionPipelines {
        train: build(vec![Rc::clone(&predefined), Rc::clone(&train_neut)]),
        test: build(vec![test_neut]),
        etalon: build(vec![Rc::clone(&predefined)]),
        dev: build(vec![predefined, train_neut]),
        folding,
    })
}

/// Build the no-label annotator: windowed pair generation plus a constant
/// label.
///
/// When `synonyms` is omitted a fresh stemmer-backed collection is created;
/// either way the collection registers unseen surface forms on first use.
pub fn create_nolabel_annotator<L: Label>(
    terms_per_context: usize,
    no_label: L,
    dist_in_sents: usize,
    synonyms: Option<Rc<RefCell<SynonymsCollection>>>,
) -> Result<AlgoBasedAnnotator<L>> {
    let synonyms =
        synonyms.unwrap_or_else(|| Rc::new(RefCell::new(SynonymsCollection::stemmer_based())));
    let algo = PairBasedAlgorithm::new(dist_in_sents, terms_per_context)?;
    Ok(AlgoBasedAnnotator::new(algo, no_label, synonyms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::provider::InMemoryDocProvider;

    fn provider() -> Rc<dyn DocProvider> {
        let doc = Document::from_brat(
            "7001",
            "Путин хвалит Собянина",
            "T1\tPERSON 0 5\tПутин\nT2\tPERSON 13 21\tСобянина\n\
             R1\tPOSITIVE_TO Arg1:T1 Arg2:T2\n",
        )
        .unwrap();
        Rc::new(InMemoryDocProvider::new([doc]))
    }

    #[test]
    fn custom_provider_skips_fold_resolution() {
        let built = create_text_opinion_extraction_pipeline(
            DocSource::Provider(provider()),
            PipelineConfig::default(),
        )
        .unwrap();
        assert!(built.folding.is_none());
    }

    #[test]
    fn every_split_role_gets_a_pipeline() {
        let built = create_text_opinion_extraction_pipeline(
            DocSource::Provider(provider()),
            PipelineConfig::default(),
        )
        .unwrap();
        assert_eq!(built.iter().count(), 4);
    }

    #[test]
    fn annotator_composition_per_split() {
        let built = create_text_opinion_extraction_pipeline(
            DocSource::Provider(provider()),
            PipelineConfig::default(),
        )
        .unwrap();
        assert_eq!(built.get(DataType::Train).annotator_count(), 2);
        assert_eq!(built.get(DataType::Test).annotator_count(), 1);
        assert_eq!(built.get(DataType::Etalon).annotator_count(), 1);
        assert_eq!(built.get(DataType::Dev).annotator_count(), 2);
    }

    #[test]
    fn zero_terms_per_context_is_rejected_before_io() {
        let config = PipelineConfig {
            terms_per_context: 0,
            ..PipelineConfig::default()
        };
        // A nonexistent release root: the config check must fire first.
        let err = create_text_opinion_extraction_pipeline(
            DocSource::Release {
                root: PathBuf::from("/nonexistent"),
                version: SentiNerelVersion::V1,
            },
            config,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
