//! SentiNEREL adapter: sentiment labels, release layout, and the four-way
//! pipeline factory.
//!
//! SentiNEREL is a collection of Russian news reports annotated with
//! sentiment attitudes between named entities, used in AREkit-focused
//! attitude-extraction studies and the RuSentNE-2023 evaluation. This module
//! assembles the generic extraction machinery for it: one pipeline per split
//! role (train, test, etalon, dev), each with the annotator subset that role
//! calls for.

mod io;
mod labels;
mod pipelines;
mod prof_filter;

pub use io::{read_dataset_split, DataFolding, SentiNerelVersion};
pub use labels::{SentimentLabel, SentimentLabelFormatter};
pub use pipelines::{
    create_nolabel_annotator, create_text_opinion_extraction_pipeline, DocSource,
    ExtractionPipelines, PipelineConfig,
};
pub use prof_filter::ProfessionAsCharacteristicFilter;
