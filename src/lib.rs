//! # opine
//!
//! Text-opinion extraction pipelines for Russian-language annotated corpora.
//!
//! An *opinion* is a labeled relation between two entity mentions of a
//! document (a sentiment attitude, a semantic relation). This crate builds
//! the machinery to extract them from brat-annotated corpus releases and
//! configures it for two corpora:
//!
//! - **NEREL-BIO**: the full relation-type vocabulary and its label
//!   formatter ([`sources::nerel_bio`]).
//! - **SentiNEREL**: sentiment labels, release-layout resolution and a
//!   factory producing one pipeline per split role, Train through Dev
//!   ([`sources::sentinerel`]).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opine::sources::sentinerel::{
//!     create_text_opinion_extraction_pipeline, DocSource, PipelineConfig, SentiNerelVersion,
//! };
//! use opine::DataType;
//!
//! let built = create_text_opinion_extraction_pipeline(
//!     DocSource::Release {
//!         root: "data".into(),
//!         version: SentiNerelVersion::V2,
//!     },
//!     PipelineConfig::default(),
//! )?;
//!
//! let folding = built.folding.as_ref().unwrap();
//! let opinions = built
//!     .get(DataType::Train)
//!     .run(folding.for_split(DataType::Train))?;
//! ```
//!
//! ## Design
//!
//! - **Trait seams**: [`DocProvider`], [`TextProcessor`],
//!   [`annot::TextOpinionAnnotator`] and [`TextOpinionFilter`] are the
//!   extension points; everything else is concrete.
//! - **Closed enumerations**: split roles ([`DataType`]) and corpus versions
//!   are closed enums, so a missing case is a compile error, not a runtime
//!   KeyError.
//! - **Explicit mutable state**: synonym grouping is an owned registry
//!   passed explicitly to the components that register into it, not captured
//!   ambient state.
//! - **Fail fast**: configuration errors surface before any I/O; everything
//!   else aborts the current run on first failure. No retries, no partial
//!   results.
//!
//! Single-threaded by design: pipelines, providers and synonym collections
//! belong to one run and are not `Sync`.

#![warn(missing_docs)]

pub mod annot;
mod document;
mod error;
pub mod filters;
mod labels;
mod opinion;
mod pipeline;
mod provider;
pub mod sources;
mod synonyms;
mod text;

pub use document::{DocId, Document, EntityMention, RelationAnnotation};
pub use error::{Error, Result};
pub use filters::{DistanceLimitedFilter, TextOpinionFilter};
pub use labels::{Label, LabelFormatter};
pub use opinion::{MissingEnds, OpinionCollection, TextOpinion};
pub use pipeline::{DataType, DocumentOpinions, OpinionPipeline};
pub use provider::{DocProvider, FileDocProvider, InMemoryDocProvider};
pub use synonyms::{GroupId, RuStemmer, Stemmer, SynonymsCollection};
pub use text::{ParsedDocument, Sentence, SimpleTextProcessor, Term, TermPosition, TextProcessor};
