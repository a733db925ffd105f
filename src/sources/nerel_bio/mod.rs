//! NEREL-BIO adapter: relation-type vocabulary and label formatter.
//!
//! NEREL-BIO extends the NEREL news corpus with PubMed abstracts in Russian,
//! annotated with both general and biomedical relation types. This module
//! carries the full relation vocabulary of the release and the formatter
//! that parses annotation-file tokens into it.

mod labels;

pub use labels::{NerelBioLabelFormatter, RelationType};
