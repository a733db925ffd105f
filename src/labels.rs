//! Label contracts: typed labels and string-token formatters.
//!
//! Corpus annotation files carry relation types as uppercase tokens
//! (`POSITIVE_TO`, `KNOWS`, ...). Each corpus adapter supplies a closed label
//! enum plus a [`LabelFormatter`] that parses tokens into it. Formatters are
//! lookup tables, fixed after construction; they also delimit the label set:
//! a gold annotation whose token the formatter does not list is simply out of
//! scope for that pipeline.

use crate::{Error, Result};
use std::fmt::Debug;
use std::hash::Hash;

/// A typed relation or sentiment label.
///
/// Labels are small, copyable-by-clone enum values with a stable token
/// representation used for serialization.
pub trait Label: Clone + Debug + PartialEq + Eq + Hash {
    /// The corpus token for this label.
    fn as_token(&self) -> &'static str;
}

/// Parses corpus string tokens into typed labels.
pub trait LabelFormatter<L: Label> {
    /// Parse a token, or `None` when the token is outside the table.
    fn try_format(&self, token: &str) -> Option<L>;

    /// Parse a token, failing with [`Error::UnknownLabel`] on a miss.
    fn format(&self, token: &str) -> Result<L> {
        self.try_format(token)
            .ok_or_else(|| Error::UnknownLabel(token.to_string()))
    }

    /// Whether the token is listed in the table.
    fn supports(&self, token: &str) -> bool {
        self.try_format(token).is_some()
    }
}
