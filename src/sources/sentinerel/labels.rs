//! SentiNEREL sentiment labels.

use crate::labels::{Label, LabelFormatter};
use serde::{Deserialize, Serialize};

/// A sentiment attitude label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Positive attitude (`POSITIVE_TO`).
    Positive,
    /// Negative attitude (`NEGATIVE_TO`).
    Negative,
    /// No attitude: the neutral marker assigned to auto-annotated entity
    /// pairs, used as negative training signal. Not a corpus token.
    NoLabel,
}

impl Label for SentimentLabel {
    fn as_token(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE_TO",
            SentimentLabel::Negative => "NEGATIVE_TO",
            SentimentLabel::NoLabel => "NO_LABEL",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

/// Formatter limiting gold annotations to the two sentiment tokens.
///
/// SentiNEREL annotation files also carry structural relation types
/// (`WORKS_AS`, `MEMBER_OF`, ...); those are outside the sentiment label set
/// and are not listed here, so the predefined annotator skips them.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentimentLabelFormatter;

impl LabelFormatter<SentimentLabel> for SentimentLabelFormatter {
    fn try_format(&self, token: &str) -> Option<SentimentLabel> {
        match token {
            "POSITIVE_TO" => Some(SentimentLabel::Positive),
            "NEGATIVE_TO" => Some(SentimentLabel::Negative),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn sentiment_tokens_format() {
        let fmt = SentimentLabelFormatter;
        assert_eq!(fmt.format("POSITIVE_TO").unwrap(), SentimentLabel::Positive);
        assert_eq!(fmt.format("NEGATIVE_TO").unwrap(), SentimentLabel::Negative);
    }

    #[test]
    fn no_label_is_not_a_corpus_token() {
        let err = SentimentLabelFormatter.format("NO_LABEL").unwrap_err();
        assert!(matches!(err, Error::UnknownLabel(_)));
    }

    #[test]
    fn structural_relations_are_out_of_scope() {
        assert!(!SentimentLabelFormatter.supports("WORKS_AS"));
    }
}
