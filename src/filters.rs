//! Text opinion filters.
//!
//! Filters are predicates removing candidate opinions after annotation. They
//! run positionally: pipelines place their built-in filters first and append
//! caller-supplied extras after them, so extras can only remove further
//! candidates, never resurrect ones a built-in excluded.

use crate::text::ParsedDocument;
use std::rc::Rc;

/// Predicate over a candidate opinion and its source document context.
pub trait TextOpinionFilter {
    /// Filter name, for logging.
    fn name(&self) -> &'static str;

    /// Whether the opinion between `source_id` and `target_id` survives.
    fn keep(&self, source_id: &str, target_id: &str, parsed: &ParsedDocument) -> bool;
}

/// Drops opinions whose ends lie more than `terms_per_context` terms apart.
///
/// An opinion with an end that could not be located in the text has no
/// defined distance and is dropped as well.
#[derive(Debug, Clone, Copy)]
pub struct DistanceLimitedFilter {
    terms_per_context: usize,
}

impl DistanceLimitedFilter {
    /// Create a filter with the given term bound.
    #[must_use]
    pub fn new(terms_per_context: usize) -> Self {
        DistanceLimitedFilter { terms_per_context }
    }
}

impl TextOpinionFilter for DistanceLimitedFilter {
    fn name(&self) -> &'static str {
        "distance-limited"
    }

    fn keep(&self, source_id: &str, target_id: &str, parsed: &ParsedDocument) -> bool {
        match parsed.term_distance(source_id, target_id) {
            Some(dist) => dist <= self.terms_per_context,
            None => false,
        }
    }
}

/// Apply a filter chain in order; the first rejection wins.
pub(crate) fn passes_all(
    filters: &[Rc<dyn TextOpinionFilter>],
    source_id: &str,
    target_id: &str,
    parsed: &ParsedDocument,
) -> bool {
    filters
        .iter()
        .all(|f| f.keep(source_id, target_id, parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::text::{SimpleTextProcessor, TextProcessor};
    use std::sync::Arc;

    fn parsed(text: &str, ann: &str) -> ParsedDocument {
        let doc = Document::from_brat("d", text, ann).unwrap();
        SimpleTextProcessor::new().process(Arc::new(doc)).unwrap()
    }

    #[test]
    fn distance_filter_drops_distant_pairs() {
        let parsed = parsed(
            "Путин слово слово слово Собянин",
            "T1\tPERSON 0 5\tПутин\nT2\tPERSON 24 31\tСобянин\n",
        );
        assert!(DistanceLimitedFilter::new(4).keep("T1", "T2", &parsed));
        assert!(!DistanceLimitedFilter::new(3).keep("T1", "T2", &parsed));
    }

    #[test]
    fn unlocatable_end_is_dropped() {
        let parsed = parsed("Путин", "T1\tPERSON 0 5\tПутин\nT2\tPERSON 90 99\tнигде\n");
        assert!(!DistanceLimitedFilter::new(50).keep("T1", "T2", &parsed));
    }
}
