//! Profession-as-characteristic exclusion.

use crate::document::EntityMention;
use crate::filters::TextOpinionFilter;
use crate::text::ParsedDocument;

/// Drops opinions whose end is a profession used as a person characteristic.
///
/// In SentiNEREL, a `PROFESSION` mention that titles a `PERSON` mention
/// ("президент Путин") characterizes the person rather than acting as an
/// opinion participant of its own; attitudes toward it belong to the person.
/// An opinion end counts as characteristic when it is a `PROFESSION` mention
/// nested in, or immediately adjacent to, a `PERSON` mention.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProfessionAsCharacteristicFilter;

const PROFESSION: &str = "PROFESSION";
const PERSON: &str = "PERSON";

impl ProfessionAsCharacteristicFilter {
    fn is_characteristic(mention: &EntityMention, parsed: &ParsedDocument) -> bool {
        if mention.entity_type != PROFESSION {
            return false;
        }
        parsed
            .document()
            .entities
            .iter()
            .filter(|person| person.entity_type == PERSON)
            .any(|person| person.overlaps(mention) || gap(person, mention) <= 1)
    }
}

/// Character gap between two non-overlapping spans; 0 when they touch.
fn gap(a: &EntityMention, b: &EntityMention) -> usize {
    if a.end <= b.start {
        b.start - a.end
    } else if b.end <= a.start {
        a.start - b.end
    } else {
        0
    }
}

impl TextOpinionFilter for ProfessionAsCharacteristicFilter {
    fn name(&self) -> &'static str {
        "profession-as-characteristic"
    }

    fn keep(&self, source_id: &str, target_id: &str, parsed: &ParsedDocument) -> bool {
        for id in [source_id, target_id] {
            let Some(mention) = parsed.entity(id) else {
                // A dangling id cannot be judged here; leave it to the
                // distance filter, which drops unlocatable ends.
                continue;
            };
            if Self::is_characteristic(mention, parsed) {
                return false;
            }
        }
        true
    }
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
    fn titled_profession_is_excluded() {
        // "президент Путин критикует министра" - T1 titles T2.
        let parsed = parsed(
            "президент Путин критикует министра",
            "T1\tPROFESSION 0 9\tпрезидент\n\
             T2\tPERSON 10 15\tПутин\n\
             T3\tPROFESSION 26 34\tминистра\n",
        );
        let filter = ProfessionAsCharacteristicFilter;
        assert!(!filter.keep("T3", "T1", &parsed));
        assert!(!filter.keep("T1", "T3", &parsed));
    }

    #[test]
    fn standalone_profession_survives() {
        let parsed = parsed(
            "министра критикуют все",
            "T1\tPROFESSION 0 8\tминистра\nT2\tPERSON 19 22\tвсе\n",
        );
        // T2 is 10+ characters away from T1, so T1 is no title.
        assert!(ProfessionAsCharacteristicFilter.keep("T2", "T1", &parsed));
    }

    #[test]
    fn person_to_person_opinions_are_untouched() {
        let parsed = parsed(
            "Путин хвалит Собянина",
            "T1\tPERSON 0 5\tПутин\nT2\tPERSON 13 21\tСобянина\n",
        );
        assert!(ProfessionAsCharacteristicFilter.keep("T1", "T2", &parsed));
    }
}
