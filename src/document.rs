//! Annotated document model.
//!
//! Documents follow the brat standoff convention used by NEREL-BIO and
//! SentiNEREL releases: a plain-text file plus an `.ann` file holding entity
//! mentions (`T` lines) and relation annotations (`R` lines). Only those two
//! line kinds carry information the pipelines consume; attribute, note and
//! event lines are ignored.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Document identifier, unique within one corpus release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocId(pub String);

impl DocId {
    /// Create a document id.
    pub fn new(id: impl Into<String>) -> Self {
        DocId(id.into())
    }

    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        DocId(s.to_string())
    }
}

/// An entity mention with its corpus-assigned identifier.
///
/// The identifier (`T1`, `T2`, ...) is the entity identity used for pairing
/// and for resolving relation endpoints; spans are character offsets into
/// the document text, as brat records them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMention {
    /// Corpus-assigned mention id (brat `T` identifier).
    pub id: String,
    /// Entity type token as written in the annotation file (e.g. `PERSON`).
    pub entity_type: String,
    /// Start character offset in the document text.
    pub start: usize,
    /// End character offset (exclusive). For discontinuous mentions this is the
    /// end of the last fragment.
    pub end: usize,
    /// Surface form as recorded in the annotation file.
    pub text: String,
}

impl EntityMention {
    /// Check whether this mention's span overlaps another's.
    #[must_use]
    pub fn overlaps(&self, other: &EntityMention) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}

/// A gold relation annotation between two entity mentions.
///
/// The type token is kept as a raw string; label resolution happens later
/// through a formatter, which also decides which tokens are in scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationAnnotation {
    /// Corpus-assigned relation id (brat `R` identifier).
    pub id: String,
    /// Relation type token as written in the annotation file.
    pub type_token: String,
    /// Mention id of the relation source (`Arg1`).
    pub source_id: String,
    /// Mention id of the relation target (`Arg2`).
    pub target_id: String,
}

/// An annotated document: raw text plus its standoff annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier.
    pub id: DocId,
    /// Raw document text.
    pub text: String,
    /// Entity mentions, in annotation-file order.
    pub entities: Vec<EntityMention>,
    /// Gold relation annotations, in annotation-file order.
    pub relations: Vec<RelationAnnotation>,
}

impl Document {
    /// Create a document with no annotations.
    pub fn new(id: impl Into<DocId>, text: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            text: text.into(),
            entities: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Parse a document from raw text and brat standoff annotations.
    ///
    /// Recognizes `T` (entity) and `R` (relation) lines; everything else is
    /// skipped. A malformed `T` or `R` line is an [`Error::Parse`]; a broken
    /// annotation file fails the whole document rather than yielding a
    /// silently truncated one.
    pub fn from_brat(id: impl Into<DocId>, text: impl Into<String>, ann: &str) -> Result<Self> {
        let mut doc = Document::new(id, text);

        for line in ann.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            match line.as_bytes()[0] {
                b'T' => doc.entities.push(parse_entity_line(line)?),
                b'R' => doc.relations.push(parse_relation_line(line)?),
                _ => {}
            }
        }

        Ok(doc)
    }

    /// Look up a mention by its corpus-assigned id.
    #[must_use]
    pub fn entity(&self, mention_id: &str) -> Option<&EntityMention> {
        self.entities.iter().find(|e| e.id == mention_id)
    }
}

/// Parse a brat entity line: `T1<TAB>TYPE start end<TAB>surface`.
///
/// Discontinuous spans (`start end;start end`) collapse to the covering
/// range, which is what the term-distance computation needs.
fn parse_entity_line(line: &str) -> Result<EntityMention> {
    let mut fields = line.splitn(3, '\t');
    let id = fields
        .next()
        .ok_or_else(|| Error::parse(format!("entity line missing id: {line:?}")))?;
    let type_and_span = fields
        .next()
        .ok_or_else(|| Error::parse(format!("entity line missing span: {line:?}")))?;
    let text = fields.next().unwrap_or("").to_string();

    let mut parts = type_and_span.split(' ');
    let entity_type = parts
        .next()
        .ok_or_else(|| Error::parse(format!("entity line missing type: {line:?}")))?;

    let mut start = usize::MAX;
    let mut end = 0usize;
    for fragment in type_and_span[entity_type.len()..].trim_start().split(';') {
        let mut bounds = fragment.split_whitespace();
        let s: usize = bounds
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| Error::parse(format!("bad entity span in {line:?}")))?;
        let e: usize = bounds
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| Error::parse(format!("bad entity span in {line:?}")))?;
        if e < s {
            return Err(Error::parse(format!("inverted entity span in {line:?}")));
        }
        start = start.min(s);
        end = end.max(e);
    }

    Ok(EntityMention {
        id: id.to_string(),
        entity_type: entity_type.to_string(),
        start,
        end,
        text,
    })
}

/// Parse a brat relation line: `R1<TAB>TYPE Arg1:T1 Arg2:T2`.
fn parse_relation_line(line: &str) -> Result<RelationAnnotation> {
    let mut fields = line.splitn(2, '\t');
    let id = fields
        .next()
        .ok_or_else(|| Error::parse(format!("relation line missing id: {line:?}")))?;
    let body = fields
        .next()
        .ok_or_else(|| Error::parse(format!("relation line missing body: {line:?}")))?;

    let mut parts = body.split_whitespace();
    let type_token = parts
        .next()
        .ok_or_else(|| Error::parse(format!("relation line missing type: {line:?}")))?;
    let source_id = parts
        .next()
        .and_then(|arg| arg.strip_prefix("Arg1:"))
        .ok_or_else(|| Error::parse(format!("relation line missing Arg1: {line:?}")))?;
    let target_id = parts
        .next()
        .and_then(|arg| arg.strip_prefix("Arg2:"))
        .ok_or_else(|| Error::parse(format!("relation line missing Arg2: {line:?}")))?;

    Ok(RelationAnnotation {
        id: id.to_string(),
        type_token: type_token.to_string(),
        source_id: source_id.to_string(),
        target_id: target_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANN: &str = "T1\tPERSON 0 5\tПутин\n\
                       T2\tPROFESSION 10 19\tпрезидент\n\
                       R1\tPOSITIVE_TO Arg1:T1 Arg2:T2\n\
                       #1\tAnnotatorNotes T1\tsome note\n";

    #[test]
    fn parses_entities_and_relations() {
        let doc = Document::from_brat("doc1", "Путин наш президент", ANN).unwrap();
        assert_eq!(doc.entities.len(), 2);
        assert_eq!(doc.relations.len(), 1);

        let e = doc.entity("T2").unwrap();
        assert_eq!(e.entity_type, "PROFESSION");
        assert_eq!((e.start, e.end), (10, 19));

        let r = &doc.relations[0];
        assert_eq!(r.type_token, "POSITIVE_TO");
        assert_eq!(r.source_id, "T1");
        assert_eq!(r.target_id, "T2");
    }

    #[test]
    fn note_lines_are_skipped() {
        let doc = Document::from_brat("doc1", "text", "#1\tAnnotatorNotes T1\tnote\n").unwrap();
        assert!(doc.entities.is_empty());
        assert!(doc.relations.is_empty());
    }

    #[test]
    fn discontinuous_span_collapses_to_covering_range() {
        let ann = "T1\tDISO 4 9;15 22\tболь в суставах\n";
        let doc = Document::from_brat("d", "x", ann).unwrap();
        let e = &doc.entities[0];
        assert_eq!((e.start, e.end), (4, 22));
    }

    #[test]
    fn malformed_entity_line_is_an_error() {
        let err = Document::from_brat("d", "x", "T1\tPERSON zero six\tname\n").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn malformed_relation_line_is_an_error() {
        let err = Document::from_brat("d", "x", "R1\tKNOWS T1 T2\n").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = EntityMention {
            id: "T1".into(),
            entity_type: "PERSON".into(),
            start: 0,
            end: 6,
            text: "Путин".into(),
        };
        let b = EntityMention {
            id: "T2".into(),
            entity_type: "PROFESSION".into(),
            start: 4,
            end: 10,
            text: "x".into(),
        };
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
