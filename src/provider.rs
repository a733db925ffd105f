//! Document providers.
//!
//! A provider maps document ids to [`Document`]s. The file-backed provider
//! owns an `{id -> path}` listing and parses lazily, caching each document on
//! first retrieval; pipelines over the four splits of one release share the
//! provider so every document is read at most once.

use crate::document::{DocId, Document};
use crate::{Error, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Supplies documents by id.
pub trait DocProvider {
    /// Retrieve a document. [`Error::UnknownDocument`] when the id is not
    /// listed; I/O and parse failures propagate unmodified.
    fn by_id(&self, id: &DocId) -> Result<Arc<Document>>;
}

/// Provider over pre-built documents, mainly for tests and callers that
/// assemble documents themselves.
#[derive(Debug, Default)]
pub struct InMemoryDocProvider {
    docs: HashMap<DocId, Arc<Document>>,
}

impl InMemoryDocProvider {
    /// Build a provider from documents.
    #[must_use]
    pub fn new(docs: impl IntoIterator<Item = Document>) -> Self {
        InMemoryDocProvider {
            docs: docs
                .into_iter()
                .map(|d| (d.id.clone(), Arc::new(d)))
                .collect(),
        }
    }
}

impl DocProvider for InMemoryDocProvider {
    fn by_id(&self, id: &DocId) -> Result<Arc<Document>> {
        self.docs
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownDocument(id.to_string()))
    }
}

/// Lazily parsing, caching provider over brat file pairs on disk.
///
/// Each listed path points at the document's `.txt` file; the standoff
/// annotations are expected in the sibling `.ann` file. A missing file fails
/// retrieval of that document.
///
/// The cache uses interior mutability and is not `Sync`; providers belong to
/// a single pipeline run.
pub struct FileDocProvider {
    filename_by_id: BTreeMap<DocId, PathBuf>,
    cache: RefCell<HashMap<DocId, Arc<Document>>>,
}

impl std::fmt::Debug for FileDocProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDocProvider")
            .field("documents", &self.filename_by_id.len())
            .field("cached", &self.cache.borrow().len())
            .finish()
    }
}

impl FileDocProvider {
    /// Build a provider from an `{id -> txt path}` listing.
    #[must_use]
    pub fn new(filename_by_id: BTreeMap<DocId, PathBuf>) -> Self {
        FileDocProvider {
            filename_by_id,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Ids of all listed documents, in sorted order.
    pub fn doc_ids(&self) -> impl Iterator<Item = &DocId> {
        self.filename_by_id.keys()
    }

    /// Number of listed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filename_by_id.len()
    }

    /// Whether the listing is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filename_by_id.is_empty()
    }

    fn load(&self, id: &DocId, txt_path: &PathBuf) -> Result<Document> {
        let text = fs::read_to_string(txt_path)?;
        let ann_path = txt_path.with_extension("ann");
        let ann = fs::read_to_string(&ann_path)?;
        log::debug!("loaded {} from {}", id, txt_path.display());
        Document::from_brat(id.clone(), text, &ann)
    }
}

impl DocProvider for FileDocProvider {
    fn by_id(&self, id: &DocId) -> Result<Arc<Document>> {
        if let Some(doc) = self.cache.borrow().get(id) {
            return Ok(Arc::clone(doc));
        }
        let path = self
            .filename_by_id
            .get(id)
            .ok_or_else(|| Error::UnknownDocument(id.to_string()))?;
        let doc = Arc::new(self.load(id, path)?);
        self.cache
            .borrow_mut()
            .insert(id.clone(), Arc::clone(&doc));
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_is_an_error() {
        let provider = InMemoryDocProvider::new([]);
        let err = provider.by_id(&DocId::new("missing")).unwrap_err();
        assert!(matches!(err, Error::UnknownDocument(_)));
    }

    #[test]
    fn in_memory_provider_returns_documents() {
        let provider = InMemoryDocProvider::new([Document::new("doc1", "text")]);
        let doc = provider.by_id(&DocId::new("doc1")).unwrap();
        assert_eq!(doc.text, "text");
    }

    #[test]
    fn file_provider_parses_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("1001.txt");
        fs::write(&txt, "Путин хвалит Собянина").unwrap();
        fs::write(
            dir.path().join("1001.ann"),
            "T1\tPERSON 0 5\tПутин\nT2\tPERSON 13 21\tСобянина\nR1\tPOSITIVE_TO Arg1:T1 Arg2:T2\n",
        )
        .unwrap();

        let provider =
            FileDocProvider::new(BTreeMap::from([(DocId::new("1001"), txt)]));
        let first = provider.by_id(&DocId::new("1001")).unwrap();
        assert_eq!(first.entities.len(), 2);
        assert_eq!(first.relations.len(), 1);

        // Second retrieval is served from the cache: same allocation.
        let second = provider.by_id(&DocId::new("1001")).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn missing_annotation_file_fails_retrieval() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("1002.txt");
        fs::write(&txt, "text only").unwrap();

        let provider =
            FileDocProvider::new(BTreeMap::from([(DocId::new("1002"), txt)]));
        let err = provider.by_id(&DocId::new("1002")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
