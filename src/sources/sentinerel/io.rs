//! SentiNEREL release layout and fold-split resolution.
//!
//! A release root contains one directory per version; inside it, the
//! `train/`, `test/` and `dev/` subdirectories hold one `.txt` + `.ann` brat
//! pair per document. Resolving a split means listing those directories;
//! missing directories are I/O errors, not empty splits.

use crate::document::DocId;
use crate::pipeline::DataType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized SentiNEREL release versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentiNerelVersion {
    /// First public release.
    V1,
    /// Revised release with the extended attitude annotation.
    V2,
}

impl SentiNerelVersion {
    /// Release directory name under the data root.
    #[must_use]
    pub fn dir_name(&self) -> &'static str {
        match self {
            SentiNerelVersion::V1 => "sentinerel-v1",
            SentiNerelVersion::V2 => "sentinerel-v2",
        }
    }
}

impl std::fmt::Display for SentiNerelVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Predefined cross-validation partition of a release.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataFolding {
    /// Training documents.
    pub train: Vec<DocId>,
    /// Test documents.
    pub test: Vec<DocId>,
    /// Development documents.
    pub dev: Vec<DocId>,
}

impl DataFolding {
    /// Documents a split role runs over.
    ///
    /// Etalon is the gold reference over the test documents, so it shares
    /// the test partition.
    #[must_use]
    pub fn for_split(&self, split: DataType) -> &[DocId] {
        match split {
            DataType::Train => &self.train,
            DataType::Test | DataType::Etalon => &self.test,
            DataType::Dev => &self.dev,
        }
    }

    /// Total number of documents across all partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len() + self.dev.len()
    }

    /// Whether the folding holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve the document listing and fold split of a release.
///
/// Returns `{doc id -> txt path}` plus the partition implied by the release
/// layout. `docs_limit` caps the total document count, consuming the
/// train, test and dev partitions in that order.
pub fn read_dataset_split(
    root: &Path,
    version: SentiNerelVersion,
    docs_limit: Option<usize>,
) -> Result<(BTreeMap<DocId, PathBuf>, DataFolding)> {
    let base = root.join(version.dir_name());
    let mut filenames = BTreeMap::new();
    let mut folding = DataFolding::default();
    let mut remaining = docs_limit.unwrap_or(usize::MAX);

    for (split_dir, partition) in [
        ("train", &mut folding.train),
        ("test", &mut folding.test),
        ("dev", &mut folding.dev),
    ] {
        let dir = base.join(split_dir);
        let mut paths: Vec<PathBuf> = fs::read_dir(&dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        paths.sort();

        for path in paths {
            if remaining == 0 {
                break;
            }
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| Error::parse(format!("bad document filename: {}", path.display())))?;
            let id = DocId::new(stem);
            partition.push(id.clone());
            filenames.insert(id, path);
            remaining -= 1;
        }
    }

    log::info!(
        "{}: resolved {} documents ({} train / {} test / {} dev)",
        version,
        filenames.len(),
        folding.train.len(),
        folding.test.len(),
        folding.dev.len()
    );

    Ok((filenames, folding))
}
