//! Ordered, best-effort document loading
//!
//! Every spec produces exactly one record, in input order. A file that is
//! missing or unreadable becomes a placeholder record; nothing here fails the
//! batch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::document::{DocumentRecord, DocumentSpec, DocumentStatus};
use crate::title::{fallback_title, title_for};

/// Body marker for a document whose file does not exist.
pub const NOT_FOUND_MARKER: &str = "*File not found*";

/// Body marker for a document whose file could not be read.
pub const READ_ERROR_MARKER: &str = "*Read error*";

/// Loads documents relative to a base directory.
#[derive(Debug, Clone)]
pub struct Loader {
    base_dir: PathBuf,
}

impl Loader {
    /// Create a loader rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory identifiers are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Load every spec in order, one at a time.
    pub fn load_all(&self, specs: &[DocumentSpec]) -> Vec<DocumentRecord> {
        let records: Vec<DocumentRecord> = specs.iter().map(|spec| self.load(spec)).collect();

        let found = records.iter().filter(|r| r.found()).count();
        tracing::info!(found, total = records.len(), "loaded documents");
        records
    }

    /// Load a single document, degrading to a placeholder on failure.
    pub fn load(&self, spec: &DocumentSpec) -> DocumentRecord {
        let path = self.base_dir.join(&spec.id);
        tracing::debug!(id = %spec.id, path = %path.display(), "reading document");

        match fs::read_to_string(&path) {
            Ok(content) => DocumentRecord {
                id: spec.id.clone(),
                section: spec.section.clone(),
                title: title_for(&spec.id, &content),
                path,
                content,
                status: DocumentStatus::Found,
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(id = %spec.id, path = %path.display(), "document not found");
                placeholder(spec, path, NOT_FOUND_MARKER, DocumentStatus::Missing)
            }
            Err(err) => {
                tracing::error!(
                    id = %spec.id,
                    path = %path.display(),
                    error = %err,
                    "failed to read document"
                );
                placeholder(
                    spec,
                    path,
                    READ_ERROR_MARKER,
                    DocumentStatus::Unreadable(err.to_string()),
                )
            }
        }
    }
}

fn placeholder(
    spec: &DocumentSpec,
    path: PathBuf,
    marker: &str,
    status: DocumentStatus,
) -> DocumentRecord {
    DocumentRecord {
        id: spec.id.clone(),
        section: spec.section.clone(),
        path,
        content: format!("# {}\n\n{}\n", spec.id, marker),
        title: fallback_title(&spec.id),
        status,
    }
}
