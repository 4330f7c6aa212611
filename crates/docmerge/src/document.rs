//! Document specifications and loaded document records

use std::fmt;
use std::path::PathBuf;

/// Section label used for documents declared before any section.
pub const DEFAULT_SECTION: &str = "Documents";

/// One entry in the configured merge order.
///
/// The identifier is a file name relative to the base directory. The section
/// label groups the document in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSpec {
    /// File name, relative to the base directory
    pub id: String,

    /// Table-of-contents section this document belongs to
    pub section: String,
}

impl DocumentSpec {
    /// Create a new document spec.
    pub fn new(id: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            section: section.into(),
        }
    }
}

/// Outcome of reading a document from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    /// The file existed and was read
    Found,

    /// The file does not exist
    Missing,

    /// The file exists but could not be read (I/O or UTF-8 error)
    Unreadable(String),
}

impl DocumentStatus {
    /// Status glyph used in the table of contents.
    pub fn glyph(&self) -> &'static str {
        match self {
            DocumentStatus::Found => "✅",
            DocumentStatus::Missing | DocumentStatus::Unreadable(_) => "❌",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentStatus::Found => write!(f, "found"),
            DocumentStatus::Missing => write!(f, "file not found"),
            DocumentStatus::Unreadable(reason) => write!(f, "read error: {}", reason),
        }
    }
}

/// The loaded result for one [`DocumentSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Identifier from the [`DocumentSpec`]
    pub id: String,

    /// Section label from the [`DocumentSpec`]
    pub section: String,

    /// Resolved location on disk
    pub path: PathBuf,

    /// Raw text, or placeholder text when the file could not be read
    pub content: String,

    /// Display title
    pub title: String,

    /// Read outcome
    pub status: DocumentStatus,
}

impl DocumentRecord {
    /// Whether the source file was read successfully.
    pub fn found(&self) -> bool {
        self.status == DocumentStatus::Found
    }
}
