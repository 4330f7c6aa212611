//! # docmerge
//!
//! Merge an ordered set of Markdown documents into a single file.
//!
//! A run reads each configured document in order, extracts its title from
//! the first level-1 heading, builds a table of contents grouped by section,
//! and writes header, contents and document bodies to one output file.
//! Missing or unreadable documents become placeholders; only the final write
//! can fail a run.
//!
//! ## Pipeline
//!
//! - **Version**: [`VersionSource::resolve`] reads `version` from a JSON
//!   metadata file, falling back to [`DEFAULT_VERSION`]
//! - **Load**: [`Loader::load_all`] yields one [`DocumentRecord`] per spec
//! - **Contents**: [`build_toc`] numbers entries across sections and links
//!   them with unique anchors
//! - **Assemble**: [`assemble`] concatenates everything with marker comments
//! - **Write**: [`write_output`] overwrites the output file
//!
//! [`Merger`] drives all of it from a [`MergeConfig`].
//!
//! ```no_run
//! use docmerge::{MergeConfig, Merger, VersionSource};
//!
//! let config = MergeConfig::builder()
//!     .base_dir("docs")
//!     .output("docs/full.md")
//!     .version_source(VersionSource::MetadataFile("package.json".into()))
//!     .section("Guide")
//!     .documents(["intro.md", "usage.md"])
//!     .build()?;
//!
//! let report = Merger::new(config).run()?;
//! println!("{}/{} documents found", report.found_count(), report.total());
//! # Ok::<(), docmerge::MergeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assemble;
pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod pipeline;
pub mod report;
pub mod slug;
pub mod title;
pub mod toc;
pub mod version;
pub mod writer;

// Re-export main types
pub use assemble::{assemble, block_marker, render_header, Header};
pub use config::{MergeConfig, MergeConfigBuilder};
pub use document::{DocumentRecord, DocumentSpec, DocumentStatus, DEFAULT_SECTION};
pub use error::{MergeError, Result};
pub use loader::{Loader, NOT_FOUND_MARKER, READ_ERROR_MARKER};
pub use manifest::{Manifest, ManifestSection, DEFAULT_MANIFEST};
pub use pipeline::{MergeReport, Merger, PreparedMerge};
pub use slug::{slugify, Slugger};
pub use title::{extract_title, fallback_title};
pub use toc::{build_toc, build_toc_after, build_toc_titled, group_sections, Section};
pub use version::{ResolvedVersion, VersionSource, DEFAULT_VERSION};
pub use writer::{write_output, WriteStats};

/// docmerge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
