//! The merge pipeline: resolve version, load, build ToC, assemble, write
//!
//! Runs strictly in sequence. Nothing is printed here; callers render the
//! returned [`MergeReport`] with the [`report`](crate::report) module.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::assemble::{assemble, render_header, Header};
use crate::config::MergeConfig;
use crate::document::DocumentRecord;
use crate::error::Result;
use crate::loader::Loader;
use crate::toc::build_toc_after;
use crate::version::ResolvedVersion;
use crate::writer::{write_output, WriteStats};

/// Merged content that has not been written yet.
#[derive(Debug, Clone)]
pub struct PreparedMerge {
    /// Resolved version
    pub version: ResolvedVersion,

    /// One record per configured document, in order
    pub records: Vec<DocumentRecord>,

    /// The merged Markdown document
    pub content: String,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Where the document was written
    pub output: PathBuf,

    /// Resolved version
    pub version: ResolvedVersion,

    /// One record per configured document, in order
    pub records: Vec<DocumentRecord>,

    /// Size of the written document
    pub stats: WriteStats,
}

impl MergeReport {
    /// Number of documents read successfully.
    pub fn found_count(&self) -> usize {
        self.records.iter().filter(|r| r.found()).count()
    }

    /// Number of documents replaced by placeholders.
    pub fn missing_count(&self) -> usize {
        self.total() - self.found_count()
    }

    /// Number of configured documents.
    pub fn total(&self) -> usize {
        self.records.len()
    }
}

/// Runs one merge for a configuration.
#[derive(Debug, Clone)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    /// Create a merger.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// The configuration this merger runs.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Build the merged document in memory without writing it.
    pub fn prepare(&self) -> PreparedMerge {
        let version = self.config.version_source.resolve();
        tracing::info!(version = %version.version, "merging documentation");

        let records = Loader::new(&self.config.base_dir).load_all(&self.config.documents);

        let header = Header {
            title: self.config.title.clone(),
            version: version.version.clone(),
            generated_on: self.generated_on(),
        };
        let headings = header.headings();
        let preceding: Vec<&str> = headings.iter().map(String::as_str).collect();
        let toc = build_toc_after(&preceding, &self.config.toc_title, &records);
        let content = assemble(&render_header(&header), &toc, &records);

        PreparedMerge {
            version,
            records,
            content,
        }
    }

    /// Build the merged document and write it to the configured output.
    ///
    /// Only the write can fail.
    pub fn run(&self) -> Result<MergeReport> {
        self.write(self.prepare())
    }

    /// Write a prepared merge to the configured output.
    pub fn write(&self, prepared: PreparedMerge) -> Result<MergeReport> {
        let stats = write_output(&self.config.output, &prepared.content)?;

        Ok(MergeReport {
            output: self.config.output.clone(),
            version: prepared.version,
            records: prepared.records,
            stats,
        })
    }

    fn generated_on(&self) -> NaiveDate {
        self.config
            .generated_on
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_report_counts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "# A\n").unwrap();

        let config = MergeConfig::builder()
            .base_dir(dir.path())
            .output(dir.path().join("full.md"))
            .documents(["a.md", "b.md", "c.md"])
            .build()
            .unwrap();

        let report = Merger::new(config).run().unwrap();

        assert_eq!(report.total(), 3);
        assert_eq!(report.found_count(), 1);
        assert_eq!(report.missing_count(), 2);
        assert_eq!(report.stats.bytes, fs::metadata(&report.output).unwrap().len() as usize);
    }

    #[test]
    fn test_prepare_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("full.md");
        let config = MergeConfig::builder()
            .base_dir(dir.path())
            .output(&output)
            .document("a.md")
            .build()
            .unwrap();

        let prepared = Merger::new(config).prepare();

        assert!(!output.exists());
        assert_eq!(prepared.records.len(), 1);
        assert!(prepared.content.contains("<!-- ===== a ===== -->"));
    }

    #[test]
    fn test_write_prepared_merge() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "# A\n").unwrap();
        let output = dir.path().join("full.md");
        let config = MergeConfig::builder()
            .base_dir(dir.path())
            .output(&output)
            .documents(["a.md", "b.md"])
            .build()
            .unwrap();
        let merger = Merger::new(config);

        let prepared = merger.prepare();
        let content = prepared.content.clone();
        let report = merger.write(prepared).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), content);
        assert_eq!(report.found_count(), 1);
        assert_eq!(report.missing_count(), 1);
    }

    #[test]
    fn test_records_survive_failed_write() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "# A\n").unwrap();
        let config = MergeConfig::builder()
            .base_dir(dir.path())
            .output(dir.path())
            .documents(["a.md", "b.md"])
            .build()
            .unwrap();
        let merger = Merger::new(config);

        let prepared = merger.prepare();
        let progress = crate::report::progress_lines(&prepared.records);

        assert!(merger.write(prepared).is_err());
        assert_eq!(progress.len(), 4);
        assert_eq!(progress[3], "   ❌ File not found");
    }
}
