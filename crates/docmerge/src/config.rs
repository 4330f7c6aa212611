//! Merge configuration
//!
//! A [`MergeConfig`] carries everything one run needs: where documents live,
//! their order and sections, where the output goes, and how the version and
//! date are obtained. Build one with [`MergeConfig::builder`].

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::document::{DocumentSpec, DEFAULT_SECTION};
use crate::error::{MergeError, Result};
use crate::toc::DEFAULT_TOC_TITLE;
use crate::version::VersionSource;

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Documentation";

/// Output file name used when none is configured.
pub const DEFAULT_OUTPUT: &str = "full.md";

/// Configuration for a single merge run.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Directory document identifiers are resolved against
    pub base_dir: PathBuf,

    /// Output file path
    pub output: PathBuf,

    /// Title of the merged document
    pub title: String,

    /// Heading of the table of contents
    pub toc_title: String,

    /// Where the version comes from
    pub version_source: VersionSource,

    /// Pinned generation date; today's local date when `None`
    pub generated_on: Option<NaiveDate>,

    /// Documents in merge order
    pub documents: Vec<DocumentSpec>,
}

impl MergeConfig {
    /// Start building a configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use docmerge::MergeConfig;
    ///
    /// let config = MergeConfig::builder()
    ///     .base_dir("docs")
    ///     .output("docs/full.md")
    ///     .section("Part I")
    ///     .document("00-intro.md")
    ///     .document("01-basics.md")
    ///     .section("Appendix")
    ///     .document("A-glossary.md")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.documents.len(), 3);
    /// assert_eq!(config.documents[2].section, "Appendix");
    /// ```
    pub fn builder() -> MergeConfigBuilder {
        MergeConfigBuilder::default()
    }
}

/// Builder for [`MergeConfig`].
///
/// Documents are attached to the most recently declared section.
#[derive(Debug, Clone)]
pub struct MergeConfigBuilder {
    base_dir: PathBuf,
    output: PathBuf,
    title: String,
    toc_title: String,
    version_source: VersionSource,
    generated_on: Option<NaiveDate>,
    documents: Vec<DocumentSpec>,
    current_section: String,
}

impl Default for MergeConfigBuilder {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            toc_title: DEFAULT_TOC_TITLE.to_string(),
            version_source: VersionSource::default(),
            generated_on: None,
            documents: Vec::new(),
            current_section: DEFAULT_SECTION.to_string(),
        }
    }
}

impl MergeConfigBuilder {
    /// Set the base directory.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Set the output path.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Set the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the table-of-contents heading.
    pub fn toc_title(mut self, title: impl Into<String>) -> Self {
        self.toc_title = title.into();
        self
    }

    /// Set the version source.
    pub fn version_source(mut self, source: VersionSource) -> Self {
        self.version_source = source;
        self
    }

    /// Pin the generation date.
    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// Start a new section; following documents belong to it.
    pub fn section(mut self, label: impl Into<String>) -> Self {
        self.current_section = label.into();
        self
    }

    /// Append a document to the current section.
    pub fn document(mut self, id: impl Into<String>) -> Self {
        self.documents
            .push(DocumentSpec::new(id, self.current_section.clone()));
        self
    }

    /// Append several documents to the current section.
    pub fn documents<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self = self.document(id);
        }
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<MergeConfig> {
        if self.documents.is_empty() {
            return Err(MergeError::InvalidConfig(
                "at least one document is required".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(MergeError::InvalidConfig(
                "output path must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for spec in &self.documents {
            if spec.id.trim().is_empty() {
                return Err(MergeError::InvalidConfig(
                    "document identifiers must not be empty".to_string(),
                ));
            }
            if !seen.insert(spec.id.as_str()) {
                return Err(MergeError::InvalidConfig(format!(
                    "document '{}' is listed more than once",
                    spec.id
                )));
            }
        }

        Ok(MergeConfig {
            base_dir: self.base_dir,
            output: self.output,
            title: self.title,
            toc_title: self.toc_title,
            version_source: self.version_source,
            generated_on: self.generated_on,
            documents: self.documents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MergeConfig::builder().document("a.md").build().unwrap();

        assert_eq!(config.base_dir, PathBuf::from("."));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.toc_title, DEFAULT_TOC_TITLE);
        assert_eq!(config.version_source, VersionSource::default());
        assert_eq!(config.generated_on, None);
        assert_eq!(config.documents, vec![DocumentSpec::new("a.md", DEFAULT_SECTION)]);
    }

    #[test]
    fn test_documents_follow_current_section() {
        let config = MergeConfig::builder()
            .section("One")
            .documents(["a.md", "b.md"])
            .section("Two")
            .document("c.md")
            .build()
            .unwrap();

        let sections: Vec<&str> = config.documents.iter().map(|d| d.section.as_str()).collect();
        assert_eq!(sections, vec!["One", "One", "Two"]);
    }

    #[test]
    fn test_rejects_empty_list() {
        let err = MergeConfig::builder().section("Empty").build().unwrap_err();
        assert!(matches!(err, MergeError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = MergeConfig::builder()
            .documents(["a.md", "b.md", "a.md"])
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: document 'a.md' is listed more than once"
        );
    }

    #[test]
    fn test_rejects_blank_id() {
        let err = MergeConfig::builder().document("  ").build().unwrap_err();
        assert!(matches!(err, MergeError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_empty_output() {
        let err = MergeConfig::builder()
            .document("a.md")
            .output("")
            .build()
            .unwrap_err();
        assert!(matches!(err, MergeError::InvalidConfig(_)));
    }
}
