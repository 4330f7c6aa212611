//! JSON manifest describing a merge
//!
//! ```json
//! {
//!   "title": "Project Documentation",
//!   "base_dir": "docs",
//!   "output": "docs/full.md",
//!   "version_file": "package.json",
//!   "sections": [
//!     { "title": "Part I", "documents": ["00-intro.md", "01-basics.md"] }
//!   ]
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the manifest.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::{MergeConfigBuilder, DEFAULT_OUTPUT, DEFAULT_TITLE};
use crate::error::{MergeError, Result};
use crate::version::VersionSource;
use crate::MergeConfig;

/// Manifest file looked up in the working directory when none is given.
pub const DEFAULT_MANIFEST: &str = "docmerge.json";

/// Document order used when no manifest file exists.
const BUILTIN_SECTIONS: &[(&str, &[&str])] = &[
    (
        "Part I: Theoretical Foundations",
        &[
            "00-foundations.md",
            "01-universal-principles.md",
            "02-consciousness-model.md",
        ],
    ),
    (
        "Part II: Mathematical Formalization",
        &[
            "03-mathematical-framework.md",
            "04-category-theory.md",
            "05-quantum-formalism.md",
        ],
    ),
    (
        "Part III: Problem Analysis",
        &[
            "06-problem-space.md",
            "07-resilience-analysis.md",
            "08-safety-guarantees.md",
        ],
    ),
    (
        "Part IV: Implementation Specification",
        &[
            "09-implementation-roadmap.md",
            "10-typescript-architecture.md",
            "11-rust-components.md",
            "12-integration.md",
        ],
    ),
    (
        "Part V: Practical Implementation",
        &[
            "minimal-viable-aura.md",
            "pragmatic-tradeoffs.md",
            "failure-modes.md",
            "benchmarks-realistic.md",
        ],
    ),
    (
        "Appendices",
        &[
            "A-glossary.md",
            "B-proofs.md",
            "C-benchmarks.md",
            "D-symbols.md",
            "boundary-analysis.md",
        ],
    ),
];

/// One section of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestSection {
    /// Section label
    pub title: String,

    /// Document identifiers, in order
    pub documents: Vec<String>,
}

/// Deserialized manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Document title
    #[serde(default = "default_title")]
    pub title: String,

    /// Base directory for documents
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Output file
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// JSON metadata file supplying `version`
    #[serde(default)]
    pub version_file: Option<PathBuf>,

    /// Fixed version string
    #[serde(default)]
    pub version: Option<String>,

    /// Table-of-contents heading
    #[serde(default)]
    pub toc_title: Option<String>,

    /// Sections in order
    pub sections: Vec<ManifestSection>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| MergeError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse manifest text; `origin` is used in error messages only.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| MergeError::ManifestParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// The built-in manifest used when no manifest file exists.
    pub fn builtin() -> Self {
        Self {
            title: "AURA: Adaptive Unified Resonance Architecture".to_string(),
            base_dir: Some(PathBuf::from("docs")),
            output: Some(PathBuf::from("docs").join(DEFAULT_OUTPUT)),
            version_file: Some(PathBuf::from("package.json")),
            version: None,
            toc_title: None,
            sections: BUILTIN_SECTIONS
                .iter()
                .map(|(title, documents)| ManifestSection {
                    title: title.to_string(),
                    documents: documents.iter().map(|d| d.to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Find the manifest to use.
    ///
    /// An explicit path must exist. Otherwise [`DEFAULT_MANIFEST`] in `cwd` is
    /// used if present, else [`Manifest::builtin`]. Returns the manifest with
    /// the directory its relative paths are resolved against.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, PathBuf)> {
        let candidate = match explicit {
            Some(path) => Some(cwd.join(path)),
            None => {
                let default = cwd.join(DEFAULT_MANIFEST);
                default.is_file().then_some(default)
            }
        };

        match candidate {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading manifest");
                let manifest = Self::load(&path)?;
                let root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.to_path_buf());
                Ok((manifest, root))
            }
            None => {
                tracing::debug!("no manifest found, using built-in document order");
                Ok((Self::builtin(), cwd.to_path_buf()))
            }
        }
    }

    /// Turn the manifest into a config builder, resolving paths against `root`.
    pub fn into_builder(self, root: &Path) -> Result<MergeConfigBuilder> {
        let version_source = match (self.version, self.version_file) {
            (Some(_), Some(_)) => {
                return Err(MergeError::InvalidConfig(
                    "set either 'version' or 'version_file', not both".to_string(),
                ))
            }
            (Some(version), None) => VersionSource::Fixed(version),
            (None, Some(file)) => VersionSource::MetadataFile(root.join(file)),
            (None, None) => VersionSource::default(),
        };

        let mut builder = MergeConfig::builder()
            .title(self.title)
            .base_dir(root.join(self.base_dir.unwrap_or_else(|| PathBuf::from("."))))
            .output(root.join(self.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))))
            .version_source(version_source);

        if let Some(toc_title) = self.toc_title {
            builder = builder.toc_title(toc_title);
        }
        for section in self.sections {
            builder = builder.section(section.title).documents(section.documents);
        }
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_manifest() {
        let text = r#"{
            "title": "Site Docs",
            "base_dir": "docs",
            "output": "build/full.md",
            "version_file": "package.json",
            "toc_title": "Table of Contents",
            "sections": [
                { "title": "Intro", "documents": ["a.md", "b.md"] },
                { "title": "Appendix", "documents": ["z.md"] }
            ]
        }"#;

        let manifest = Manifest::parse(text, Path::new("docmerge.json")).unwrap();

        assert_eq!(manifest.title, "Site Docs");
        assert_eq!(manifest.sections.len(), 2);
        assert_eq!(manifest.sections[0].documents, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_minimal_manifest_uses_defaults() {
        let manifest =
            Manifest::parse(r#"{ "sections": [] }"#, Path::new("m.json")).unwrap();
        assert_eq!(manifest.title, DEFAULT_TITLE);
        assert_eq!(manifest.base_dir, None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Manifest::parse(r#"{ "sections": [], "colour": "red" }"#, Path::new("m.json"))
            .unwrap_err();
        assert!(matches!(err, MergeError::ManifestParse { .. }));
    }

    #[test]
    fn test_into_builder_resolves_against_root() {
        let text = r#"{
            "base_dir": "docs",
            "output": "out/full.md",
            "version_file": "package.json",
            "sections": [{ "title": "S", "documents": ["a.md"] }]
        }"#;
        let manifest = Manifest::parse(text, Path::new("m.json")).unwrap();

        let config = manifest
            .into_builder(Path::new("/project"))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.base_dir, PathBuf::from("/project/docs"));
        assert_eq!(config.output, PathBuf::from("/project/out/full.md"));
        assert_eq!(
            config.version_source,
            VersionSource::MetadataFile(PathBuf::from("/project/package.json"))
        );
        assert_eq!(config.documents[0].section, "S");
    }

    #[test]
    fn test_version_and_version_file_conflict() {
        let text = r#"{ "version": "1.0.0", "version_file": "package.json", "sections": [] }"#;
        let manifest = Manifest::parse(text, Path::new("m.json")).unwrap();
        assert!(manifest.into_builder(Path::new(".")).is_err());
    }

    #[test]
    fn test_builtin_manifest_is_valid() {
        let config = Manifest::builtin()
            .into_builder(Path::new("."))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.documents.len(), 22);
        assert_eq!(config.documents[0].id, "00-foundations.md");
        assert_eq!(config.documents[21].section, "Appendices");
    }

    #[test]
    fn test_discover_prefers_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_MANIFEST),
            r#"{ "title": "Local", "sections": [] }"#,
        )
        .unwrap();

        let (manifest, root) = Manifest::discover(None, dir.path()).unwrap();

        assert_eq!(manifest.title, "Local");
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_discover_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let (manifest, _) = Manifest::discover(None, dir.path()).unwrap();
        assert_eq!(manifest, Manifest::builtin());
    }

    #[test]
    fn test_discover_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::discover(Some(Path::new("nope.json")), dir.path()).unwrap_err();
        assert!(matches!(err, MergeError::ManifestRead { .. }));
    }
}
