//! Version resolution from project metadata
//!
//! Resolution never fails: any problem with the metadata file falls back to
//! [`DEFAULT_VERSION`] and records why.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Version used when no usable version can be found.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Where the version string comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// A fixed version string
    Fixed(String),

    /// A JSON metadata file with a top-level `version` field (e.g. `package.json`)
    MetadataFile(PathBuf),
}

impl Default for VersionSource {
    fn default() -> Self {
        VersionSource::Fixed(DEFAULT_VERSION.to_string())
    }
}

/// A resolved version, with the reason for falling back if it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// The version string to use
    pub version: String,

    /// Why the default was used, if it was
    pub fallback_reason: Option<String>,
}

impl ResolvedVersion {
    fn fallback(reason: String) -> Self {
        tracing::warn!(%reason, version = DEFAULT_VERSION, "using default version");
        Self {
            version: DEFAULT_VERSION.to_string(),
            fallback_reason: Some(reason),
        }
    }

    /// Whether the default version was substituted.
    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

#[derive(Deserialize)]
struct Metadata {
    version: Option<serde_json::Value>,
}

impl VersionSource {
    /// Resolve the version string. Never fails.
    pub fn resolve(&self) -> ResolvedVersion {
        match self {
            VersionSource::Fixed(version) => ResolvedVersion {
                version: version.clone(),
                fallback_reason: None,
            },
            VersionSource::MetadataFile(path) => {
                let text = match fs::read_to_string(path) {
                    Ok(text) => text,
                    Err(err) => {
                        return ResolvedVersion::fallback(format!(
                            "cannot read {}: {}",
                            path.display(),
                            err
                        ))
                    }
                };

                let metadata: Metadata = match serde_json::from_str(&text) {
                    Ok(metadata) => metadata,
                    Err(err) => {
                        return ResolvedVersion::fallback(format!(
                            "cannot parse {}: {}",
                            path.display(),
                            err
                        ))
                    }
                };

                match metadata.version {
                    Some(serde_json::Value::String(version)) if !version.trim().is_empty() => {
                        ResolvedVersion {
                            version: version.trim().to_string(),
                            fallback_reason: None,
                        }
                    }
                    _ => ResolvedVersion::fallback(format!(
                        "{} has no version field",
                        path.display()
                    )),
                }
            }
        }
    }
}
