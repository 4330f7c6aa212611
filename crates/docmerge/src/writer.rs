//! Output writing

use std::fs;
use std::path::Path;

use crate::error::{MergeError, Result};

/// Size figures for a written document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteStats {
    /// Length in bytes (UTF-8)
    pub bytes: usize,

    /// Number of Unicode scalar values
    pub chars: usize,
}

impl WriteStats {
    /// Compute stats for `content` without writing anything.
    pub fn of(content: &str) -> Self {
        Self {
            bytes: content.len(),
            chars: content.chars().count(),
        }
    }

    /// Size in mebibytes.
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Overwrite `path` with `content` in a single write.
///
/// Missing parent directories are created. The write is not atomic.
pub fn write_output(path: &Path, content: &str) -> Result<WriteStats> {
    let wrap = |source: std::io::Error| MergeError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, content).map_err(wrap)?;

    let stats = WriteStats::of(content);
    tracing::info!(path = %path.display(), bytes = stats.bytes, "wrote merged document");
    Ok(stats)
}
