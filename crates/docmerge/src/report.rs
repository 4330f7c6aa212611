//! Console rendering of a merge run
//!
//! Pure string rendering; the binary decides where it goes.

use crate::document::{DocumentRecord, DocumentStatus};
use crate::pipeline::MergeReport;

/// Banner printed before the per-file lines.
pub fn banner(version: &str) -> String {
    format!("🚀 Merging documentation v{}...", version)
}

/// Per-file status lines, two per document.
pub fn progress_lines(records: &[DocumentRecord]) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len() * 2);
    for record in records {
        lines.push(format!("📖 Reading {}...", record.id));
        lines.push(match &record.status {
            DocumentStatus::Found => format!("   ✅ {}", record.title),
            DocumentStatus::Missing => "   ❌ File not found".to_string(),
            DocumentStatus::Unreadable(reason) => format!("   ❌ Read error: {}", reason),
        });
    }
    lines
}

/// End-of-run summary: output location, size, and found/missing tally.
pub fn summary(report: &MergeReport) -> String {
    let mut lines = vec![
        format!("✅ Document written: {}", report.output.display()),
        format!("📊 File size: {:.2} MB", report.stats.megabytes()),
        format!("📄 Characters: {}", report.stats.chars),
        String::new(),
        "📈 Statistics:".to_string(),
        format!(
            "   ✅ Found: {}/{} files",
            report.found_count(),
            report.total()
        ),
    ];
    if report.missing_count() > 0 {
        lines.push(format!("   ❌ Missing: {} files", report.missing_count()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::ResolvedVersion;
    use crate::writer::WriteStats;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn record(id: &str, status: DocumentStatus) -> DocumentRecord {
        DocumentRecord {
            id: id.to_string(),
            section: "S".to_string(),
            path: PathBuf::from(id),
            content: String::new(),
            title: "Title".to_string(),
            status,
        }
    }

    #[test]
    fn test_progress_lines() {
        let records = vec![
            record("a.md", DocumentStatus::Found),
            record("b.md", DocumentStatus::Missing),
            record("c.md", DocumentStatus::Unreadable("denied".into())),
        ];

        assert_eq!(
            progress_lines(&records),
            vec![
                "📖 Reading a.md...",
                "   ✅ Title",
                "📖 Reading b.md...",
                "   ❌ File not found",
                "📖 Reading c.md...",
                "   ❌ Read error: denied",
            ]
        );
    }

    #[test]
    fn test_summary_with_missing() {
        let report = MergeReport {
            output: PathBuf::from("docs/full.md"),
            version: ResolvedVersion {
                version: "1.0.0".into(),
                fallback_reason: None,
            },
            records: vec![
                record("a.md", DocumentStatus::Found),
                record("b.md", DocumentStatus::Missing),
            ],
            stats: WriteStats {
                bytes: 1024 * 1024,
                chars: 1_000,
            },
        };

        assert_eq!(
            summary(&report),
            "✅ Document written: docs/full.md\n\
             📊 File size: 1.00 MB\n\
             📄 Characters: 1000\n\
             \n\
             📈 Statistics:\n   \
             ✅ Found: 1/2 files\n   \
             ❌ Missing: 1 files\n"
        );
    }

    #[test]
    fn test_summary_without_missing_omits_line() {
        let report = MergeReport {
            output: PathBuf::from("full.md"),
            version: ResolvedVersion {
                version: "0.0.0".into(),
                fallback_reason: Some("no file".into()),
            },
            records: vec![record("a.md", DocumentStatus::Found)],
            stats: WriteStats::default(),
        };

        let text = summary(&report);
        assert!(text.contains("Found: 1/1 files"));
        assert!(!text.contains("Missing"));
    }
}
