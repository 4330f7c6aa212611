//! Header rendering and final document assembly

use chrono::NaiveDate;

use crate::document::DocumentRecord;

/// Horizontal rule placed between the table of contents and the documents.
const TOC_RULE: &str = "\n---\n\n";

/// Horizontal rule placed between two document blocks.
const BLOCK_RULE: &str = "\n\n---\n";

/// Values baked into the merged document's title block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Document title
    pub title: String,

    /// Resolved version string
    pub version: String,

    /// Generation date
    pub generated_on: NaiveDate,
}

impl Header {
    /// Text of the headings [`render_header`] emits, in output order.
    pub fn headings(&self) -> [String; 2] {
        [self.title.clone(), format!("Version {}", self.version)]
    }
}

/// Render the title block, ending with a horizontal rule.
pub fn render_header(header: &Header) -> String {
    format!(
        "# {title}\n\
         ## Version {version}\n\
         \n\
         *This document merges every source document into one file, in reading order.*\n\
         \n\
         **Generated:** {date} (automatically generated)\n\
         \n\
         ---\n\
         \n",
        title = header.title,
        version = header.version,
        date = header.generated_on.format("%Y-%m-%d"),
    )
}

/// Marker comment that opens a document block.
pub fn block_marker(title: &str) -> String {
    format!("<!-- ===== {} ===== -->", title)
}

/// Concatenate header, table of contents and document bodies.
///
/// Each document block opens with a marker comment carrying its title and is
/// followed by a horizontal rule, except the last one.
pub fn assemble(header: &str, toc: &str, records: &[DocumentRecord]) -> String {
    let body_len: usize = records
        .iter()
        .map(|r| r.content.len() + r.title.len() + 32)
        .sum();
    let mut out = String::with_capacity(header.len() + toc.len() + body_len);

    out.push_str(header);
    out.push_str(toc);
    out.push_str(TOC_RULE);

    for (i, record) in records.iter().enumerate() {
        out.push_str("\n\n");
        out.push_str(&block_marker(&record.title));
        out.push_str("\n\n");
        out.push_str(&record.content);

        if i + 1 < records.len() {
            out.push_str(BLOCK_RULE);
        }
    }

    out
}
