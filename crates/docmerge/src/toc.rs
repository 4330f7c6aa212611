//! Table-of-contents generation
//!
//! Records are grouped by section label in first-seen order. Entries are
//! numbered globally, so numbering continues across section boundaries.

use indexmap::IndexMap;

use crate::document::DocumentRecord;
use crate::slug::Slugger;

/// Default heading for the table of contents.
pub const DEFAULT_TOC_TITLE: &str = "Contents";

/// A named group of records, in document order.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    /// Section label
    pub title: &'a str,

    /// Records in this section
    pub records: Vec<&'a DocumentRecord>,
}

fn group_indices(records: &[DocumentRecord]) -> IndexMap<&str, Vec<usize>> {
    let mut groups: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (index, record) in records.iter().enumerate() {
        groups.entry(record.section.as_str()).or_default().push(index);
    }
    groups
}

/// Group records into sections by label, keeping first-seen order.
pub fn group_sections(records: &[DocumentRecord]) -> Vec<Section<'_>> {
    group_indices(records)
        .into_iter()
        .map(|(title, indices)| Section {
            title,
            records: indices.into_iter().map(|i| &records[i]).collect(),
        })
        .collect()
}

/// Render the table of contents with the default heading.
pub fn build_toc(records: &[DocumentRecord]) -> String {
    build_toc_titled(DEFAULT_TOC_TITLE, records)
}

/// Render the table of contents under a custom heading.
pub fn build_toc_titled(heading: &str, records: &[DocumentRecord]) -> String {
    build_toc_after(&[], heading, records)
}

/// Render the table of contents when `preceding` headings (such as the
/// document header) come before it in the output.
///
/// Anchors skip the slugs of the preceding headings, the contents heading
/// and every section heading, so each link lands on its document.
pub fn build_toc_after(preceding: &[&str], heading: &str, records: &[DocumentRecord]) -> String {
    let groups = group_indices(records);

    let mut slugger = Slugger::new();
    for generated in preceding.iter().copied().chain([heading]).chain(groups.keys().copied()) {
        slugger.reserve(generated);
    }
    let anchors: Vec<String> = records.iter().map(|r| slugger.slug(&r.title)).collect();

    let mut toc = format!("# {}\n\n", heading);
    let mut number = 1;

    for (section, indices) in &groups {
        toc.push_str(&format!("## {}\n\n", section));
        for &index in indices {
            let record = &records[index];
            toc.push_str(&format!(
                "{}. {} [{}](#{})\n",
                number,
                record.status.glyph(),
                record.title,
                anchors[index]
            ));
            number += 1;
        }
        toc.push('\n');
    }

    toc
}
