//! Title extraction from Markdown content

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // A single `#`, horizontal whitespace, then text. `##` never matches.
    PATTERN.get_or_init(|| Regex::new(r"(?m)^#[ \t]+(\S.*)$").expect("valid heading regex"))
}

/// Return the text of the first level-1 heading in `content`.
///
/// Only the first matching line is considered; later headings of any level
/// are ignored.
///
/// # Example
///
/// ```
/// use docmerge::extract_title;
///
/// assert_eq!(extract_title("# Hello World\nbody"), Some("Hello World"));
/// assert_eq!(extract_title("## Not a title\n"), None);
/// ```
pub fn extract_title(content: &str) -> Option<&str> {
    heading_pattern()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|title| !title.is_empty())
}

/// Title used when a document has no level-1 heading: the identifier with
/// its extension stripped.
pub fn fallback_title(id: &str) -> String {
    Path::new(id)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| id.to_string())
}

/// Extracted title, or the fallback when there is none.
pub fn title_for(id: &str, content: &str) -> String {
    extract_title(content)
        .map(str::to_string)
        .unwrap_or_else(|| fallback_title(id))
}
