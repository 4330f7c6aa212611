//! Anchor slugs for table-of-contents links

use std::collections::{HashMap, HashSet};

/// Slug used when a title has no alphanumeric characters.
const EMPTY_SLUG: &str = "section";

/// Turn a title into an anchor slug.
///
/// Lowercases, drops every character that is not alphanumeric, whitespace,
/// `-` or `_`, and collapses whitespace runs into a single `-`.
///
/// # Example
///
/// ```
/// use docmerge::slugify;
///
/// assert_eq!(slugify("A Title"), "a-title");
/// assert_eq!(slugify("What's  new?"), "whats-new");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_space = false;

    for ch in title.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !(ch.is_alphanumeric() || ch == '-' || ch == '_') {
            continue;
        }
        if pending_space && !slug.is_empty() {
            slug.push('-');
        }
        pending_space = false;
        slug.extend(ch.to_lowercase());
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// Hands out unique slugs, suffixing `-1`, `-2`, ... on collision.
///
/// # Example
///
/// ```
/// use docmerge::Slugger;
///
/// let mut slugger = Slugger::new();
/// assert_eq!(slugger.slug("Intro"), "intro");
/// assert_eq!(slugger.slug("Intro"), "intro-1");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Slugger {
    /// Every slug handed out so far
    used: HashSet<String>,

    /// Next suffix to try, per base slug
    next_suffix: HashMap<String, usize>,
}

impl Slugger {
    /// Create a slugger with no slugs handed out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique slug for `title`.
    pub fn slug(&mut self, title: &str) -> String {
        let base = slugify(title);
        if self.used.insert(base.clone()) {
            return base;
        }

        let next = self.next_suffix.entry(base.clone()).or_insert(1);
        loop {
            let candidate = format!("{}-{}", base, next);
            *next += 1;
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Claim the slug of a heading that precedes the ones being linked.
    pub fn reserve(&mut self, heading: &str) {
        self.slug(heading);
    }
}
