//! Derived fields: slug, read time and excerpt are pure functions of their
//! source fields and are recomputed whenever those fields change.

/// Reading speed assumed for the read-time estimate.
const WORDS_PER_MINUTE: u32 = 200;

/// Character budget for an auto-generated excerpt.
const EXCERPT_CHARS: usize = 200;

/// Derive a URL slug from a title.
///
/// Lowercases, drops every character outside `[a-z0-9 -]`, turns runs of
/// spaces and hyphens into a single hyphen, and never starts or ends with a
/// hyphen.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c == ' ' || c == '-' {
            pending_hyphen = true;
        }
        // every other character is dropped outright
    }

    slug
}

/// Estimated reading time in whole minutes: word count at 200 words per
/// minute, rounded up, never below one minute.
pub fn derive_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count() as u32;
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Fallback excerpt: the first 200 characters of the content followed by an
/// ellipsis.
pub fn derive_excerpt(content: &str) -> String {
    let head: String = content.chars().take(EXCERPT_CHARS).collect();
    format!("{head}...")
}
