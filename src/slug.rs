//! Slug derivation for free-text model and report labels.

/// Lowercase, hyphen-separated, URL-safe derivation of free text.
///
/// Runs of non-alphanumeric characters collapse to a single hyphen; leading
/// and trailing hyphens are dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
