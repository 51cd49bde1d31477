//! URL-safe slug derivation for article titles
//!
//! Slugs are computed once at article creation and never recomputed on
//! update; uniqueness is enforced by the database index.

/// Derive a URL-safe slug from a title
///
/// Lowercases, replaces runs of non-alphanumeric characters with a single
/// hyphen, and trims leading/trailing hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}
