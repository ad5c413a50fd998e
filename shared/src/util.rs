/// Derive a URL slug from a display name.
///
/// Lowercases ASCII alphanumerics, collapses every other run of characters
/// into a single `-`, and trims leading/trailing separators.
/// `"The Grand Café & Bar"` becomes `"the-grand-caf-bar"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
