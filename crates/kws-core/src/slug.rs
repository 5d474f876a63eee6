//! URL slugs derived from display names.

/// Derive a URL-safe slug from a display name.
///
/// The name is lowercased, every run of whitespace becomes a single `-`, and
/// anything that is not an ASCII letter, digit, `_` or `-` is dropped. The
/// result depends only on the input, so the same name always yields the same
/// slug.
///
/// ```
/// use kws_core::slug::slugify;
/// assert_eq!(slugify("Multi-Crop Thresher"), "multi-crop-thresher");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_whitespace = false;

    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }

    slug
}
