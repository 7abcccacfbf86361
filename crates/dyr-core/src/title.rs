//! Title derivation and filesystem-safe sanitization.

/// Characters that cannot appear in a file name on common filesystems.
const FORBIDDEN: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// True if `c` must be replaced before the title is used as a path component.
pub fn is_forbidden(c: char) -> bool {
    FORBIDDEN.contains(&c)
}

/// Replaces each forbidden character with `_`, one for one.
///
/// No trimming and no collapsing of repeated `_`; `derive_title` trims first.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect()
}

/// Builds the result title from an optional description.
///
/// Blank descriptions fall back to `<prefix>_<content_id>`. The fallback goes
/// through the same sanitizer as a real description.
pub fn derive_title(description: Option<&str>, prefix: &str, content_id: &str) -> String {
    let trimmed = description.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        sanitize_title(&format!("{}_{}", prefix, content_id))
    } else {
        sanitize_title(trimmed)
    }
}
