//! Identifier casing and sanitization.
//!
//! Pure string transforms applied to generated type names and member keys.

/// Collapse separator runs (`-`, `_`, `.`, whitespace) and uppercase the
/// character that follows each run. The first character keeps its case, so
/// already-clean names pass through unchanged.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut boundary = false;
    for c in name.chars() {
        if c == '-' || c == '_' || c == '.' || c.is_whitespace() {
            boundary = true;
        } else if boundary {
            out.extend(c.to_uppercase());
            boundary = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Quote a member key that is not a bare TypeScript identifier.
pub fn sanitize_key(name: &str) -> String {
    let bare = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if bare {
        name.to_string()
    } else {
        format!("\"{}\"", name)
    }
}
