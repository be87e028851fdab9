fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Reduce a client-supplied filename to its final path component.
///
/// Both `/` and `\` count as separators. Returns `None` when nothing usable
/// is left (`""`, `.`, `..`, or a name containing NUL).
pub fn base_name(raw: &str) -> Option<&str> {
    let trimmed = raw.trim_end_matches(is_separator);
    let name = trimmed.rsplit(is_separator).next().unwrap_or(trimmed);

    match name {
        "" | "." | ".." => None,
        n if n.contains('\0') => None,
        n => Some(n),
    }
}
