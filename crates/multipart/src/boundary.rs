const BOUNDARY_PARAM: &str = "boundary=";

/// Extract the boundary token from a `Content-Type` header value.
///
/// The token runs until the first whitespace or `;`. A quoted token has its
/// quotes removed. Returns `None` when the parameter is absent or empty.
pub fn boundary(content_type: &str) -> Option<&str> {
    let start = find_ignore_ascii_case(content_type, BOUNDARY_PARAM)? + BOUNDARY_PARAM.len();
    let rest = &content_type[start..];
    let end = rest
        .find(|c: char| c.is_whitespace() || c == ';')
        .unwrap_or(rest.len());
    let token = &rest[..end];
    let token = token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token);

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}
