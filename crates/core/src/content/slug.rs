//! Slug helpers.
//!
//! A slug is derived from the post title unless the author sets one by hand.

/// Derive a URL slug from a title.
///
/// Lowercases and trims, drops everything outside `[a-z0-9]`, whitespace and
/// `-`, then turns whitespace runs into `-` and collapses repeated dashes.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut prev_dash = false;

    for ch in lowered.trim().chars() {
        let ch = match ch {
            'a'..='z' | '0'..='9' => ch,
            '-' => '-',
            c if c.is_whitespace() => '-',
            _ => continue,
        };
        if ch == '-' {
            if prev_dash {
                continue;
            }
            prev_dash = true;
        } else {
            prev_dash = false;
        }
        slug.push(ch);
    }
    slug
}

/// True when every character is URL-unreserved (`A-Z a-z 0-9 - . _ ~`).
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_title() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Stripe  +  Webhooks  "), "stripe-webhooks");
        assert_eq!(slugify("Top 10 CMS -- Compared"), "top-10-cms-compared");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        assert_eq!(slugify("Café Déjà Vu"), "caf-dj-vu");
    }

    #[test]
    fn slugify_keeps_trailing_dash_from_dropped_punctuation() {
        assert_eq!(slugify("Why ?"), "why-");
    }

    #[test]
    fn slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn url_safe_slugs() {
        assert!(is_url_safe("hello-world"));
        assert!(is_url_safe("v1.2_release~notes"));
        assert!(!is_url_safe(""));
        assert!(!is_url_safe("hello world"));
        assert!(!is_url_safe("a/b"));
        assert!(!is_url_safe("naïve"));
    }
}
