//! HTML escaping for author-supplied text.

/// Escape HTML special characters.
///
/// Applied to every free-text field except the designated rich-text fields
/// (`text`/`text_image` content, `cta`/`benefits` heading, `cta` content),
/// which are sanitised by the admin editor before they reach storage.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_html_plain_unchanged() {
        assert_eq!(escape_html("Fire safety audit"), "Fire safety audit");
    }
}
