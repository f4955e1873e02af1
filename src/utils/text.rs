//! Escaping and URL cleanup for untrusted data-file text.
//!
//! Every free-text field that ends up in generated markup goes through
//! [`escape_html`], including values placed in attribute position.

/// Escapes the five HTML-significant characters.
///
/// Ampersand is substituted first so the entities introduced by the later
/// substitutions are not double-escaped.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Rewrites a loosely-formatted link string into an absolute URL.
///
/// Empty input stays empty and the caller treats it as "absent". Fragment
/// markers, mail/phone schemes and explicit http(s) URLs pass through
/// unchanged; anything else is assumed to be a bare domain, gets its leading
/// slashes stripped and an `https://` prefix. Reachability is not checked.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('#')
        || trimmed.starts_with("mailto:")
        || trimmed.starts_with("tel:")
        || trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
    {
        return trimmed.to_string();
    }
    format!("https://{}", trimmed.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_removes_all_significant_chars() {
        let escaped = escape_html(r#"<a href="x">&'"#);
        for ch in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(ch), "unescaped {:?} in {}", ch, escaped);
        }
        // A literal & may only appear as the start of an entity we produced.
        assert_eq!(escaped, "&lt;a href=&quot;x&quot;&gt;&amp;&#039;");
    }

    #[test]
    fn test_escape_html_round_trips() {
        let original = r#"5 < 6 && "quotes" aren't <b>bold</b>"#;
        let decoded = escape_html(original)
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#039;", "'")
            .replace("&amp;", "&");
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        // "&lt;" in the input must not collapse into a bare entity.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_normalize_url_bare_domain() {
        assert_eq!(normalize_url("github.com/x"), "https://github.com/x");
        assert_eq!(normalize_url("  example.com "), "https://example.com");
        assert_eq!(normalize_url("//cdn.example.com/a"), "https://cdn.example.com/a");
    }

    #[test]
    fn test_normalize_url_passthrough() {
        assert_eq!(normalize_url("https://x.com"), "https://x.com");
        assert_eq!(normalize_url("http://x.com"), "http://x.com");
        assert_eq!(normalize_url("mailto:a@b.com"), "mailto:a@b.com");
        assert_eq!(normalize_url("tel:+15550100"), "tel:+15550100");
        assert_eq!(normalize_url("#projects"), "#projects");
    }

    #[test]
    fn test_normalize_url_empty() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   "), "");
    }
}
