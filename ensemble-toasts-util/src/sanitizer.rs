/// Escape plain text for insertion into toast markup.
///
/// Toast messages are always plain text. Anything that looks like markup is
/// shown literally rather than interpreted.
pub fn escape_text(text: &str) -> String {
    ammonia::clean_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_tags() {
        let escaped = escape_text("<script>alert('x')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(escaped.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_ampersand_and_quotes() {
        let escaped = escape_text(r#"Tom & "Jerry""#);
        assert!(escaped.contains("&amp;"));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn test_escape_keeps_plain_letters() {
        let escaped = escape_text("Soubor");
        assert_eq!(escaped, "Soubor");
        assert!(escape_text("vytvořen").contains('ř'));
    }
}
