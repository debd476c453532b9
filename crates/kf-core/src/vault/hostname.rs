/// Strip the scheme prefix from a stored hostname.
///
/// Login storage keeps the origin as entered (`https://example.com`); list
/// titles and alphabetical ordering use the bare hostname.
pub fn normalize_hostname(raw: &str) -> &str {
    raw.strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_http_scheme() {
        assert_eq!(normalize_hostname("http://meow"), "meow");
    }

    #[test]
    fn strips_https_scheme() {
        assert_eq!(normalize_hostname("https://accounts.example.com"), "accounts.example.com");
    }

    #[test]
    fn leaves_bare_hostname_untouched() {
        assert_eq!(normalize_hostname("example.com"), "example.com");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_hostname(""), "");
    }

    #[test]
    fn only_leading_scheme_is_stripped() {
        assert_eq!(normalize_hostname("ftp://example.com"), "ftp://example.com");
        assert_eq!(normalize_hostname("example.com/http://x"), "example.com/http://x");
    }
}
