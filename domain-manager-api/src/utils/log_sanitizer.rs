//! Log sanitization utilities
//!
//! Keeps large response bodies (a full domain list, an HTML error page)
//! from flooding debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary not greater than `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a string for logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (cut on a char boundary) plus the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"[{"id":"1","domain":"a.com"}]"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn long_domain_list_truncated() {
        let body = format!(
            "[{}]",
            (0..50)
                .map(|i| format!(r#"{{"id":"{i}","domain":"site{i}.example.com"}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        let result = truncate_for_log(&body);
        assert!(result.ends_with(&format!("[truncated, total {} bytes]", body.len())));
        assert!(result.len() < body.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "域".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }
}
