//! Environment variable parsing with warn-level logging for invalid values.

/// Parse a raw variable value with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    let Some(v) = raw else {
        return default;
    };
    match v.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            tracing::warn!(var, value = %v, default = %default, "invalid env var value, using default");
            default
        },
    }
}

/// Trim a raw string value, treating blank values as unset.
pub fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PAGE_SIZE_VAR, SESSION_MAX_AGE_VAR};

    #[test]
    fn test_page_size_parses_with_surrounding_whitespace() {
        assert_eq!(parse_with_default(PAGE_SIZE_VAR, Some(" 25 "), 100_u32), 25);
    }

    #[test]
    fn test_non_numeric_page_size_falls_back() {
        assert_eq!(parse_with_default(PAGE_SIZE_VAR, Some("fifty"), 100_u32), 100);
        assert_eq!(parse_with_default(PAGE_SIZE_VAR, Some(""), 100_u32), 100);
    }

    #[test]
    fn test_negative_max_age_falls_back() {
        assert_eq!(parse_with_default(SESSION_MAX_AGE_VAR, Some("-1"), 86_400_u64), 86_400);
        assert_eq!(parse_with_default(SESSION_MAX_AGE_VAR, None, 86_400_u64), 86_400);
    }

    #[test]
    fn test_blank_api_url_is_unset() {
        assert_eq!(non_blank(Some("   ".to_owned())), None);
        assert_eq!(non_blank(Some(" https://api.example ".to_owned())).as_deref(), Some("https://api.example"));
    }
}
