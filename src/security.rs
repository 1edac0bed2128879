use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

/// Header carrying the admin API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Constant-time string comparison to prevent timing attacks
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Check the request's API key against the configured admin key.
///
/// With no admin key configured every request is refused.
pub fn is_authorized(headers: &HeaderMap, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return false;
    };
    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|provided| constant_time_compare(provided, expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_key(key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(key).unwrap());
        headers
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("secret123", "secret123"));
        assert!(!constant_time_compare("secret123", "secret124"));
        assert!(!constant_time_compare("secret123", "secret12"));
        assert!(!constant_time_compare("", "secret"));
    }

    #[test]
    fn test_authorized_with_matching_key() {
        assert!(is_authorized(&headers_with_key("admin-key"), Some("admin-key")));
    }

    #[test]
    fn test_rejected_with_wrong_key() {
        assert!(!is_authorized(&headers_with_key("guess"), Some("admin-key")));
    }

    #[test]
    fn test_rejected_without_header() {
        assert!(!is_authorized(&HeaderMap::new(), Some("admin-key")));
    }

    #[test]
    fn test_rejected_when_no_key_configured() {
        assert!(!is_authorized(&headers_with_key(""), None));
        assert!(!is_authorized(&headers_with_key("anything"), None));
    }
}
