use serde::Deserialize;

pub const TOGGLE_ENDPOINT: &str = "/api/favorites/toggle";

/// Body returned by the toggle endpoint. Anything that does not parse into
/// this shape is treated as not-favorited.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ToggleResponse {
    pub favorite: bool,
}

/// Build the toggle request URL for a card id. The id goes into the query
/// string percent-encoded; an empty id still produces an `id=` parameter.
pub fn toggle_url(id: &str) -> String {
    format!("{}?id={}", TOGGLE_ENDPOINT, urlencoding::encode(id))
}

/// Interpret a toggle response body. Only a JSON object with
/// `"favorite": true` counts as favorited.
pub fn favorited(body: &str) -> bool {
    serde_json::from_str::<ToggleResponse>(body)
        .map(|res| res.favorite)
        .unwrap_or(false)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_toggle_url_plain_id() {
        assert_eq!(toggle_url("42"), "/api/favorites/toggle?id=42");
    }

    #[test]
    fn test_toggle_url_encodes_spaces() {
        assert_eq!(toggle_url("a b"), "/api/favorites/toggle?id=a%20b");
    }

    #[test]
    fn test_toggle_url_encodes_reserved_characters() {
        assert_eq!(
            toggle_url("swsh3/136&x=1"),
            "/api/favorites/toggle?id=swsh3%2F136%26x%3D1"
        );
    }

    #[test]
    fn test_toggle_url_empty_id() {
        assert_eq!(toggle_url(""), "/api/favorites/toggle?id=");
    }

    #[test]
    fn test_favorited_true() {
        assert!(favorited(r#"{"favorite": true}"#));
    }

    #[test]
    fn test_favorited_false() {
        assert!(!favorited(r#"{"favorite": false}"#));
    }

    #[test]
    fn test_favorited_extra_fields() {
        assert!(favorited(r#"{"favorite": true, "id": "42"}"#));
    }

    #[test]
    fn test_favorited_missing_field() {
        assert!(!favorited("{}"));
    }

    #[test]
    fn test_favorited_wrong_type() {
        assert!(!favorited(r#"{"favorite": "yes"}"#));
    }

    #[test]
    fn test_favorited_empty_body() {
        assert!(!favorited(""));
    }

    #[test]
    fn test_favorited_html_error_page() {
        assert!(!favorited("<html><body>500 Internal Server Error</body></html>"));
    }
}
