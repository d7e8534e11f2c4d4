//! DOM engine errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Search text must not be empty")]
    EmptyQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_display() {
        let err = DomError::InvalidSelector {
            selector: "div[".to_string(),
            message: "unexpected end".to_string(),
        };
        assert!(err.to_string().contains("div["));
        assert!(err.to_string().contains("unexpected end"));
    }

    #[test]
    fn test_empty_query_display() {
        assert!(DomError::EmptyQuery.to_string().contains("empty"));
    }
}
