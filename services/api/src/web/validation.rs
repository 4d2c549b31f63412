//! services/api/src/web/validation.rs
//!
//! Request-field checks shared by the write routes. Each check runs before any
//! store, provider or notifier is touched.

use crate::error::ApiError;
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`, no whitespace, exactly one `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Rejects empty and whitespace-only values.
pub fn require_text(field: &'static str, value: &str, message: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(field, message));
    }
    Ok(())
}

pub fn require_email(field: &'static str, value: &str) -> Result<(), ApiError> {
    if !EMAIL_PATTERN.is_match(value.trim()) {
        return Err(ApiError::validation(field, "Invalid email address"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        for value in ["", " ", "\n\t "] {
            let err = require_text("message", value, "Message is required").unwrap_err();
            assert!(matches!(
                err,
                ApiError::Validation { field: "message", ref message } if message == "Message is required"
            ));
        }
        assert!(require_text("message", " hi ", "Message is required").is_ok());
    }

    #[test]
    fn email_syntax() {
        for good in ["a@b.com", "first.last+tag@sub.example.org", " a@b.co "] {
            assert!(require_email("email", good).is_ok(), "{good} should pass");
        }
        for bad in ["not-an-email", "a@b", "@b.com", "a@@b.com", "a b@c.com", "a@b .com", ""] {
            assert!(require_email("email", bad).is_err(), "{bad} should fail");
        }
    }
}
