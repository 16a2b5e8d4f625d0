//! Bookshelf Library
//!
//! Client-side core of a two-screen sign-up and bookshelf application: a
//! one-shot fetch of countries and books from JSON endpoints, sign-up field
//! validation, and grouping of books into publication-year tabs.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use constants::*;

    #[test]
    fn test_constants_accessible() {
        assert!(USER_AGENT.starts_with("Bookshelf/"));
        assert_eq!(validation::MIN_PASSWORD_LENGTH, 8);
    }

    #[test]
    fn test_error_types() {
        let url_error = url::Url::parse("::nope::").unwrap_err();
        let app_error = AppError::from(errors::ClientError::InvalidUrl {
            url: "::nope::".to_string(),
            error: url_error,
        });
        assert_eq!(app_error.category(), "client");
    }
}
