//! Application constants for Bookshelf
//!
//! Grouped by functional domain, mirroring the configuration sections.

use std::time::Duration;

/// Remote catalog endpoints
pub mod endpoints {
    /// Base URL hosting both JSON documents
    pub const BASE_URL: &str = "https://www.jsonkeeper.com";

    /// Path of the countries document
    pub const COUNTRIES_PATH: &str = "/b/IU1K";

    /// Path of the books document
    pub const BOOKS_PATH: &str = "/b/CNGI";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = concat!("Bookshelf/", env!("CARGO_PKG_VERSION"));

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Environment variable names
pub mod env {
    /// Overrides the configured endpoint base URL
    pub const BASE_URL: &str = "BOOKSHELF_BASE_URL";
}

/// User-facing notice texts
pub mod messages {
    /// Shown when sign-up input fails validation
    pub const INVALID_SIGN_UP: &str = "Invalid email or password";

    /// Country picker label while nothing is selected
    pub const SELECT_COUNTRY: &str = "Select Country";

    /// Shelf placeholder when the fetch returned no books
    pub const NO_BOOKS_AVAILABLE: &str = "No books available";
}

/// Field validation rules
pub mod validation {
    /// Minimum password length in characters
    pub const MIN_PASSWORD_LENGTH: usize = 8;

    /// Characters accepted as the required special character
    pub const PASSWORD_SPECIALS: &str = "!@#$%^&*(),";

    /// Email grammar used by common mobile platforms, matched over the whole input
    pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$";
}

/// Publication timestamp bounds
pub mod time {
    /// Latest accepted publication timestamp (9999-12-31T23:59:59Z)
    pub const MAX_PUBLISHED_SECS: i64 = 253_402_300_799;
}

// Re-export commonly used constants at the top level
pub use endpoints::BASE_URL;
pub use http::USER_AGENT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths_are_absolute() {
        assert!(endpoints::COUNTRIES_PATH.starts_with('/'));
        assert!(endpoints::BOOKS_PATH.starts_with('/'));
        assert!(BASE_URL.starts_with("https://"));
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("Bookshelf/"));
    }
}
