//! One-shot user notices
//!
//! Each fetch failure and each sign-up decision produces at most one notice.
//! The front end shows it once and forgets it.

use std::fmt;

use crate::constants::messages;
use crate::errors::FetchError;

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A fetch failed
    FetchFailed { noun: &'static str, error: FetchError },
    /// Sign-up input was accepted
    SignedUp { email: String, country: String },
    /// Sign-up input was rejected
    InvalidSignUp,
}

impl Notice {
    pub fn fetch_failed(noun: &'static str, error: FetchError) -> Self {
        Notice::FetchFailed { noun, error }
    }

    /// Whether this notice reports a problem
    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::SignedUp { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::FetchFailed { error, noun } => match error {
                FetchError::Network(message) => write!(f, "Error: {}", message),
                FetchError::Server { .. } => write!(f, "Failed to fetch {}", noun),
                FetchError::EmptyResult => write!(f, "No {} found", noun),
            },
            Notice::SignedUp { email, country } => {
                write!(f, "Sign up successful for {} in {}", email, country)
            }
            Notice::InvalidSignUp => write!(f, "{}", messages::INVALID_SIGN_UP),
        }
    }
}
