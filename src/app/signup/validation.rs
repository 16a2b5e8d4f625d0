//! Sign-up field validation and submission decision
//!
//! Pure functions; no I/O.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::validation::{EMAIL_PATTERN, MIN_PASSWORD_LENGTH, PASSWORD_SPECIALS};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Whether `email` is a syntactically valid address
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Whether `password` satisfies every strength rule:
/// at least 8 characters, a digit, a lowercase and an uppercase letter,
/// one of `!@#$%^&*(),` and no whitespace.
pub fn validate_password(password: &str) -> bool {
    let mut has_digit = false;
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_special = false;
    let mut length = 0;

    for c in password.chars() {
        if c.is_whitespace() {
            return false;
        }
        length += 1;
        has_digit |= c.is_ascii_digit();
        has_lower |= c.is_ascii_lowercase();
        has_upper |= c.is_ascii_uppercase();
        has_special |= PASSWORD_SPECIALS.contains(c);
    }

    length >= MIN_PASSWORD_LENGTH && has_digit && has_lower && has_upper && has_special
}

/// Current contents of the sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    /// Selected country name, empty when nothing is selected
    pub country: String,
}

/// Rules applied on submission beyond field validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignUpPolicy {
    /// Reject submissions without a selected country
    pub require_country: bool,
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    Accepted { email: String, country: String },
    /// Invalid email or password, reported without per-field detail
    Rejected,
}

impl SignUpOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SignUpOutcome::Accepted { .. })
    }
}

/// Decides whether the form may be submitted
pub fn decide_sign_up(form: &SignUpForm, policy: &SignUpPolicy) -> SignUpOutcome {
    let fields_valid = validate_email(&form.email) && validate_password(&form.password);
    let country_ok = !policy.require_country || !form.country.trim().is_empty();

    if fields_valid && country_ok {
        SignUpOutcome::Accepted {
            email: form.email.clone(),
            country: form.country.clone(),
        }
    } else {
        SignUpOutcome::Rejected
    }
}
