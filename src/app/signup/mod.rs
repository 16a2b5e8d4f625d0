//! Sign-up flow: country picker backed by a one-shot fetch, plus field
//! validation and the submission decision.

pub mod screen;
pub mod validation;

pub use screen::SignUpScreen;
pub use validation::{
    decide_sign_up, validate_email, validate_password, SignUpForm, SignUpOutcome, SignUpPolicy,
};
