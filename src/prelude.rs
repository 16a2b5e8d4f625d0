//! Prelude module for the Bookshelf library
//!
//! Re-exports the items needed to drive both screens with a single
//! `use bookshelf::prelude::*;`.
//!
//! ```rust,no_run
//! use bookshelf::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::load(None).await?;
//!     let client = Arc::new(CatalogClient::new(
//!         &config.client.to_runtime_config(),
//!         config.endpoints.clone(),
//!     )?);
//!     let signup = SignUpScreen::new(Arc::clone(&client), SignUpPolicy::default());
//!     signup.enter().await;
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, FetchError, Result};

pub use crate::app::{
    BookshelfScreen, Book, CatalogClient, ClientConfig, Country, Notice, ShelfView, SignUpOutcome,
    SignUpPolicy, SignUpScreen, YearShelf, YearZone,
    // Pure functions
    decide_sign_up, default_year, validate_email, validate_password,
};
pub use crate::config::AppConfig;

pub use std::sync::Arc;
