//! Core application logic for Bookshelf
//!
//! This module contains the catalog HTTP client, the data models, the one-shot
//! list fetcher and the two screen models built on top of it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bookshelf::app::{BookshelfScreen, CatalogClient, ClientConfig, ShelfView, YearZone};
//! use bookshelf::config::EndpointConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(CatalogClient::new(&ClientConfig::default(), EndpointConfig::default())?);
//! let screen = BookshelfScreen::new(client, YearZone::Utc);
//!
//! if let Some(notice) = screen.enter().await {
//!     eprintln!("{}", notice);
//! }
//! if let ShelfView::Shelf { years, selected, books } = screen.view().await {
//!     println!("{:?} showing {} with {} books", years, selected, books.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod bookshelf;
pub mod client;
pub mod fetch;
pub mod models;
pub mod notice;
pub mod signup;

// Re-export main public API
pub use bookshelf::{default_year, BookshelfScreen, ShelfView, YearShelf};
pub use client::{CatalogClient, ClientConfig};
pub use fetch::{Delivery, FetchAttempt, FetchState, RemoteListFetcher};
pub use models::{Book, Country, Listing, PublishedAt, YearZone};
pub use notice::Notice;
pub use signup::{
    decide_sign_up, validate_email, validate_password, SignUpForm, SignUpOutcome, SignUpPolicy,
    SignUpScreen,
};
