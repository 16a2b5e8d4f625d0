//! Command-line interface components
//!
//! Argument parsing and the handlers that drive the screen models from the
//! terminal.

pub mod args;
pub mod commands;

pub use args::{BooksArgs, Cli, Commands, GlobalArgs, SignUpArgs};
pub use commands::{handle_books, handle_countries, handle_signup, render_shelf, Session};
