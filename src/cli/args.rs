//! Command-line argument parsing for Bookshelf
//!
//! Each subcommand drives one screen model the way the mobile screens did:
//! enter, interact, print what the screen would show.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Bookshelf - sign up and browse books by publication year
#[derive(Parser, Debug)]
#[command(
    name = "bookshelf",
    version,
    about = "Sign up and browse a remote bookshelf grouped by publication year",
    long_about = "Fetches the country list for sign-up and the book list for the shelf from JSON endpoints.
Each list is fetched once per run; failures are reported and never retried."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the endpoint base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the countries offered by the sign-up form
    Countries,

    /// Show the bookshelf
    Books(BooksArgs),

    /// Fill in and submit the sign-up form
    Signup(SignUpArgs),
}

/// Arguments for the books command
#[derive(Args, Debug, Clone, Default)]
pub struct BooksArgs {
    /// Year tab to show instead of the most recent one
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for the sign-up command
#[derive(Args, Debug, Clone)]
pub struct SignUpArgs {
    /// Email address
    #[arg(short, long)]
    pub email: String,

    /// Password (prompted without echo when omitted)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Country name as listed by the countries command
    #[arg(short, long)]
    pub country: Option<String>,

    /// Year tab to show after a successful sign-up
    #[arg(short, long)]
    pub year: Option<i32>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Logging level requested on the command line, if any
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let cli_quiet = Cli {
            global: GlobalArgs {
                quiet: true,
                ..Default::default()
            },
            command: Commands::Countries,
        };

        let cli_verbose = Cli {
            global: GlobalArgs {
                verbose: true,
                ..Default::default()
            },
            command: Commands::Countries,
        };

        let cli_default = Cli {
            global: GlobalArgs::default(),
            command: Commands::Books(BooksArgs::default()),
        };

        assert_eq!(cli_quiet.log_level(), Some(tracing::Level::ERROR));
        assert_eq!(cli_verbose.log_level(), Some(tracing::Level::INFO));
        assert_eq!(cli_default.log_level(), None);
    }

    #[test]
    fn test_parse_signup() {
        let cli = Cli::try_parse_from([
            "bookshelf",
            "signup",
            "--email",
            "a@b.com",
            "--country",
            "Chile",
            "--base-url",
            "http://127.0.0.1:8080",
        ])
        .unwrap();

        assert_eq!(cli.global.base_url.as_deref(), Some("http://127.0.0.1:8080"));
        match cli.command {
            Commands::Signup(args) => {
                assert_eq!(args.email, "a@b.com");
                assert_eq!(args.country.as_deref(), Some("Chile"));
                assert!(args.password.is_none());
            }
            other => panic!("Expected signup, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_books_year() {
        let cli = Cli::try_parse_from(["bookshelf", "-v", "books", "--year", "2020"]).unwrap();
        assert!(cli.global.verbose);
        assert!(matches!(cli.command, Commands::Books(BooksArgs { year: Some(2020) })));
    }

    #[test]
    fn test_signup_requires_email() {
        assert!(Cli::try_parse_from(["bookshelf", "signup"]).is_err());
    }
}
