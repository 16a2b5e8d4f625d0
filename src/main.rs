//! Bookshelf CLI application
//!
//! Drives the sign-up and bookshelf screens from the terminal.

use std::process;

use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use bookshelf::cli::{handle_books, handle_countries, handle_signup, Cli, Commands, Session};
use bookshelf::config::AppConfig;
use bookshelf::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();

    let mut config = AppConfig::load(cli.global.config.clone()).await?;
    if let Some(base_url) = &cli.global.base_url {
        config.endpoints.base_url = base_url.clone();
        config.validate()?;
    }

    init_logging(&cli, &config);
    info!("Bookshelf v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("Endpoints: {:?}", config.endpoints);

    let session = Session::new(config)?;

    match cli.command {
        Commands::Countries => handle_countries(&session).await,
        Commands::Books(args) => handle_books(&session, args).await,
        Commands::Signup(args) => handle_signup(&session, args).await,
    }
}

/// Initialize logging from CLI flags, falling back to the configured level
fn init_logging(cli: &Cli, config: &AppConfig) {
    let level = cli
        .log_level()
        .map(|level| level.to_string().to_lowercase())
        .unwrap_or_else(|| config.logging.level.clone());

    let mut filter = EnvFilter::from_default_env();
    match format!("bookshelf={}", level).parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("Ignoring invalid log level '{}': {}", level, e),
    }

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .with_writer(std::io::stderr)
        .init();
}
