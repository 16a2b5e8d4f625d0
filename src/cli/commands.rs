//! Command handlers for the Bookshelf CLI
//!
//! Each handler builds the screen it needs from the shared [`Session`], runs
//! it, and prints what the screen would display. Fetch failures are printed
//! as notices and do not fail the command.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::{info, warn};

use crate::app::{
    BookshelfScreen, CatalogClient, Country, Notice, ShelfView, SignUpPolicy, SignUpScreen,
};
use crate::cli::{BooksArgs, SignUpArgs};
use crate::config::AppConfig;
use crate::constants::messages;
use crate::errors::Result;

/// Resources shared by the screens of one run
#[derive(Debug, Clone)]
pub struct Session {
    client: Arc<CatalogClient>,
    config: AppConfig,
}

impl Session {
    /// Builds the catalog client from configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = CatalogClient::new(
            &config.client.to_runtime_config(),
            config.endpoints.clone(),
        )?;
        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    fn bookshelf_screen(&self) -> BookshelfScreen {
        BookshelfScreen::new(Arc::clone(&self.client), self.config.shelf.year_zone)
    }

    fn signup_screen(&self) -> SignUpScreen {
        let policy = SignUpPolicy {
            require_country: self.config.signup.require_country,
        };
        SignUpScreen::new(Arc::clone(&self.client), policy)
    }
}

/// Handle the countries command
pub async fn handle_countries(session: &Session) -> Result<()> {
    let screen = session.signup_screen();
    if let Some(notice) = screen.enter().await {
        show_notice(&notice);
        return Ok(());
    }

    let countries = screen.countries().await;
    info!("Listing {} countries", countries.len());
    print!("{}", render_countries(&countries));
    Ok(())
}

/// Handle the books command
pub async fn handle_books(session: &Session, args: BooksArgs) -> Result<()> {
    let screen = session.bookshelf_screen();
    show_bookshelf(&screen, args.year).await;
    Ok(())
}

/// Handle the sign-up command
///
/// An accepted sign-up continues to the bookshelf.
pub async fn handle_signup(session: &Session, args: SignUpArgs) -> Result<()> {
    let screen = session.signup_screen();
    if let Some(notice) = screen.enter().await {
        show_notice(&notice);
    }

    screen.set_email(args.email.as_str()).await;
    let password = match args.password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };
    screen.set_password(password).await;

    if let Some(country) = args.country.as_deref() {
        if !screen.select_country(country).await {
            warn!("Country '{}' is not in the list", country);
            println!("Unknown country '{}', leaving it unselected", country);
        }
    }

    let (outcome, notice) = screen.submit().await;
    show_notice(&notice);
    screen.close();

    if outcome.is_accepted() {
        println!();
        let shelf = session.bookshelf_screen();
        show_bookshelf(&shelf, args.year).await;
    }
    Ok(())
}

async fn show_bookshelf(screen: &BookshelfScreen, year: Option<i32>) {
    if let Some(notice) = screen.enter().await {
        show_notice(&notice);
    }

    if let Some(year) = year {
        if !screen.select_year(year).await {
            println!("No books published in {}", year);
        }
    }

    print!("{}", render_shelf(&screen.view().await));
}

fn show_notice(notice: &Notice) {
    if notice.is_error() {
        eprintln!("{}", notice);
    } else {
        println!("{}", notice);
    }
}

/// Text for the country picker
pub fn render_countries(countries: &[Country]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}:", messages::SELECT_COUNTRY);
    for country in countries.iter().filter(|c| c.is_displayable()) {
        let _ = writeln!(out, "  {}", country);
    }
    out
}

/// Text for the bookshelf: year tabs with the selected one bracketed,
/// then one block per book
pub fn render_shelf(view: &ShelfView) -> String {
    let mut out = String::new();
    match view {
        ShelfView::Loading => {
            let _ = writeln!(out, "Loading...");
        }
        ShelfView::NoData => {
            let _ = writeln!(out, "{}", messages::NO_BOOKS_AVAILABLE);
        }
        ShelfView::Shelf {
            years,
            selected,
            books,
        } => {
            let _ = writeln!(out, "Bookshelf");
            let tabs: Vec<String> = years
                .iter()
                .map(|year| {
                    if year == selected {
                        format!("[{}]", year)
                    } else {
                        year.to_string()
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", tabs.join("  "));
            let _ = writeln!(out);
            for book in books {
                let _ = writeln!(out, "{}", book.title);
                let _ = writeln!(out, "  Score: {:?}", book.score);
                let _ = writeln!(out, "  Popularity: {}", book.popularity);
                let _ = writeln!(out, "  {}", book.image);
                let _ = writeln!(out, "----");
            }
        }
    }
    out
}
