//! Bookshelf screen model
//!
//! Owns the one-shot books fetch, the year buckets derived from it and the
//! selected-year cursor. Everything is discarded with the screen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

use super::grouping::{default_year, YearShelf};
use crate::app::client::CatalogClient;
use crate::app::fetch::{Delivery, FetchAttempt, FetchState, RemoteListFetcher};
use crate::app::models::{Book, Listing, YearZone};
use crate::app::notice::Notice;

/// What the bookshelf should display
#[derive(Debug, Clone, PartialEq)]
pub enum ShelfView {
    /// The fetch has not finished yet
    Loading,
    /// The fetch finished without any books to show
    NoData,
    /// Year tabs with the selected year's books
    Shelf {
        /// Tabs, most recent first
        years: Vec<i32>,
        selected: i32,
        /// Books of the selected year in fetch order
        books: Vec<Book>,
    },
}

#[derive(Debug, Default)]
struct ShelfState {
    shelf: YearShelf,
    selected_year: Option<i32>,
}

/// Bookshelf screen
#[derive(Debug)]
pub struct BookshelfScreen {
    fetcher: RemoteListFetcher<Book>,
    zone: YearZone,
    state: RwLock<ShelfState>,
    closed: AtomicBool,
    close_tx: broadcast::Sender<()>,
}

impl BookshelfScreen {
    pub fn new(client: Arc<CatalogClient>, zone: YearZone) -> Self {
        let (close_tx, _) = broadcast::channel(1);
        Self {
            fetcher: RemoteListFetcher::new(client),
            zone,
            state: RwLock::new(ShelfState::default()),
            closed: AtomicBool::new(false),
            close_tx,
        }
    }

    /// Runs the one-shot books fetch and applies its result
    ///
    /// Returns a notice when the fetch failed. Later calls, and calls on a
    /// closed screen, do nothing.
    pub async fn enter(&self) -> Option<Notice> {
        let mut close_rx = self.close_tx.subscribe();
        if self.is_closed() {
            return None;
        }

        let attempt = tokio::select! {
            attempt = self.fetcher.fetch_once() => attempt,
            _ = close_rx.recv() => {
                debug!("Bookshelf closed while fetching, dropping request");
                return None;
            }
        };

        match attempt {
            FetchAttempt::Fetched(delivery) => {
                self.apply(delivery).await;
                None
            }
            FetchAttempt::Failed(error) => Some(Notice::fetch_failed(Book::NOUN, error)),
            FetchAttempt::AlreadyAttempted(_) => None,
        }
    }

    /// Replaces the shelf with a freshly fetched batch
    ///
    /// `Fetched` is published while the write lock is held, after the shelf
    /// is stored.
    async fn apply(&self, delivery: Delivery<'_, Book>) {
        let (books, claim) = delivery.into_parts();
        if self.is_closed() {
            debug!("Bookshelf closed, discarding {} books", books.len());
            return;
        }

        let shelf = YearShelf::group(&books, self.zone);
        let selected_year = default_year(&books, self.zone);

        let mut state = self.state.write().await;
        state.shelf = shelf;
        state.selected_year = selected_year;
        claim.succeed();
        info!(
            "Shelf holds {} books in {} years, showing {:?}",
            books.len(),
            state.shelf.years().len(),
            selected_year
        );
    }

    /// Moves the cursor to `year`
    ///
    /// Returns false and leaves the cursor alone when there is no such tab.
    pub async fn select_year(&self, year: i32) -> bool {
        let mut state = self.state.write().await;
        if state.shelf.contains_year(year) {
            state.selected_year = Some(year);
            true
        } else {
            debug!("No books published in {}", year);
            false
        }
    }

    pub async fn selected_year(&self) -> Option<i32> {
        self.state.read().await.selected_year
    }

    /// Current presentation state
    pub async fn view(&self) -> ShelfView {
        if matches!(
            self.fetcher.state(),
            FetchState::NotFetched | FetchState::Fetching
        ) {
            return ShelfView::Loading;
        }

        let state = self.state.read().await;
        let years = state.shelf.years();
        let selected = match state.selected_year.or_else(|| years.first().copied()) {
            Some(year) => year,
            None => return ShelfView::NoData,
        };

        ShelfView::Shelf {
            books: state.shelf.books_in(selected).to_vec(),
            years,
            selected,
        }
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetcher.state()
    }

    /// Tears the screen down; an in-flight fetch is dropped unapplied
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            let _ = self.close_tx.send(());
            debug!("Bookshelf closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Drop for BookshelfScreen {
    fn drop(&mut self) {
        self.close();
    }
}
