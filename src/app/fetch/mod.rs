//! Remote list fetcher
//!
//! [`RemoteListFetcher`] loads the full list of one [`Listing`] type with a
//! single GET and never issues a second request for the same instance. Each
//! screen owns one fetcher; recreating the screen is the only way to retry.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::client::CatalogClient;
use super::models::Listing;
use crate::errors::FetchError;

pub mod state;

pub use state::{FetchGuard, FetchState, InFlight};

/// Outcome of [`RemoteListFetcher::fetch_once`]
#[derive(Debug)]
pub enum FetchAttempt<'a, T> {
    /// This call performed the request and it succeeded
    Fetched(Delivery<'a, T>),
    /// This call performed the request and it failed
    Failed(FetchError),
    /// An earlier call already claimed the attempt
    AlreadyAttempted(FetchState),
}

/// Records of a successful request
///
/// The fetcher stays `Fetching` until the owner has stored the records and
/// calls [`InFlight::succeed`]. Dropping the delivery records `Failed`.
#[derive(Debug)]
pub struct Delivery<'a, T> {
    records: Vec<T>,
    claim: InFlight<'a>,
}

impl<'a, T> Delivery<'a, T> {
    /// Splits into the records and the claim that publishes `Fetched`
    pub fn into_parts(self) -> (Vec<T>, InFlight<'a>) {
        (self.records, self.claim)
    }
}

/// One-shot fetcher for the list served at `T`'s endpoint
#[derive(Debug)]
pub struct RemoteListFetcher<T: Listing> {
    client: Arc<CatalogClient>,
    guard: FetchGuard,
    _records: PhantomData<fn() -> T>,
}

impl<T: Listing> RemoteListFetcher<T> {
    /// Creates a fetcher that has not attempted anything yet
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self {
            client,
            guard: FetchGuard::new(),
            _records: PhantomData,
        }
    }

    /// Current state of the attempt
    pub fn state(&self) -> FetchState {
        self.guard.state()
    }

    /// Performs the request if no call has done so before
    ///
    /// Cancelling the returned future while the request is in flight leaves
    /// the fetcher in `Failed`. A successful request is only published as
    /// `Fetched` once its [`Delivery`] is settled.
    pub async fn fetch_once(&self) -> FetchAttempt<'_, T> {
        let claim = match self.guard.try_begin() {
            Ok(claim) => claim,
            Err(state) => {
                debug!("Skipping {} fetch, already {}", T::NOUN, state);
                return FetchAttempt::AlreadyAttempted(state);
            }
        };

        let result = match self.client.endpoint_url::<T>() {
            Ok(url) => self.client.fetch_list::<T>(&url).await,
            Err(e) => Err(FetchError::Network(e.to_string())),
        };

        match result {
            Ok(records) => {
                info!("Fetched {} {}", records.len(), T::NOUN);
                FetchAttempt::Fetched(Delivery { records, claim })
            }
            Err(error) => {
                claim.fail();
                warn!("Fetching {} failed ({}): {}", T::NOUN, error.kind(), error);
                FetchAttempt::Failed(error)
            }
        }
    }
}
