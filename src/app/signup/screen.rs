//! Sign-up screen model
//!
//! Holds the form fields, the country list fetched once on entry and the
//! selected country.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

use super::validation::{decide_sign_up, SignUpForm, SignUpOutcome, SignUpPolicy};
use crate::app::client::CatalogClient;
use crate::app::fetch::{FetchAttempt, FetchState, RemoteListFetcher};
use crate::app::models::{Country, Listing};
use crate::app::notice::Notice;
use crate::constants::messages;

#[derive(Debug, Default)]
struct SignUpState {
    form: SignUpForm,
    countries: Vec<Country>,
}

/// Sign-up screen
#[derive(Debug)]
pub struct SignUpScreen {
    fetcher: RemoteListFetcher<Country>,
    policy: SignUpPolicy,
    state: RwLock<SignUpState>,
    closed: AtomicBool,
    close_tx: broadcast::Sender<()>,
}

impl SignUpScreen {
    pub fn new(client: Arc<CatalogClient>, policy: SignUpPolicy) -> Self {
        let (close_tx, _) = broadcast::channel(1);
        Self {
            fetcher: RemoteListFetcher::new(client),
            policy,
            state: RwLock::new(SignUpState::default()),
            closed: AtomicBool::new(false),
            close_tx,
        }
    }

    /// Runs the one-shot countries fetch and stores the list
    ///
    /// Returns a notice when the fetch failed.
    pub async fn enter(&self) -> Option<Notice> {
        let mut close_rx = self.close_tx.subscribe();
        if self.is_closed() {
            return None;
        }

        let attempt = tokio::select! {
            attempt = self.fetcher.fetch_once() => attempt,
            _ = close_rx.recv() => {
                debug!("Sign-up closed while fetching countries");
                return None;
            }
        };

        match attempt {
            FetchAttempt::Fetched(delivery) => {
                let (countries, claim) = delivery.into_parts();
                if !self.is_closed() {
                    let mut state = self.state.write().await;
                    state.countries = countries;
                    claim.succeed();
                }
                None
            }
            FetchAttempt::Failed(error) => Some(Notice::fetch_failed(Country::NOUN, error)),
            FetchAttempt::AlreadyAttempted(_) => None,
        }
    }

    /// Countries available in the picker, in fetch order
    pub async fn countries(&self) -> Vec<Country> {
        self.state.read().await.countries.clone()
    }

    pub async fn set_email(&self, email: impl Into<String>) {
        self.state.write().await.form.email = email.into();
    }

    pub async fn set_password(&self, password: impl Into<String>) {
        self.state.write().await.form.password = password.into();
    }

    /// Selects a country by name
    ///
    /// Only names present in the fetched list are accepted.
    pub async fn select_country(&self, name: &str) -> bool {
        let mut state = self.state.write().await;
        match state.countries.iter().find(|c| c.country == name) {
            Some(country) => {
                state.form.country = country.country.clone();
                true
            }
            None => {
                debug!("Country not in list: {}", name);
                false
            }
        }
    }

    /// Label for the country picker button
    pub async fn country_label(&self) -> String {
        let state = self.state.read().await;
        if state.form.country.is_empty() {
            messages::SELECT_COUNTRY.to_string()
        } else {
            state.form.country.clone()
        }
    }

    /// Submits the form
    ///
    /// On acceptance the caller moves on to the bookshelf.
    pub async fn submit(&self) -> (SignUpOutcome, Notice) {
        let form = self.state.read().await.form.clone();
        let outcome = decide_sign_up(&form, &self.policy);
        let notice = match &outcome {
            SignUpOutcome::Accepted { email, country } => {
                info!("Sign-up accepted");
                Notice::SignedUp {
                    email: email.clone(),
                    country: country.clone(),
                }
            }
            SignUpOutcome::Rejected => {
                debug!("Sign-up rejected");
                Notice::InvalidSignUp
            }
        };
        (outcome, notice)
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetcher.state()
    }

    /// Tears the screen down; an in-flight fetch is dropped unapplied
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            let _ = self.close_tx.send(());
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Drop for SignUpScreen {
    fn drop(&mut self) {
        self.close();
    }
}
