//! One-shot fetch state machine
//!
//! `NotFetched → Fetching → {Fetched | Failed}`. The first transition is a
//! compare-and-set, so exactly one caller wins the right to issue the request
//! no matter how often the triggering event fires.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of a one-shot fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FetchState {
    /// No attempt has been made yet
    NotFetched = 0,
    /// A request is in flight
    Fetching = 1,
    /// The request succeeded and its records were handed out
    Fetched = 2,
    /// The request failed or was abandoned; no further attempts
    Failed = 3,
}

impl FetchState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => FetchState::NotFetched,
            1 => FetchState::Fetching,
            2 => FetchState::Fetched,
            _ => FetchState::Failed,
        }
    }

    /// Whether an attempt has been started at some point
    pub fn is_attempted(&self) -> bool {
        !matches!(self, FetchState::NotFetched)
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FetchState::NotFetched => "not fetched",
            FetchState::Fetching => "fetching",
            FetchState::Fetched => "fetched",
            FetchState::Failed => "failed",
        };
        write!(f, "{}", label)
    }
}

/// Atomic holder for a [`FetchState`]
#[derive(Debug)]
pub struct FetchGuard {
    state: AtomicU8,
}

impl Default for FetchGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchGuard {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(FetchState::NotFetched as u8),
        }
    }

    /// Current state
    pub fn state(&self) -> FetchState {
        FetchState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Claims the single attempt
    ///
    /// Returns the state observed instead when another caller already claimed it.
    pub fn try_begin(&self) -> Result<InFlight<'_>, FetchState> {
        self.state
            .compare_exchange(
                FetchState::NotFetched as u8,
                FetchState::Fetching as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map(|_| InFlight {
                guard: self,
                settled: false,
            })
            .map_err(FetchState::from_u8)
    }

    fn settle(&self, outcome: FetchState) {
        self.state.store(outcome as u8, Ordering::Release);
    }
}

/// Claim on the in-flight attempt
///
/// Dropping it unsettled (the owning future was cancelled) records `Failed`.
#[derive(Debug)]
pub struct InFlight<'a> {
    guard: &'a FetchGuard,
    settled: bool,
}

impl InFlight<'_> {
    /// Records success
    pub fn succeed(mut self) {
        self.settled = true;
        self.guard.settle(FetchState::Fetched);
    }

    /// Records failure
    pub fn fail(mut self) {
        self.settled = true;
        self.guard.settle(FetchState::Failed);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.guard.settle(FetchState::Failed);
        }
    }
}
