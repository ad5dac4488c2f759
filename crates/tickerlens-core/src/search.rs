//! Request-lifecycle state machine for ticker searches.
//!
//! The controller owns the single authoritative [`SearchState`] and is the
//! only writer. Submitting allocates a monotonically increasing request id;
//! resolving requires that same id, so a late outcome — one arriving after
//! a timeout-triggered failure, a superseding search, or a reset — is
//! discarded instead of applied. That id check is the cancellation
//! boundary: a response that arrives after cancellation must not mutate
//! state.

use std::sync::Arc;

use tracing::debug;

use crate::client::{FetchError, StockApiClient};
use crate::connectivity::ConnectivityTracker;
use crate::{StockSnapshot, Ticker};

/// Authoritative lifecycle state of the current search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading { request_id: u64 },
    Success(Box<StockSnapshot>),
    Failed(FetchError),
}

impl SearchState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// Handle for an accepted search, used to resolve it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub request_id: u64,
    pub ticker: Ticker,
}

/// Orchestrates validation, the API client, and state transitions.
pub struct SearchController {
    state: SearchState,
    next_request_id: u64,
    client: StockApiClient,
}

impl SearchController {
    pub fn new(client: StockApiClient) -> Self {
        Self {
            state: SearchState::Idle,
            next_request_id: 1,
            client,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn client(&self) -> &StockApiClient {
        &self.client
    }

    pub fn connectivity(&self) -> &Arc<ConnectivityTracker> {
        self.client.connectivity()
    }

    /// Accept a raw query and enter `Loading`, or silently ignore it.
    ///
    /// An empty or whitespace-only query short-circuits to `Idle` with no
    /// network call and no surfaced error. An accepted query supersedes any
    /// in-flight request: the returned ticket carries the only id that can
    /// still resolve the state.
    pub fn submit(&mut self, raw: &str) -> Option<SearchTicket> {
        let Ok(ticker) = Ticker::parse(raw) else {
            self.state = SearchState::Idle;
            return None;
        };

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.state = SearchState::Loading { request_id };
        debug!(request_id, ticker = %ticker, "search accepted");

        Some(SearchTicket { request_id, ticker })
    }

    /// Apply a fetch outcome, or discard it when it is no longer current.
    ///
    /// Returns whether the outcome was applied. Only the outcome matching
    /// the live `Loading` request id ever is; the classification inside a
    /// `Failed` payload is stored verbatim.
    pub fn resolve(
        &mut self,
        request_id: u64,
        outcome: Result<StockSnapshot, FetchError>,
    ) -> bool {
        match self.state {
            SearchState::Loading { request_id: live } if live == request_id => {
                self.state = match outcome {
                    Ok(snapshot) => SearchState::Success(Box::new(snapshot)),
                    Err(error) => SearchState::Failed(error),
                };
                true
            }
            _ => {
                debug!(request_id, "discarding stale search outcome");
                false
            }
        }
    }

    /// Explicit user-triggered recovery: clear a displayed error and mark
    /// connectivity online again. Performs no network call.
    pub fn retry_connection(&mut self) {
        if matches!(self.state, SearchState::Failed(_)) {
            self.state = SearchState::Idle;
        }
        self.client.connectivity().reset();
    }

    /// Run a whole search to completion: submit, fetch, resolve.
    ///
    /// Holding `&mut self` across the await keeps this the single in-flight
    /// request; supersede semantics for concurrent callers go through
    /// [`submit`](Self::submit) / [`resolve`](Self::resolve) directly.
    pub async fn search(&mut self, raw: &str) -> &SearchState {
        let Some(ticket) = self.submit(raw) else {
            return &self.state;
        };

        let outcome = self.client.fetch_snapshot(&ticket.ticker).await;
        self.resolve(ticket.request_id, outcome);
        &self.state
    }
}
