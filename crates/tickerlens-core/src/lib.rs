//! # Tickerlens Core
//!
//! Resilient data acquisition and series reduction for equity snapshots.
//!
//! ## Overview
//!
//! This crate provides the non-presentational half of tickerlens:
//!
//! - **Domain types** for tickers, snapshots, and daily price points
//! - **A single-flight API client** with a hard timeout and a closed
//!   failure taxonomy
//! - **Connectivity tracking** across requests, with manual reset
//! - **Deterministic series reduction** for chart display
//! - **An explicit search state machine** decoupled from any rendering
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Company-info API client and error taxonomy |
//! | [`config`] | Externally supplied base URL and timeout |
//! | [`connectivity`] | Process-wide online/offline flag |
//! | [`domain`] | Ticker, snapshot, and price point types |
//! | [`error`] | Domain validation errors |
//! | [`http_client`] | HTTP transport seam |
//! | [`search`] | Request-lifecycle state machine |
//! | [`series`] | Downsampling and period change |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerlens_core::{
//!     ApiConfig, ConnectivityTracker, SearchController, SearchState, StockApiClient,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ApiConfig::from_env().expect("TICKERLENS_API_URL must be set");
//!     let client = StockApiClient::new(config, Arc::new(ConnectivityTracker::new()));
//!     let mut controller = SearchController::new(client);
//!
//!     if let SearchState::Success(snapshot) = controller.search("AAPL").await {
//!         println!("{}: {}", snapshot.ticker, snapshot.metrics.current_price);
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failed fetch maps to exactly one [`FetchError`] variant and is
//! surfaced unchanged; only `NetworkUnreachable` and `Timeout` touch the
//! connectivity flag, because any HTTP status proves the server was
//! reachable. The client never retries internally.

pub mod client;
pub mod config;
pub mod connectivity;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod search;
pub mod series;

// Re-export commonly used types at crate root for convenience

pub use client::{FetchError, StockApiClient};
pub use config::{ApiConfig, DEFAULT_TIMEOUT_MS, ENV_BASE_URL};
pub use connectivity::ConnectivityTracker;
pub use domain::{DisplayMetrics, IsoDate, PricePoint, StockSnapshot, Ticker};
pub use error::ValidationError;
pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
pub use search::{SearchController, SearchState, SearchTicket};
pub use series::{percent_change, reduce, DEFAULT_MAX_POINTS};
