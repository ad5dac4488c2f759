//! API client for the company-info service.
//!
//! One outbound request per call, a hard client-side timeout, and a closed
//! outcome taxonomy. The client never retries on its own; recovery is a
//! user-initiated re-invocation.
//!
//! Outcomes are classified in a fixed order:
//!
//! | Order | Observation | Outcome |
//! |-------|-------------|---------|
//! | 1 | transport timeout | [`FetchError::Timeout`] |
//! | 2 | no response at all | [`FetchError::NetworkUnreachable`] |
//! | 3 | status 404 | [`FetchError::NotFound`] |
//! | 4 | status >= 500 | [`FetchError::ServerError`] |
//! | 5 | other non-2xx | [`FetchError::UnexpectedStatus`] |
//! | 6 | 2xx, undecodable body | [`FetchError::MalformedResponse`] |
//! | 7 | otherwise | `Ok(StockSnapshot)` |
//!
//! Timeouts and unreachable-server failures mark the shared
//! [`ConnectivityTracker`] offline; every other outcome proves the server
//! was reachable and leaves connectivity untouched.

use std::fmt::Write as _;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::connectivity::ConnectivityTracker;
use crate::http_client::{HttpClient, HttpErrorKind, HttpRequest, ReqwestHttpClient};
use crate::{DisplayMetrics, IsoDate, PricePoint, StockSnapshot, Ticker, ValidationError};

/// Closed classification of a failed snapshot fetch.
///
/// Every failure maps to exactly one variant; nothing is swallowed or
/// downgraded on the way to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("could not reach the data service")]
    NetworkUnreachable,

    #[error("the data service did not answer in time")]
    Timeout,

    #[error("no data found for ticker '{ticker}'")]
    NotFound { ticker: Ticker },

    #[error("the data service failed (status {status})")]
    ServerError { status: u16 },

    #[error("unexpected status {status} {status_text}")]
    UnexpectedStatus { status: u16, status_text: String },

    #[error("the data service answered with an unreadable snapshot")]
    MalformedResponse,
}

impl FetchError {
    /// Stable machine-readable code for logs and structured output.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NetworkUnreachable => "fetch.network_unreachable",
            Self::Timeout => "fetch.timeout",
            Self::NotFound { .. } => "fetch.not_found",
            Self::ServerError { .. } => "fetch.server_error",
            Self::UnexpectedStatus { .. } => "fetch.unexpected_status",
            Self::MalformedResponse => "fetch.malformed_response",
        }
    }

    /// True exactly for the outcomes that prove the server was NOT reached.
    pub const fn connectivity_loss(&self) -> bool {
        matches!(self, Self::NetworkUnreachable | Self::Timeout)
    }
}

/// Client for `GET {base_url}/company-info?ticker={ticker}`.
pub struct StockApiClient {
    config: ApiConfig,
    http: Arc<dyn HttpClient>,
    connectivity: Arc<ConnectivityTracker>,
}

impl StockApiClient {
    pub fn new(config: ApiConfig, connectivity: Arc<ConnectivityTracker>) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()), connectivity)
    }

    pub fn with_http_client(
        config: ApiConfig,
        http: Arc<dyn HttpClient>,
        connectivity: Arc<ConnectivityTracker>,
    ) -> Self {
        Self {
            config,
            http,
            connectivity,
        }
    }

    pub fn connectivity(&self) -> &Arc<ConnectivityTracker> {
        &self.connectivity
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch a company snapshot. Exactly one outbound request per call.
    pub async fn fetch_snapshot(&self, ticker: &Ticker) -> Result<StockSnapshot, FetchError> {
        let url = self.company_info_url(ticker);
        debug!(ticker = %ticker, "requesting company snapshot");

        let request = HttpRequest::get(url)
            .with_header("content-type", "application/json")
            .with_timeout_ms(self.config.timeout_ms);

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                let classified = match error.kind() {
                    HttpErrorKind::TimedOut => FetchError::Timeout,
                    HttpErrorKind::ConnectionFailed | HttpErrorKind::Other => {
                        FetchError::NetworkUnreachable
                    }
                };
                warn!(ticker = %ticker, code = classified.code(), "transport failure: {}", error.message());
                self.connectivity.mark_offline();
                return Err(classified);
            }
        };

        match response.status {
            404 => Err(FetchError::NotFound {
                ticker: ticker.clone(),
            }),
            status if status >= 500 => Err(FetchError::ServerError { status }),
            status if !response.is_success() => Err(FetchError::UnexpectedStatus {
                status,
                status_text: response.status_text,
            }),
            _ => {
                let snapshot = decode_snapshot(&response.body).map_err(|error| {
                    warn!(ticker = %ticker, "undecodable snapshot body: {error}");
                    FetchError::MalformedResponse
                })?;
                self.connectivity.mark_online();
                Ok(snapshot)
            }
        }
    }

    fn company_info_url(&self, ticker: &Ticker) -> String {
        let mut url = self.config.base_url.trim_end_matches('/').to_owned();
        let _ = write!(
            url,
            "/company-info?ticker={}",
            urlencoding::encode(ticker.as_str())
        );
        url
    }
}

// Wire shape of the service response. Decoded strictly and then normalized
// into domain types; any mismatch is a MalformedResponse.

#[derive(Debug, Deserialize)]
struct CompanyInfoWire {
    ticker: String,
    #[serde(rename = "companyName")]
    company_name: String,
    sector: String,
    industry: String,
    country: String,
    currency: String,
    #[serde(rename = "currentPrice")]
    current_price: f64,
    #[serde(rename = "marketCap")]
    market_cap: f64,
    #[serde(rename = "totalRevenue")]
    total_revenue: f64,
    #[serde(rename = "netIncome")]
    net_income: f64,
    #[serde(rename = "peRatio", default)]
    pe_ratio: Option<f64>,
    #[serde(rename = "dividendYield", default)]
    dividend_yield: Option<f64>,
    employees: u64,
    summary: String,
    website: String,
    metrics: MetricsWire,
    #[serde(rename = "chartData")]
    chart_data: Vec<PricePointWire>,
    #[serde(rename = "lastUpdated")]
    last_updated: String,
    #[serde(rename = "dataSource")]
    data_source: String,
}

#[derive(Debug, Deserialize)]
struct MetricsWire {
    #[serde(rename = "marketCapFormatted")]
    market_cap: String,
    #[serde(rename = "revenueFormatted")]
    revenue: String,
    #[serde(rename = "netIncomeFormatted")]
    net_income: String,
    #[serde(rename = "peRatioFormatted")]
    pe_ratio: String,
    #[serde(rename = "dividendYieldFormatted")]
    dividend_yield: String,
    #[serde(rename = "employeesFormatted")]
    employees: String,
    #[serde(rename = "currentPriceFormatted")]
    current_price: String,
}

#[derive(Debug, Deserialize)]
struct PricePointWire {
    date: String,
    price: f64,
    volume: u64,
}

#[derive(Debug, Error)]
enum DecodeError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn decode_snapshot(body: &str) -> Result<StockSnapshot, DecodeError> {
    let wire: CompanyInfoWire = serde_json::from_str(body)?;
    Ok(normalize_snapshot(wire)?)
}

fn normalize_snapshot(wire: CompanyInfoWire) -> Result<StockSnapshot, ValidationError> {
    let ticker = Ticker::parse(&wire.ticker)?;

    let chart_data = wire
        .chart_data
        .into_iter()
        .map(|point| {
            let date = IsoDate::parse(&point.date)?;
            PricePoint::new(date, point.price, point.volume)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StockSnapshot {
        ticker,
        company_name: wire.company_name,
        sector: wire.sector,
        industry: wire.industry,
        country: wire.country,
        currency: wire.currency,
        current_price: wire.current_price,
        market_cap: wire.market_cap,
        total_revenue: wire.total_revenue,
        net_income: wire.net_income,
        pe_ratio: wire.pe_ratio,
        dividend_yield: wire.dividend_yield,
        employees: wire.employees,
        summary: wire.summary,
        website: wire.website,
        metrics: DisplayMetrics {
            market_cap: wire.metrics.market_cap,
            revenue: wire.metrics.revenue,
            net_income: wire.metrics.net_income,
            pe_ratio: wire.metrics.pe_ratio,
            dividend_yield: wire.metrics.dividend_yield,
            employees: wire.metrics.employees,
            current_price: wire.metrics.current_price,
        },
        chart_data,
        last_updated: wire.last_updated,
        data_source: wire.data_source,
    })
}
