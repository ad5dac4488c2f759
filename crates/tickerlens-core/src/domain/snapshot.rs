use serde::{Deserialize, Serialize};

use crate::{IsoDate, Ticker, ValidationError};

/// Single point of a daily price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: IsoDate,
    pub price: f64,
    pub volume: u64,
}

impl PricePoint {
    pub fn new(date: IsoDate, price: f64, volume: u64) -> Result<Self, ValidationError> {
        if !price.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "price" });
        }
        if price <= 0.0 {
            return Err(ValidationError::NonPositiveValue { field: "price" });
        }

        Ok(Self {
            date,
            price,
            volume,
        })
    }
}

/// Display strings pre-formatted by the data service.
///
/// These are opaque to the core; it never re-derives them from the raw
/// numeric fundamentals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub market_cap: String,
    pub revenue: String,
    pub net_income: String,
    pub pe_ratio: String,
    pub dividend_yield: String,
    pub employees: String,
    pub current_price: String,
}

/// Immutable company snapshot returned by the data service.
///
/// Optional fundamentals may be absent (no P/E for unprofitable companies,
/// no yield for non-dividend payers); absence is a valid display state, not
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub ticker: Ticker,
    pub company_name: String,
    pub sector: String,
    pub industry: String,
    pub country: String,
    pub currency: String,

    pub current_price: f64,
    pub market_cap: f64,
    pub total_revenue: f64,
    pub net_income: f64,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub employees: u64,

    pub summary: String,
    pub website: String,

    pub metrics: DisplayMetrics,
    pub chart_data: Vec<PricePoint>,

    /// Upstream generation timestamp, kept verbatim. The service emits a
    /// local ISO form without offset, so this is not parsed.
    pub last_updated: String,
    pub data_source: String,
}
