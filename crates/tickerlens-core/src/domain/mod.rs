mod date;
mod snapshot;
mod ticker;

pub use date::IsoDate;
pub use snapshot::{DisplayMetrics, PricePoint, StockSnapshot};
pub use ticker::Ticker;
