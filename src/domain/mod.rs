//! Domain Layer - Core data types for the screener
//!
//! Pure types with no I/O:
//! - `price_series`: validated, immutable closing-price history
//! - `analysis`: per-instrument analysis result, signal strength, direction
//! - `fetch_status`: progress record of the background refresh
//! - `universe`: default ticker list and display names

pub mod price_series;
pub mod analysis;
pub mod fetch_status;
pub mod universe;

pub use price_series::{PriceSeries, Observation, SeriesError};
pub use analysis::{AnalysisResult, SignalStrength, Direction};
pub use fetch_status::FetchStatus;
pub use universe::{DEFAULT_UNIVERSE, default_tickers, display_name};
