//! Application Layer - Refresh coordination
//!
//! Wires the price-history port to the analysis engine and owns the
//! shared state the HTTP and CLI surfaces read from.

pub mod coordinator;

pub use coordinator::{
    AnalyzeRequest, CoordinatorError, FetchOutcome, PacingConfig, PriceCache,
    RefreshCoordinator, RefreshReport,
};
