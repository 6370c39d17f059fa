//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits and the outer surfaces:
//! - Market Data: Yahoo Finance daily chart client
//! - HTTP: axum JSON API over the refresh coordinator
//! - CLI: Command-line interface handlers

pub mod market_data;
pub mod http;
pub mod cli;

pub use market_data::{YahooChartClient, YahooChartConfig};
pub use cli::CliApp;
