//! Reversion Screener Library
//!
//! Ranks a universe of equities by how likely each is to revert to its
//! recent mean, from daily closing prices.
//!
//! # Modules
//!
//! - `domain`: Core types (PriceSeries, AnalysisResult, FetchStatus, universe)
//! - `ports`: Trait abstractions (PriceHistoryPort)
//! - `strategy`: Statistics, probability model, classifier and ranker
//! - `adapters`: External implementations (Yahoo chart client, HTTP API, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Refresh coordinator

pub mod domain;
pub mod ports;
pub mod strategy;
pub mod adapters;
pub mod config;
pub mod application;
