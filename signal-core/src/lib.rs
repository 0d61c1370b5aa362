//! Core types and CSV loading for daily trading-signal data.
//!
//! - `canonical_date`: `YYYY-MM-DD` dates and normalization of mixed CSV date formats
//! - `signal`: signal values (buy/sell/hold) and tracked signal columns
//! - `series`: parsed rows, sorted series and the CSV loader
//! - `config`: fixed dashboard settings
//! - `fetch`: native HTTP fetching (feature `api`)

pub mod canonical_date;
pub mod config;
pub mod error;
#[cfg(feature = "api")]
pub mod fetch;
pub mod series;
pub mod signal;

pub use canonical_date::CanonicalDate;
pub use config::DashboardConfig;
pub use error::{Result, SignalError};
pub use series::{SignalRow, SignalSeries};
pub use signal::{SignalName, SignalValue};
