use serde::{Deserialize, Serialize};
use std::fmt;

/// Bubble/legend color for buy signals.
pub const BUY_COLOR: &str = "#22c55e";
/// Bubble/legend color for sell signals.
pub const SELL_COLOR: &str = "#ef4444";
/// Bubble/legend color for hold signals (near-transparent grey).
pub const HOLD_COLOR: &str = "#6b72801a";

/// The value of one signal on one day.
///
/// Cells are read case-insensitively; anything other than `buy` or `sell`,
/// including a missing cell, is `Hold`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SignalValue {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl SignalValue {
    pub fn from_cell(cell: Option<&str>) -> SignalValue {
        match cell.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("buy") => SignalValue::Buy,
            Some("sell") => SignalValue::Sell,
            _ => SignalValue::Hold,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SignalValue::Buy => BUY_COLOR,
            SignalValue::Sell => SELL_COLOR,
            SignalValue::Hold => HOLD_COLOR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalValue::Buy => "buy",
            SignalValue::Sell => "sell",
            SignalValue::Hold => "hold",
        }
    }
}

impl fmt::Display for SignalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked indicator column.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct SignalName {
    /// Column header as it appears in the CSV, used as the row key.
    pub column: String,
    /// Header with the first occurrence of the marker removed, for display.
    pub label: String,
}

impl SignalName {
    /// Returns `Some` when `header` is non-empty and contains `marker`.
    pub fn from_header(header: &str, marker: &str) -> Option<SignalName> {
        if header.is_empty() || !header.contains(marker) {
            return None;
        }
        Some(SignalName {
            column: header.to_string(),
            label: header.replacen(marker, "", 1),
        })
    }
}
