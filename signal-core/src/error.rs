/// Error types for loading signal data
use thiserror::Error;

/// Terminal failures of a load attempt.
///
/// Per-row problems (short rows, unparseable dates) never surface here;
/// those rows are dropped by the loader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// Fetch failed or the server answered with a non-success status
    #[error("Network error: {0}")]
    Network(String),

    /// Fewer than two lines (header plus one row)
    #[error("Insufficient CSV data: a header and at least one row are required")]
    InsufficientData,

    /// Every data row was dropped during parsing
    #[error("No valid data rows after parsing")]
    NoValidRows,
}

/// Type alias for Results using SignalError
pub type Result<T> = std::result::Result<T, SignalError>;
