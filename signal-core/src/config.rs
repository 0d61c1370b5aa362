use serde::{Deserialize, Serialize};

/// Location of the daily signal CSV.
pub const CSV_DATA_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/text_data-TxcIugcuYaYqDyUrW97pwyWEJyCQWT.csv";

/// Number of most recent days shown in the bubble matrix.
pub const RECENT_DAYS_COUNT: usize = 30;

/// Header substring marking a column as a tracked signal.
pub const SIGNAL_SUFFIX: &str = "_signal";

/// Bubble area handed to the scatter chart.
pub const DEFAULT_BUBBLE_SIZE: u32 = 400;

/// Column holding the row date.
pub const DATE_COLUMN_INDEX: usize = 0;

/// Fixed dashboard settings. There is no file or environment layer;
/// `Default` returns the compiled-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub csv_url: String,
    pub recent_days: usize,
    pub signal_suffix: String,
    pub bubble_size: u32,
    pub date_column: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            csv_url: CSV_DATA_URL.to_string(),
            recent_days: RECENT_DAYS_COUNT,
            signal_suffix: SIGNAL_SUFFIX.to_string(),
            bubble_size: DEFAULT_BUBBLE_SIZE,
            date_column: DATE_COLUMN_INDEX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_constants() {
        let config = DashboardConfig::default();
        assert_eq!(config.recent_days, 30);
        assert_eq!(config.signal_suffix, "_signal");
        assert_eq!(config.bubble_size, 400);
        assert_eq!(config.date_column, 0);
        assert_eq!(config.csv_url, CSV_DATA_URL);
    }
}
