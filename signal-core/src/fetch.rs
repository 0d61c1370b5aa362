//! Native CSV fetching (enabled with the `api` feature).
//!
//! The browser build fetches through `signal-chart-ui::js_bridge` instead.

use crate::config::DashboardConfig;
use crate::error::{Result, SignalError};
use crate::series::SignalSeries;
use log::{error, info};
use reqwest::Client;

/// Fetch the raw CSV body. Transport failures and non-success statuses are
/// both reported as [`SignalError::Network`].
pub async fn fetch_csv_text(client: &Client, url: &str) -> Result<String> {
    info!("Fetching signal CSV from {}", url);
    let response = client.get(url).send().await.map_err(|e| {
        error!("Signal CSV request failed: {}", e);
        SignalError::Network(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        error!("Signal CSV request returned {}", status);
        return Err(SignalError::Network(format!("HTTP status {}", status.as_u16())));
    }

    response
        .text()
        .await
        .map_err(|e| SignalError::Network(e.to_string()))
}

/// Fetch and parse the configured CSV in one step.
pub async fn load_series(client: &Client, config: &DashboardConfig) -> Result<SignalSeries> {
    let text = fetch_csv_text(client, &config.csv_url).await?;
    SignalSeries::parse_csv_with(&text, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_family = "wasm"))]
    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = Client::new();
        let result = fetch_csv_text(&client, "http://127.0.0.1:9/signals.csv").await;
        assert!(matches!(result, Err(SignalError::Network(_))));
    }

    #[cfg(not(target_family = "wasm"))]
    #[tokio::test]
    async fn test_load_series_propagates_network_error() {
        let client = Client::new();
        let config = DashboardConfig {
            csv_url: "http://127.0.0.1:9/signals.csv".to_string(),
            ..DashboardConfig::default()
        };
        let result = load_series(&client, &config).await;
        assert!(matches!(result, Err(SignalError::Network(_))));
    }
}
