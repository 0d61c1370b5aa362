//! JSON payloads handed to the D3.js chart scripts.

use serde_json::json;
use signal_data::session::Session;

/// Height of the bubble matrix in pixels.
pub const BUBBLE_CHART_HEIGHT: u32 = 500;

/// Height of the gauge in pixels.
pub const GAUGE_CHART_HEIGHT: u32 = 320;

/// `(data_json, config_json)` for `renderBubbleChart`.
pub fn bubble_chart(session: &Session) -> (String, String) {
    let points = session.chart_points();
    let labels = session.axis_labels();
    let data_json = serde_json::to_string(&points).unwrap_or_else(|_| "[]".to_string());
    let config_json = json!({
        "xLabels": labels.x,
        "yLabels": labels.y,
        "bubbleSize": session.config().bubble_size,
        "height": BUBBLE_CHART_HEIGHT,
    })
    .to_string();
    (data_json, config_json)
}

/// `(data_json, config_json)` for `renderGaugeChart`, or `None` when the
/// selected date has no data and the gauge must show its empty state.
pub fn gauge_chart(session: &Session) -> Option<(String, String)> {
    let gauge = session.gauge()?;
    let data_json = serde_json::to_string(&gauge).ok()?;
    let config_json = json!({ "height": GAUGE_CHART_HEIGHT }).to_string();
    Some((data_json, config_json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use signal_core::SignalSeries;

    fn session() -> Session {
        let csv = "date,foo_signal,bar_signal\n2024-01-01,buy,sell\n2024-01-02,hold,buy\n";
        let mut session = Session::default();
        session.on_load(SignalSeries::parse_csv(csv));
        session
    }

    #[test]
    fn bubble_payload_has_points_and_labels() {
        let (data, config) = bubble_chart(&session());
        let data: Value = serde_json::from_str(&data).unwrap();
        let config: Value = serde_json::from_str(&config).unwrap();
        assert_eq!(data.as_array().unwrap().len(), 4);
        assert_eq!(data[3]["date"], "2024-01-02");
        assert_eq!(data[3]["raw"], "buy");
        assert_eq!(config["xLabels"], json!(["01-01", "01-02"]));
        assert_eq!(config["yLabels"], json!(["foo", "bar"]));
        assert_eq!(config["bubbleSize"], 400);
    }

    #[test]
    fn bubble_payload_carries_header_and_cell_text_as_plain_strings() {
        let csv = "date,<img src=x onerror=alert(1)>_signal,q\"uote_signal\n2024-01-01,<b>buy</b>,\n";
        let mut session = Session::default();
        session.on_load(SignalSeries::parse_csv(csv));
        let (data, config) = bubble_chart(&session);

        let data: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(data[0]["signalName"], "<img src=x onerror=alert(1)>");
        assert_eq!(data[0]["raw"], "<b>buy</b>");
        assert_eq!(data[0]["value"], "hold");
        assert_eq!(data[1]["signalName"], "q\"uote");
        assert_eq!(data[1]["raw"], "Hold");

        let config: Value = serde_json::from_str(&config).unwrap();
        assert_eq!(config["yLabels"][0], "<img src=x onerror=alert(1)>");
    }

    #[test]
    fn gauge_payload_for_selected_date() {
        let (data, _) = gauge_chart(&session()).unwrap();
        let data: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(data["needle"], 75.0);
        assert_eq!(data["counts"]["total"], 2);
        assert_eq!(data["segments"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn gauge_payload_absent_before_load() {
        assert!(gauge_chart(&Session::default()).is_none());
    }
}
