//! SellSmart Lamp: daily buy/sell/hold signal dashboard.
//!
//! Data flow:
//! 1. On mount: fetch the signal CSV once through the browser and parse it
//!    into a `SignalSeries`. The session picks the latest date.
//! 2. The bubble matrix shows the recent window; the gauge shows the
//!    selected date.
//! 3. Calendar picks and bubble clicks both go through `AppState::select`,
//!    so the two views always agree on the selected date.

use dioxus::prelude::*;
use log::warn;
use signal_chart_ui::components::{
    CalendarSelector, Card, ChartContainer, ErrorDisplay, GaugeCard, LoadingSpinner,
    SignalLegend, StatsSummaryCard,
};
use signal_chart_ui::js_bridge;
use signal_chart_ui::payload::{self, BUBBLE_CHART_HEIGHT};
use signal_chart_ui::state::AppState;
use signal_core::{CanonicalDate, SignalSeries};
use signal_data::session::SelectionEvent;

/// DOM id for the bubble matrix container.
const BUBBLE_CHART_ID: &str = "signal-bubble-chart";
/// DOM id for the gauge container.
const GAUGE_CHART_ID: &str = "signal-gauge-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("signal-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Fetch and parse the CSV once on mount ───
    use_effect(move || {
        spawn(async move {
            let config = state.session.peek().config().clone();
            let result = js_bridge::fetch_text(&config.csv_url)
                .await
                .and_then(|text| SignalSeries::parse_csv_with(&text, &config));
            state.finish_load(result);

            // Initialize D3 chart scripts (one-time)
            js_bridge::init_charts();
        });
    });

    // Payloads are memoized so a selection change alone does not redraw
    // the bubble matrix.
    let bubble = use_memo(move || payload::bubble_chart(&state.session.read()));
    let gauge = use_memo(move || payload::gauge_chart(&state.session.read()));

    // ─── Effect 2: Render the bubble matrix ───
    use_effect(move || {
        let (data_json, config_json) = bubble();
        if (state.loading)() || state.error_msg.read().is_some() {
            return;
        }
        if state.session.peek().series().is_empty() {
            return;
        }
        js_bridge::render_bubble_chart(BUBBLE_CHART_ID, &data_json, &config_json);
    });

    // ─── Effect 3: Render or clear the gauge for the selected date ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        match gauge() {
            Some((data_json, config_json)) => {
                js_bridge::render_gauge_chart(GAUGE_CHART_ID, &data_json, &config_json)
            }
            None => js_bridge::destroy_chart(GAUGE_CHART_ID),
        }
    });

    let on_bubble_click = move |_: MouseEvent| {
        let Some(raw) = js_bridge::take_clicked_date(BUBBLE_CHART_ID) else {
            return;
        };
        match raw.parse::<CanonicalDate>() {
            Ok(date) => {
                state.select(SelectionEvent::BubbleClick(date));
            }
            Err(e) => warn!("Ignoring bubble click with bad date {:?}: {}", raw, e),
        }
    };

    let loading = *state.loading.read();
    let error = state.error_msg.read().clone();
    let session = state.session.read();
    let has_data = !session.series().is_empty();
    let recent_days = session.config().recent_days;
    drop(session);

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 24px; font-weight: 700; margin: 0 0 16px 0;",
                "SellSmart Lamp"
            }

            if loading {
                LoadingSpinner {}
            } else if let Some(err) = error {
                ErrorDisplay { message: err }
            } else if !has_data {
                p {
                    style: "text-align: center; color: #6b7280; padding: 32px;",
                    "No data to display."
                }
            } else {
                div {
                    style: "display: grid; grid-template-columns: 1fr 280px; gap: 16px; margin-bottom: 16px;",
                    GaugeCard { container_id: GAUGE_CHART_ID.to_string() }
                    CalendarSelector {}
                }

                div {
                    style: "display: grid; grid-template-columns: 1fr 220px; gap: 16px;",
                    Card {
                        title: "SellSmart Lamp".to_string(),
                        description: format!(
                            "Investment signals over the last {} days. X axis: date, Y axis: indicator.",
                            recent_days
                        ),
                        SignalLegend {}
                        div {
                            onclick: on_bubble_click,
                            ChartContainer {
                                id: BUBBLE_CHART_ID.to_string(),
                                height: BUBBLE_CHART_HEIGHT,
                            }
                        }
                    }
                    StatsSummaryCard {}
                }
            }
        }
    }
}
