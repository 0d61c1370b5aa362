//! "Daily Navigator" card: the gauge for the selected date.

use super::{Card, ChartContainer};
use crate::payload::GAUGE_CHART_HEIGHT;
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct GaugeCardProps {
    /// DOM id the gauge script renders into
    pub container_id: String,
}

/// Shows the gauge, or an explicit empty state when no date is selected or
/// the selected date has no counts. A zero gauge is never drawn.
#[component]
pub fn GaugeCard(props: GaugeCardProps) -> Element {
    let state = use_context::<AppState>();
    let session = state.session.read();
    let selected = session.selected_date();
    let has_counts = session.counts().is_some();
    drop(session);

    let description = match selected {
        Some(date) => format!("Selected date: {}", date),
        None => "Selected date: none".to_string(),
    };

    rsx! {
        Card {
            title: "Daily Navigator".to_string(),
            description: description,
            if selected.is_some() && has_counts {
                ChartContainer {
                    id: props.container_id.clone(),
                    height: GAUGE_CHART_HEIGHT,
                }
                div {
                    style: "display: flex; justify-content: space-between; font-size: 14px; color: #374151; padding: 0 16px; margin-top: -48px; position: relative;",
                    span { "Sell" }
                    span { "Hold" }
                    span { "Buy" }
                }
            } else {
                div {
                    style: "display: flex; justify-content: center; align-items: center; height: {GAUGE_CHART_HEIGHT}px; color: #6b7280;",
                    if selected.is_some() {
                        "No signal data for the selected date."
                    } else {
                        "Pick a date in the bubble chart."
                    }
                }
            }
        }
    }
}
