//! Totals for the bubble matrix window.

use super::Card;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn StatsSummaryCard() -> Element {
    let state = use_context::<AppState>();
    let stats = state.session.read().window_stats();

    rsx! {
        Card {
            title: "Total".to_string(),
            div {
                style: "display: flex; flex-direction: column; gap: 8px; font-size: 14px;",
                StatLine { label: "Days shown".to_string(), value: stats.total_days, color: "inherit".to_string() }
                StatLine { label: "Indicators".to_string(), value: stats.total_signals, color: "inherit".to_string() }
                StatLine { label: "Sell signals".to_string(), value: stats.sell_count, color: "#ef4444".to_string() }
                StatLine { label: "Hold signals".to_string(), value: stats.hold_count, color: "#6b7280".to_string() }
                StatLine { label: "Buy signals".to_string(), value: stats.buy_count, color: "#22c55e".to_string() }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatLineProps {
    label: String,
    value: usize,
    color: String,
}

#[component]
fn StatLine(props: StatLineProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between;",
            span { style: "color: {props.color};", "{props.label}:" }
            span { "{props.value}" }
        }
    }
}
