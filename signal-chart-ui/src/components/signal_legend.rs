//! Buy / Hold / Sell color legend for the bubble matrix.

use dioxus::prelude::*;
use signal_core::SignalValue;

#[component]
pub fn SignalLegend() -> Element {
    let entries = [
        ("Buy", SignalValue::Buy.color()),
        ("Hold", SignalValue::Hold.color()),
        ("Sell", SignalValue::Sell.color()),
    ];

    rsx! {
        div {
            style: "display: flex; gap: 16px; margin-top: 8px; font-size: 12px; color: #6b7280;",
            for (label, color) in entries {
                span {
                    style: "display: flex; align-items: center;",
                    span {
                        style: "width: 12px; height: 12px; border-radius: 50%; margin-right: 6px; display: inline-block; background-color: {color};",
                    }
                    "{label}"
                }
            }
        }
    }
}
