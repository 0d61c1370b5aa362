//! Loading spinner component.

use dioxus::prelude::*;

/// Shown while the CSV fetch is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: 256px; color: #666;",
            "Loading signal data..."
        }
    }
}
