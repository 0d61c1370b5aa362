//! Fixed-height container div that a D3.js chart renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id passed to the JS render function
    pub id: String,
    /// Height in pixels; the scripts size their SVG to it
    #[props(default = 400)]
    pub height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; width: 100%; position: relative;", props.height);

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
