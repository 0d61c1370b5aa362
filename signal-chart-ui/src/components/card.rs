//! Bordered card used by every dashboard panel.

use super::ChartHeader;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            style: "border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,0.05); height: 100%; box-sizing: border-box;",
            ChartHeader {
                title: props.title.clone(),
                description: props.description.clone(),
            }
            {props.children}
        }
    }
}
