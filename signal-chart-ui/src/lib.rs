//! Shared Dioxus components and D3.js bridge for the signal dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart scripts, the bubble click
//!   callback and browser `fetch`
//! - `payload`: JSON payloads for the chart scripts, built from the session
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (calendar, gauge card, cards, etc.)

pub mod components;
pub mod js_bridge;
pub mod payload;
pub mod state;
