//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the single [`Session`] plus the loading/error flags in
//! signals and is provided via `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use signal_core::{DashboardConfig, SignalError, SignalSeries};
use signal_data::session::{SelectionEvent, Session};

/// Shared application state for the signal dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded data and the current selection
    pub session: Signal<Session>,
    /// Whether the CSV fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if the load failed
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            session: Signal::new(Session::new(config)),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Record the single load attempt and leave the loading state.
    pub fn finish_load(&mut self, result: Result<SignalSeries, SignalError>) {
        self.session.write().on_load(result);
        let message = self.session.read().error().map(|e| e.to_string());
        self.error_msg.set(message);
        self.loading.set(false);
    }

    /// Forward a calendar pick or bubble click to the session.
    pub fn select(&mut self, event: SelectionEvent) -> bool {
        self.session.write().apply(event)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
