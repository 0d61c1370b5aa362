//! Session state and the date-selection state machine.
//!
//! All dashboard state lives in one [`Session`]. The UI feeds it load results
//! and [`SelectionEvent`]s; every transition into `Idle(date)` recomputes the
//! gauge counts for that date before returning.

use crate::gauge::GaugeView;
use crate::views::{self, AxisLabels, ChartPoint, SignalCounts, WindowStats};
use log::{error, info, warn};
use signal_core::{CanonicalDate, DashboardConfig, SignalError, SignalRow, SignalSeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Load still in flight; selection controls are inert
    Uninitialized,
    /// A date is selected
    Idle(CanonicalDate),
    /// Nothing to show for the rest of the session
    NoData,
}

/// User input that moves the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    CalendarPick(CanonicalDate),
    BubbleClick(CanonicalDate),
}

impl SelectionEvent {
    pub fn date(&self) -> CanonicalDate {
        match self {
            SelectionEvent::CalendarPick(date) | SelectionEvent::BubbleClick(date) => *date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: DashboardConfig,
    series: SignalSeries,
    available_dates: Vec<CanonicalDate>,
    state: SelectionState,
    counts: Option<SignalCounts>,
    error: Option<SignalError>,
}

impl Session {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            series: SignalSeries::default(),
            available_dates: Vec::new(),
            state: SelectionState::Uninitialized,
            counts: None,
            error: None,
        }
    }

    /// Apply the outcome of the one load attempt.
    pub fn on_load(&mut self, result: Result<SignalSeries, SignalError>) {
        if self.state == SelectionState::NoData {
            warn!("Ignoring load result: session already has no data");
            return;
        }
        match result {
            Err(e) => {
                error!("Signal data load failed: {}", e);
                self.error = Some(e);
                self.state = SelectionState::NoData;
                self.counts = None;
            }
            Ok(series) => {
                self.available_dates = views::available_dates(&series);
                self.series = series;
                info!(
                    "Loaded {} rows covering {} dates",
                    self.series.len(),
                    self.available_dates.len()
                );
                let keep = match self.state {
                    SelectionState::Idle(date) if self.is_available(&date) => Some(date),
                    _ => None,
                };
                match keep.or_else(|| self.available_dates.last().copied()) {
                    Some(date) => self.enter_idle(date),
                    None => {
                        self.state = SelectionState::NoData;
                        self.counts = None;
                    }
                }
            }
        }
    }

    /// Returns `true` when the event moved the selection.
    ///
    /// Events are ignored before data arrives, after `NoData`, and for dates
    /// without data.
    pub fn apply(&mut self, event: SelectionEvent) -> bool {
        if !matches!(self.state, SelectionState::Idle(_)) {
            warn!("Ignoring {:?}: no data loaded", event);
            return false;
        }
        let date = event.date();
        if !self.is_available(&date) {
            warn!("Ignoring {:?}: date has no data", event);
            return false;
        }
        self.enter_idle(date);
        true
    }

    fn enter_idle(&mut self, date: CanonicalDate) {
        self.state = SelectionState::Idle(date);
        self.counts = views::signal_counts_for(&date, &self.series, self.series.signal_names());
    }

    fn is_available(&self, date: &CanonicalDate) -> bool {
        self.available_dates.binary_search(date).is_ok()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SelectionState::Uninitialized
    }

    pub fn selected_date(&self) -> Option<CanonicalDate> {
        match self.state {
            SelectionState::Idle(date) => Some(date),
            _ => None,
        }
    }

    /// Gauge counts for the selected date; `None` means "no data".
    pub fn counts(&self) -> Option<SignalCounts> {
        self.counts
    }

    pub fn error(&self) -> Option<&SignalError> {
        self.error.as_ref()
    }

    pub fn series(&self) -> &SignalSeries {
        &self.series
    }

    pub fn available_dates(&self) -> &[CanonicalDate] {
        &self.available_dates
    }

    pub fn window(&self) -> &[SignalRow] {
        views::recent_window(&self.series, self.config.recent_days)
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        views::chart_points(self.window(), self.series.signal_names())
    }

    pub fn axis_labels(&self) -> AxisLabels {
        views::axis_labels(self.window(), self.series.signal_names())
    }

    pub fn window_stats(&self) -> WindowStats {
        views::window_stats(self.window(), self.series.signal_names())
    }

    pub fn gauge(&self) -> Option<GaugeView> {
        self.counts.as_ref().map(GaugeView::from_counts)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
