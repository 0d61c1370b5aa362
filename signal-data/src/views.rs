//! Pure derivations over a [`SignalSeries`].
//!
//! Nothing here is cached; callers recompute after every state change.
//! Series sizes are tens to low thousands of rows.

use serde::Serialize;
use signal_core::{CanonicalDate, SignalName, SignalRow, SignalSeries, SignalValue};
use std::collections::BTreeSet;

/// Tooltip text for a tracked cell left empty.
pub const EMPTY_CELL_LABEL: &str = "Hold";

/// One bubble in the signal-by-date matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Index of the date within the window
    pub x: usize,
    /// Index of the signal within the tracked signal list
    pub y: usize,
    pub date: CanonicalDate,
    pub value: SignalValue,
    /// Cell text as written in the CSV, `"Hold"` when the cell is empty
    pub raw: String,
    #[serde(rename = "signalName")]
    pub signal_name: String,
    pub color: &'static str,
}

/// Sell/buy/hold tally for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SignalCounts {
    pub sell: usize,
    pub buy: usize,
    pub hold: usize,
    pub total: usize,
}

impl SignalCounts {
    pub fn add(&mut self, value: SignalValue) {
        match value {
            SignalValue::Sell => self.sell += 1,
            SignalValue::Buy => self.buy += 1,
            SignalValue::Hold => self.hold += 1,
        }
        self.total += 1;
    }
}

impl FromIterator<SignalValue> for SignalCounts {
    fn from_iter<I: IntoIterator<Item = SignalValue>>(iter: I) -> Self {
        let mut counts = SignalCounts::default();
        for value in iter {
            counts.add(value);
        }
        counts
    }
}

/// Axis tick labels for the bubble matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisLabels {
    /// Window dates shortened to "MM-DD"
    pub x: Vec<String>,
    /// Full canonical dates, same order as `x`
    pub dates: Vec<CanonicalDate>,
    /// Signal display labels
    pub y: Vec<String>,
}

/// Totals shown next to the bubble matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WindowStats {
    pub total_days: usize,
    pub total_signals: usize,
    pub sell_count: usize,
    pub buy_count: usize,
    pub hold_count: usize,
}

/// Unique dates present in the series, ascending.
pub fn available_dates(series: &SignalSeries) -> Vec<CanonicalDate> {
    series
        .rows()
        .iter()
        .map(|row| row.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The last `n` rows of the series in their original order.
pub fn recent_window(series: &SignalSeries, n: usize) -> &[SignalRow] {
    let rows = series.rows();
    &rows[rows.len().saturating_sub(n)..]
}

/// One point per (date, signal) pair, date-major.
pub fn chart_points(window: &[SignalRow], signal_names: &[SignalName]) -> Vec<ChartPoint> {
    let mut points = Vec::with_capacity(window.len() * signal_names.len());
    for (x, row) in window.iter().enumerate() {
        for (y, name) in signal_names.iter().enumerate() {
            let value = row.signal(name);
            points.push(ChartPoint {
                x,
                y,
                date: row.date,
                value,
                raw: row.cell(&name.column).unwrap_or(EMPTY_CELL_LABEL).to_string(),
                signal_name: name.label.clone(),
                color: value.color(),
            });
        }
    }
    points
}

/// Tally the signals recorded for `date`.
///
/// Returns `None` ("no data") when the date has no row, or when there are no
/// tracked signals to count. A day where every signal is hold is valid data.
pub fn signal_counts_for(
    date: &CanonicalDate,
    series: &SignalSeries,
    signal_names: &[SignalName],
) -> Option<SignalCounts> {
    let row = series.find(date)?;
    let counts: SignalCounts = signal_names.iter().map(|name| row.signal(name)).collect();
    if counts.total > 0 {
        Some(counts)
    } else {
        None
    }
}

pub fn axis_labels(window: &[SignalRow], signal_names: &[SignalName]) -> AxisLabels {
    AxisLabels {
        x: window.iter().map(|row| row.date.month_day_label()).collect(),
        dates: window.iter().map(|row| row.date).collect(),
        y: signal_names.iter().map(|name| name.label.clone()).collect(),
    }
}

pub fn window_stats(window: &[SignalRow], signal_names: &[SignalName]) -> WindowStats {
    let counts: SignalCounts = window
        .iter()
        .flat_map(|row| signal_names.iter().map(move |name| row.signal(name)))
        .collect();
    WindowStats {
        total_days: window.len(),
        total_signals: signal_names.len(),
        sell_count: counts.sell,
        buy_count: counts.buy,
        hold_count: counts.hold,
    }
}
