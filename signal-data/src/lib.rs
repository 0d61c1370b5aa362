//! Derived view state for the signal dashboard.
//!
//! This crate turns a parsed [`signal_core::SignalSeries`] into the data the
//! three linked views consume, and owns the date-selection state machine.

pub mod calendar;
pub mod session;
pub mod views;

/// Needle position and color bands for the daily gauge.
pub mod gauge {
    use crate::views::SignalCounts;
    use serde::Serialize;
    use signal_core::signal::{BUY_COLOR, SELL_COLOR};

    /// Neutral needle position, also used when there is nothing to count.
    pub const NEUTRAL_NEEDLE: f64 = 50.0;

    /// Grey band between the sell and buy bands.
    pub const HOLD_BAND_COLOR: &str = "#6b7280";

    /// Minimum gap forced between consecutive band offsets.
    const MIN_BAND_WIDTH: f64 = 0.0001;

    /// A band boundary on the gauge arc, `offset` in (0, 1].
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct ColorStop {
        pub offset: f64,
        pub color: &'static str,
    }

    /// Everything the gauge renderer needs for one day.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct GaugeView {
        pub needle: f64,
        pub segments: Vec<ColorStop>,
        pub counts: SignalCounts,
    }

    impl GaugeView {
        pub fn from_counts(counts: &SignalCounts) -> GaugeView {
            GaugeView {
                needle: needle_value(counts),
                segments: color_segments(counts),
                counts: *counts,
            }
        }
    }

    /// `clamp(50 + 50 * (buy_ratio - sell_ratio), 0, 100)`
    pub fn needle_value(counts: &SignalCounts) -> f64 {
        if counts.total == 0 {
            return NEUTRAL_NEEDLE;
        }
        let total = counts.total as f64;
        let sentiment = counts.buy as f64 / total - counts.sell as f64 / total;
        (sentiment * 50.0 + 50.0).clamp(0.0, 100.0)
    }

    /// Sell, hold and buy bands as cumulative offsets. Each offset is pushed
    /// past the previous raw offset so zero-width bands still render, and is
    /// capped at 1.
    pub fn color_segments(counts: &SignalCounts) -> Vec<ColorStop> {
        if counts.total == 0 {
            return Vec::new();
        }
        let total = counts.total as f64;
        let raw = [
            (counts.sell as f64 / total, SELL_COLOR),
            ((counts.sell + counts.hold) as f64 / total, HOLD_BAND_COLOR),
            (1.0, BUY_COLOR),
        ];
        let mut prev = 0.0;
        raw.iter()
            .map(|&(offset, color)| {
                let adjusted = if offset <= prev {
                    prev + MIN_BAND_WIDTH
                } else {
                    offset
                };
                prev = offset;
                ColorStop {
                    offset: adjusted.min(1.0),
                    color,
                }
            })
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn counts(sell: usize, buy: usize, hold: usize) -> SignalCounts {
            SignalCounts {
                sell,
                buy,
                hold,
                total: sell + buy + hold,
            }
        }

        #[test]
        fn test_needle_mostly_buy() {
            assert!((needle_value(&counts(2, 8, 0)) - 80.0).abs() < 1e-9);
        }

        #[test]
        fn test_needle_all_sell() {
            assert_eq!(needle_value(&counts(10, 0, 0)), 0.0);
        }

        #[test]
        fn test_needle_all_buy_and_neutral() {
            assert_eq!(needle_value(&counts(0, 4, 0)), 100.0);
            assert_eq!(needle_value(&counts(0, 0, 5)), 50.0);
            assert_eq!(needle_value(&counts(3, 3, 4)), 50.0);
            assert_eq!(needle_value(&SignalCounts::default()), NEUTRAL_NEEDLE);
        }

        #[test]
        fn test_segments_are_cumulative() {
            let stops = color_segments(&counts(1, 2, 1));
            assert_eq!(stops.len(), 3);
            assert_eq!(stops[0].offset, 0.25);
            assert_eq!(stops[0].color, "#ef4444");
            assert_eq!(stops[1].offset, 0.5);
            assert_eq!(stops[1].color, "#6b7280");
            assert_eq!(stops[2].offset, 1.0);
            assert_eq!(stops[2].color, "#22c55e");
        }

        #[test]
        fn test_zero_width_bands_are_nudged() {
            let stops = color_segments(&counts(0, 0, 3));
            assert_eq!(stops[0].offset, 0.0001);
            assert_eq!(stops[1].offset, 1.0);
            // Capped at 1 even after the nudge.
            assert_eq!(stops[2].offset, 1.0);
        }

        #[test]
        fn test_no_segments_without_counts() {
            assert!(color_segments(&SignalCounts::default()).is_empty());
        }

        #[test]
        fn test_gauge_view_from_counts() {
            let view = GaugeView::from_counts(&counts(2, 8, 0));
            assert_eq!(view.counts.total, 10);
            assert_eq!(view.segments.len(), 3);
            assert!((view.needle - 80.0).abs() < 1e-9);
        }
    }
}
