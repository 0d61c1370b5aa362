//! Reusable Dioxus RSX components for the signal dashboard.

mod calendar_selector;
mod card;
mod chart_container;
mod chart_header;
mod error_display;
mod gauge_card;
mod loading_spinner;
mod signal_legend;
mod stats_summary;

pub use calendar_selector::CalendarSelector;
pub use card::Card;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use gauge_card::GaugeCard;
pub use loading_spinner::LoadingSpinner;
pub use signal_legend::SignalLegend;
pub use stats_summary::StatsSummaryCard;
