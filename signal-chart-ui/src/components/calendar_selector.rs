//! Month-grid date picker. Only dates with data can be clicked.

use super::Card;
use crate::state::AppState;
use dioxus::prelude::*;
use signal_data::calendar::{initial_month, CalendarDay, MonthGrid, YearMonth};
use signal_data::session::SelectionEvent;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Calendar card driving the selected date.
///
/// The shown month follows the selection: whenever the selected date
/// changes (calendar pick or bubble click) the grid jumps to its month.
#[component]
pub fn CalendarSelector() -> Element {
    let state = use_context::<AppState>();
    // Month the user navigated to, `None` to follow the selection.
    let mut shown: Signal<Option<YearMonth>> = use_signal(|| None);

    use_effect(move || {
        let _selected = state.session.read().selected_date();
        shown.set(None);
    });

    let session = state.session.read();
    let available = session.available_dates();
    let selected = session.selected_date();
    let month = shown().or_else(|| initial_month(selected, available));
    let grid = month.and_then(|m| MonthGrid::new(m, available, selected));
    drop(session);

    let Some(grid) = grid else {
        return rsx! {
            Card {
                title: "Select Date".to_string(),
                p { style: "color: #666; font-size: 13px;", "No dates available." }
            }
        };
    };

    let current = grid.month;
    let title = current.title();

    rsx! {
        Card {
            title: "Select Date".to_string(),
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                button {
                    style: "border: none; background: none; cursor: pointer; font-size: 16px;",
                    onclick: move |_| shown.set(Some(current.prev())),
                    "‹"
                }
                span { style: "font-weight: 600; font-size: 14px;", "{title}" }
                button {
                    style: "border: none; background: none; cursor: pointer; font-size: 16px;",
                    onclick: move |_| shown.set(Some(current.next())),
                    "›"
                }
            }
            table {
                style: "width: 100%; border-collapse: collapse; text-align: center; font-size: 13px;",
                thead {
                    tr {
                        for name in WEEKDAYS {
                            th { style: "color: #888; font-weight: normal; padding: 4px 0;", "{name}" }
                        }
                    }
                }
                tbody {
                    for week in grid.weeks.iter() {
                        tr {
                            for cell in week.iter() {
                                td {
                                    style: "padding: 2px 0;",
                                    if let Some(day) = cell {
                                        DayButton { day: *day }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DayButtonProps {
    day: CalendarDay,
}

#[component]
fn DayButton(props: DayButtonProps) -> Element {
    let mut state = use_context::<AppState>();
    let day = props.day;
    let label = day.date.day();
    let style = match (day.selected, day.enabled) {
        (true, _) => "background: #111827; color: #fff; border-radius: 6px; cursor: pointer;",
        (false, true) => "background: none; color: #111827; cursor: pointer;",
        (false, false) => "background: none; color: #d1d5db; cursor: not-allowed;",
    };

    rsx! {
        button {
            style: "width: 32px; height: 32px; border: none; {style}",
            disabled: !day.enabled,
            onclick: move |_| {
                state.select(SelectionEvent::CalendarPick(day.date));
            },
            "{label}"
        }
    }
}
