//! Month grid for the date picker.
//!
//! Only dates with data are enabled; every other day renders disabled.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use signal_core::canonical_date::CanonicalDateRange;
use signal_core::CanonicalDate;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<YearMonth> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| YearMonth { year, month })
    }

    pub fn of(date: &CanonicalDate) -> YearMonth {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn prev(&self) -> YearMonth {
        if self.month == 1 {
            YearMonth {
                year: self.year - 1,
                month: 12,
            }
        } else {
            YearMonth {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> YearMonth {
        if self.month == 12 {
            YearMonth {
                year: self.year + 1,
                month: 1,
            }
        } else {
            YearMonth {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    fn first_day(&self) -> Option<CanonicalDate> {
        CanonicalDate::from_ymd_opt(self.year, self.month, 1)
    }

    fn last_day(&self) -> Option<CanonicalDate> {
        let next = self.next();
        NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .and_then(|d| d.pred_opt())
            .map(CanonicalDate::from)
    }

    /// e.g. "March 2024"
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

/// One day cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: CanonicalDate,
    pub enabled: bool,
    pub selected: bool,
}

/// Sunday-first weeks of one month. Cells outside the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
}

impl MonthGrid {
    /// `available` must be sorted ascending (as produced by
    /// [`crate::views::available_dates`]).
    pub fn new(
        month: YearMonth,
        available: &[CanonicalDate],
        selected: Option<CanonicalDate>,
    ) -> Option<MonthGrid> {
        let first = month.first_day()?;
        let last = month.last_day()?;

        let mut weeks = Vec::new();
        let mut week: [Option<CalendarDay>; 7] = [None; 7];
        for date in CanonicalDateRange(first, last) {
            let column = date.as_naive_date().weekday().num_days_from_sunday() as usize;
            week[column] = Some(CalendarDay {
                date,
                enabled: is_selectable(&date, available),
                selected: selected == Some(date),
            });
            if column == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }
        Some(MonthGrid { month, weeks })
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|w| w.iter().flatten())
    }
}

/// Whether the picker may emit `date`.
pub fn is_selectable(date: &CanonicalDate, available: &[CanonicalDate]) -> bool {
    available.binary_search(date).is_ok()
}

/// Month shown when the picker first opens: the selected date's month,
/// else the month of the latest available date.
pub fn initial_month(
    selected: Option<CanonicalDate>,
    available: &[CanonicalDate],
) -> Option<YearMonth> {
    selected
        .or_else(|| available.last().copied())
        .map(|d| YearMonth::of(&d))
}
