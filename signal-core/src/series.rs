use crate::canonical_date::CanonicalDate;
use crate::config::DashboardConfig;
use crate::error::{Result, SignalError};
use crate::signal::{SignalName, SignalValue};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;

/// One parsed CSV line: the normalized date plus every other named column.
///
/// Empty cells are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalRow {
    pub date: CanonicalDate,
    pub cells: BTreeMap<String, Option<String>>,
}

impl SignalRow {
    /// Raw cell text for `column`, `None` when the column is absent or empty.
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells.get(column).and_then(|v| v.as_deref())
    }

    /// Interpreted value of a tracked signal; missing cells read as hold.
    pub fn signal(&self, name: &SignalName) -> SignalValue {
        SignalValue::from_cell(self.cell(&name.column))
    }
}

/// Rows sorted ascending by date, together with the tracked signal columns.
///
/// Rows sharing a date are kept in file order; lookups return the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignalSeries {
    rows: Vec<SignalRow>,
    signal_names: Vec<SignalName>,
    dropped_rows: usize,
}

impl SignalSeries {
    /// Build a series from already parsed rows. Rows are stably sorted by date.
    pub fn new(mut rows: Vec<SignalRow>, signal_names: Vec<SignalName>) -> Self {
        rows.sort_by_key(|row| row.date);
        Self {
            rows,
            signal_names,
            dropped_rows: 0,
        }
    }

    /// Parse CSV text using the default dashboard settings.
    pub fn parse_csv(text: &str) -> Result<Self> {
        Self::parse_csv_with(text, &DashboardConfig::default())
    }

    /// Parse CSV text into a sorted series.
    ///
    /// The first line is the header. Data lines with fewer fields than the
    /// header, or with a date that cannot be normalized, are dropped.
    pub fn parse_csv_with(text: &str, config: &DashboardConfig) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(text.trim().as_bytes());
        let mut records = rdr.records();

        let headers: Vec<String> = match records.next() {
            Some(Ok(header)) => header.iter().map(str::to_string).collect(),
            _ => return Err(SignalError::InsufficientData),
        };
        let date_column = config.date_column;
        let signal_names: Vec<SignalName> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != date_column)
            .filter_map(|(_, h)| SignalName::from_header(h, &config.signal_suffix))
            .collect();

        let mut rows = Vec::new();
        let mut seen = 0usize;
        for result in records {
            seen += 1;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    debug!("skipping unreadable CSV record: {}", e);
                    continue;
                }
            };
            match Self::record_to_row(&record, &headers, date_column) {
                Some(row) => rows.push(row),
                None => debug!(
                    "skipping CSV line {}: {:?}",
                    record.position().map(|p| p.line()).unwrap_or_default(),
                    record
                ),
            }
        }

        if seen == 0 {
            return Err(SignalError::InsufficientData);
        }
        if rows.is_empty() {
            return Err(SignalError::NoValidRows);
        }

        let mut series = Self::new(rows, signal_names);
        series.dropped_rows = seen - series.rows.len();
        info!(
            "Parsed {} signal rows ({} dropped) with {} tracked signals",
            series.rows.len(),
            series.dropped_rows,
            series.signal_names.len()
        );
        Ok(series)
    }

    fn record_to_row(
        record: &StringRecord,
        headers: &[String],
        date_column: usize,
    ) -> Option<SignalRow> {
        if record.len() < headers.len() {
            return None;
        }
        let date = CanonicalDate::normalize(record.get(date_column).unwrap_or(""))?;
        let cells = headers
            .iter()
            .enumerate()
            .filter(|(i, header)| *i != date_column && !header.is_empty())
            .map(|(i, header)| {
                let value = record
                    .get(i)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string);
                (header.clone(), value)
            })
            .collect();
        Some(SignalRow { date, cells })
    }

    pub fn rows(&self) -> &[SignalRow] {
        &self.rows
    }

    pub fn signal_names(&self) -> &[SignalName] {
        &self.signal_names
    }

    /// Data lines discarded while parsing.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row carrying `date`.
    pub fn find(&self, date: &CanonicalDate) -> Option<&SignalRow> {
        self.rows.iter().find(|row| row.date == *date)
    }

    pub fn contains_date(&self, date: &CanonicalDate) -> bool {
        self.find(date).is_some()
    }

    pub fn latest_date(&self) -> Option<CanonicalDate> {
        self.rows.last().map(|row| row.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(series: &SignalSeries) -> Vec<String> {
        series.rows().iter().map(|r| r.date.to_string()).collect()
    }

    #[test]
    fn test_header_only_is_insufficient() {
        assert_eq!(
            SignalSeries::parse_csv("date,foo_signal,bar_signal\n"),
            Err(SignalError::InsufficientData)
        );
        assert_eq!(SignalSeries::parse_csv(""), Err(SignalError::InsufficientData));
        assert_eq!(
            SignalSeries::parse_csv("date,foo_signal\n\n\n"),
            Err(SignalError::InsufficientData)
        );
    }

    #[test]
    fn test_all_rows_invalid_is_no_valid_rows() {
        let csv = "date,foo_signal\nnot-a-date,buy\n2023-02-30,sell\n";
        assert_eq!(SignalSeries::parse_csv(csv), Err(SignalError::NoValidRows));
    }

    #[test]
    fn test_signal_names_follow_header_order() {
        let csv = "date,zeta_signal,close,alpha_signal,,beta_signal\n2024-01-01,buy,10,sell,x,hold\n";
        let series = SignalSeries::parse_csv(csv).unwrap();
        let labels: Vec<&str> = series.signal_names().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn test_date_column_is_never_a_signal() {
        let csv = "date_signal,foo_signal\n2024-01-01,buy\n";
        let series = SignalSeries::parse_csv(csv).unwrap();
        assert_eq!(series.signal_names().len(), 1);
        assert_eq!(series.signal_names()[0].column, "foo_signal");
    }

    #[test]
    fn test_rows_sorted_ascending() {
        let csv = "date,foo_signal\n2024-01-03,buy\n2024-01-01,sell\n2024-01-02,hold\n";
        let series = SignalSeries::parse_csv(csv).unwrap();
        assert_eq!(dates(&series), vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_mixed_date_formats_sort_together() {
        let csv = "date,foo_signal\n01/03/2024,buy\n20240101,sell\n2024/01/02,hold\n";
        let series = SignalSeries::parse_csv(csv).unwrap();
        assert_eq!(dates(&series), vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_short_and_undated_rows_are_dropped_silently() {
        // Known lossy behavior: malformed rows vanish without an error.
        let csv = "date,foo_signal,bar_signal\n2024-01-01,buy\n2023-02-30,buy,sell\n2024-01-02,hold,buy\n";
        let series = SignalSeries::parse_csv(csv).unwrap();
        assert_eq!(dates(&series), vec!["2024-01-02"]);
        assert_eq!(series.dropped_rows(), 2);
    }

    #[test]
    fn test_fields_are_trimmed_and_empty_cells_are_none() {
        let csv = "date , foo_signal , bar_signal\r\n 2024-01-01 , Buy ,  \r\n";
        let series = SignalSeries::parse_csv(csv).unwrap();
        let row = &series.rows()[0];
        assert_eq!(row.cell("foo_signal"), Some("Buy"));
        assert_eq!(row.cell("bar_signal"), None);
        assert_eq!(row.cells.get("bar_signal"), Some(&None));
    }

    #[test]
    fn test_non_signal_columns_are_copied() {
        let csv = "date,close,foo_signal\n2024-01-01,101.5,sell\n";
        let series = SignalSeries::parse_csv(csv).unwrap();
        assert_eq!(series.rows()[0].cell("close"), Some("101.5"));
    }

    #[test]
    fn test_missing_signal_reads_as_hold() {
        let csv = "date,foo_signal,bar_signal\n2024-01-01,,sell\n";
        let series = SignalSeries::parse_csv(csv).unwrap();
        let row = &series.rows()[0];
        let names = series.signal_names();
        assert_eq!(row.signal(&names[0]), SignalValue::Hold);
        assert_eq!(row.signal(&names[1]), SignalValue::Sell);
    }

    #[test]
    fn test_duplicate_dates_first_wins() {
        let csv = "date,foo_signal\n2024-01-02,sell\n2024-01-01,hold\n2024-01-02,buy\n";
        let series = SignalSeries::parse_csv(csv).unwrap();
        assert_eq!(series.len(), 3);
        let date: CanonicalDate = "2024-01-02".parse().unwrap();
        assert_eq!(series.find(&date).unwrap().cell("foo_signal"), Some("sell"));
        assert_eq!(series.latest_date(), Some(date));
    }

    #[test]
    fn test_custom_marker() {
        let config = DashboardConfig {
            signal_suffix: "_sig".to_string(),
            ..DashboardConfig::default()
        };
        let csv = "date,a_sig,b_signal\n2024-01-01,buy,sell\n";
        let series = SignalSeries::parse_csv_with(csv, &config).unwrap();
        let labels: Vec<&str> = series.signal_names().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "bnal"]);
    }
}
