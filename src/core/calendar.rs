//! Mapping series positions onto calendar days.

use super::series::Anomaly;
use chrono::{Days, NaiveDate};

/// Daily calendar anchored at the date of the first observation.
///
/// Position `i` of a daily sales series corresponds to `start + i days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyIndex {
    start: NaiveDate,
}

/// An anomaly labelled with the day it was observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatedAnomaly {
    pub date: NaiveDate,
    pub index: usize,
    pub value: f64,
}

impl DailyIndex {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    /// Date of the first observation.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Date of the observation at `index`, or `None` past the calendar's range.
    pub fn date_of(&self, index: usize) -> Option<NaiveDate> {
        self.start.checked_add_days(Days::new(index as u64))
    }

    /// Position of `date` in the series, or `None` for dates before the start.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.start).num_days();
        usize::try_from(offset).ok()
    }

    /// Attach dates to anomaly records, dropping any that fall outside the calendar.
    pub fn label(&self, anomalies: &[Anomaly]) -> Vec<DatedAnomaly> {
        anomalies
            .iter()
            .filter_map(|a| {
                self.date_of(a.index).map(|date| DatedAnomaly {
                    date,
                    index: a.index,
                    value: a.value,
                })
            })
            .collect()
    }
}
