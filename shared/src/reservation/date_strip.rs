//! Date strip generator for booking screens

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days shown on a booking screen's date strip
pub const DEFAULT_DATE_STRIP_DAYS: usize = 7;

/// One selectable day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateChip {
    pub date: NaiveDate,
    /// `Mon`, `Tue`, ...
    pub weekday: String,
    pub day: u32,
    /// `Jan`, `Feb`, ...
    pub month: String,
    pub is_today: bool,
}

impl DateChip {
    fn new(date: NaiveDate, is_today: bool) -> Self {
        Self {
            date,
            weekday: date.format("%a").to_string(),
            day: date.day(),
            month: date.format("%b").to_string(),
            is_today,
        }
    }

    /// `Today` for the first chip, otherwise `Tue, 20 Oct`
    pub fn label(&self) -> String {
        if self.is_today {
            "Today".to_string()
        } else {
            format!("{}, {} {}", self.weekday, self.day, self.month)
        }
    }
}

/// `days` consecutive chips starting at `start` (treated as today)
pub fn date_strip(start: NaiveDate, days: usize) -> Vec<DateChip> {
    start
        .iter_days()
        .take(days)
        .enumerate()
        .map(|(i, date)| DateChip::new(date, i == 0))
        .collect()
}

/// Last date covered by a strip of `days` starting at `start`
pub fn strip_end(start: NaiveDate, days: usize) -> Option<NaiveDate> {
    let offset = u64::try_from(days.checked_sub(1)?).ok()?;
    start.checked_add_days(Days::new(offset))
}
