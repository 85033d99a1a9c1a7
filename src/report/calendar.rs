use chrono::{Datelike, NaiveDate, Weekday};

/// Weekly rest-day policy used when classifying calendar days.
///
/// The default matches current company policy: Sunday is the only weekly
/// rest day and Saturday is an ordinary workday. Kept as a set so the
/// policy can change without touching the reconciliation algorithm.
#[derive(Debug, Clone)]
pub struct WorkCalendar {
    rest_days: Vec<Weekday>,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self {
            rest_days: vec![Weekday::Sun],
        }
    }
}

impl WorkCalendar {
    pub fn new(rest_days: Vec<Weekday>) -> Self {
        Self { rest_days }
    }

    pub fn is_rest_day(&self, date: NaiveDate) -> bool {
        self.rest_days.contains(&date.weekday())
    }
}

/// Number of days in the given month of the proleptic Gregorian calendar,
/// or `None` when the month/year pair does not form a valid calendar.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}
