use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One raw clock event from the time-clock subsystem. `status` is stored as
/// free text; "Present" and "Late" are the values the clock writes today.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub employee_id: u64,
    pub date: NaiveDate,
    pub time_in: Option<NaiveTime>,
    pub time_out: Option<NaiveTime>,
    pub status: String,
}
