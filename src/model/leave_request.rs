use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A leave application row. Both endpoints are inclusive; only rows whose
/// status is "Approved" feed the attendance reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveRequest {
    pub id: u64,
    pub employee_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: String,
    pub status: String,
}
