use chrono::{Datelike, NaiveDate};
use futures::future::join_all;
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::time::Duration;

use crate::report::reconcile::MonthlyReport;

/// Reconciled reports keyed by (employee, year, month). Only months that
/// ended before today are stored; a live month changes as days pass.
pub static REPORT_CACHE: Lazy<Cache<(u64, i32, u32), Arc<MonthlyReport>>> = Lazy::new(|| {
    Cache::builder()
        .max_capacity(100_000) // tune based on memory
        .time_to_live(Duration::from_secs(86400)) // 24h TTL
        .build()
});

pub async fn get_report(employee_id: u64, year: i32, month: u32) -> Option<Arc<MonthlyReport>> {
    REPORT_CACHE.get(&(employee_id, year, month)).await
}

pub async fn store_report(employee_id: u64, year: i32, month: u32, report: Arc<MonthlyReport>) {
    REPORT_CACHE.insert((employee_id, year, month), report).await;
}

/// Drop one employee-month after a mutation that touches it
pub async fn invalidate_report(employee_id: u64, year: i32, month: u32) {
    REPORT_CACHE.invalidate(&(employee_id, year, month)).await;
}

/// Drop every month an inclusive date range touches for one employee
pub async fn invalidate_range(employee_id: u64, start: NaiveDate, end: NaiveDate) {
    let mut months = Vec::new();
    let (mut year, mut month) = (start.year(), start.month());
    while (year, month) <= (end.year(), end.month()) {
        months.push((year, month));
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    let invalidations: Vec<_> = months
        .into_iter()
        .map(|(year, month)| async move {
            REPORT_CACHE.invalidate(&(employee_id, year, month)).await;
        })
        .collect();

    // Await all invalidations concurrently
    join_all(invalidations).await;
}

/// Holiday declarations stale every employee's cached reports
pub fn invalidate_all() {
    REPORT_CACHE.invalidate_all();
}
