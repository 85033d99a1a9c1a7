use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use chrono::{Datelike, Local, NaiveDate};
use futures::try_join;
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use utoipa::{IntoParams, ToSchema};

use crate::config::Config;
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::model::holiday::Holiday;
use crate::model::leave_request::LeaveRequest;
use crate::report::calendar::days_in_month;
use crate::report::reconcile::{AttendanceSummary, DayEntry, MonthlyReport};
use crate::utils::{employee_filter, report_cache};

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct ScheduleQuery {
    #[schema(example = 1001)]
    /// Employee to report on
    pub employee_id: u64,
    #[schema(example = 11)]
    /// Target month 1-12 (defaults to the current month)
    pub month: Option<u32>,
    #[schema(example = 2024)]
    /// Target year (defaults to the current year)
    pub year: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct MonthlyScheduleResponse {
    #[schema(example = 1001)]
    pub employee_id: u64,
    #[schema(example = "Jane Cruz")]
    pub employee_name: String,
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 11)]
    pub month: u32,
    pub timeline: Vec<DayEntry>,
    pub summary: AttendanceSummary,
}

fn schedule_response(
    employee_id: u64,
    employee_name: String,
    year: i32,
    month: u32,
    report: &MonthlyReport,
) -> MonthlyScheduleResponse {
    MonthlyScheduleResponse {
        employee_id,
        employee_name,
        year,
        month,
        timeline: report.timeline.clone(),
        summary: report.summary.clone(),
    }
}

/// Monthly timesheet endpoint
#[utoipa::path(
    get,
    path = "/api/v1/schedule/monthly",
    params(ScheduleQuery),
    responses(
        (status = 200, description = "Reconciled monthly timesheet", body = MonthlyScheduleResponse),
        (status = 400, description = "Invalid month or year", body = Object, example = json!({
            "message": "invalid calendar input: year 2024 month 13"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedule"
)]
pub async fn monthly_schedule(
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
    query: web::Query<ScheduleQuery>,
) -> actix_web::Result<impl Responder> {
    let today = Local::now().date_naive();
    let employee_id = query.employee_id;
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    // Ids the filter has never seen definitely do not exist
    if !employee_filter::might_exist(employee_id) {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Employee not found"
        })));
    }

    let employee = sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, first_name, last_name, status
        FROM employees
        WHERE id = ?
        "#,
    )
    .bind(employee_id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, employee_id, "Failed to fetch employee");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let employee = match employee {
        Some(emp) => {
            employee_filter::insert(emp.id);
            emp
        }
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": "Employee not found"
            })));
        }
    };

    // A month that already ended produces the same report on every call
    let month_is_over = days_in_month(year, month)
        .and_then(|days| NaiveDate::from_ymd_opt(year, month, days))
        .is_some_and(|last_day| last_day < today);

    if month_is_over {
        if let Some(report) = report_cache::get_report(employee_id, year, month).await {
            return Ok(HttpResponse::Ok().json(schedule_response(
                employee_id,
                employee.full_name(),
                year,
                month,
                &report,
            )));
        }
    }

    let attendance = sqlx::query_as::<_, AttendanceRecord>(
        r#"
        SELECT employee_id, date, time_in, time_out, status
        FROM attendance_log
        WHERE employee_id = ?
        AND MONTH(date) = ?
        AND YEAR(date) = ?
        "#,
    )
    .bind(employee_id)
    .bind(month)
    .bind(year)
    .fetch_all(pool.get_ref());

    let holidays = sqlx::query_as::<_, Holiday>(
        r#"
        SELECT date, description
        FROM non_working_days
        WHERE MONTH(date) = ? AND YEAR(date) = ?
        "#,
    )
    .bind(month)
    .bind(year)
    .fetch_all(pool.get_ref());

    let leaves = sqlx::query_as::<_, LeaveRequest>(
        r#"
        SELECT id, employee_id, start_date, end_date, leave_type, status
        FROM leave_requests
        WHERE employee_id = ?
        AND status = 'Approved'
        AND ((MONTH(start_date) = ? AND YEAR(start_date) = ?)
        OR (MONTH(end_date) = ? AND YEAR(end_date) = ?))
        "#,
    )
    .bind(employee_id)
    .bind(month)
    .bind(year)
    .bind(month)
    .bind(year)
    .fetch_all(pool.get_ref());

    let (attendance, holidays, leaves) = try_join!(attendance, holidays, leaves).map_err(|e| {
        tracing::error!(error = %e, employee_id, year, month, "Failed to fetch schedule inputs");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let report = config
        .work_calendar()
        .reconcile(
            employee_id,
            &employee.full_name(),
            year,
            month,
            &attendance,
            &holidays,
            &leaves,
            today,
        )
        .map_err(actix_web::error::ErrorBadRequest)?;

    let report = Arc::new(report);
    if month_is_over {
        report_cache::store_report(employee_id, year, month, report.clone()).await;
    }

    Ok(HttpResponse::Ok().json(schedule_response(
        employee_id,
        employee.full_name(),
        year,
        month,
        &report,
    )))
}
