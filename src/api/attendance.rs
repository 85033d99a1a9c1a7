use actix_web::{HttpResponse, Responder, web};
use chrono::{Datelike, Local};
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;

use crate::config::Config;
use crate::utils::{employee_filter, report_cache};

#[derive(Deserialize, ToSchema)]
pub struct ClockRequest {
    #[schema(example = 1001)]
    pub employee_id: u64,
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/v1/attendance/check-in",
    request_body = ClockRequest,
    responses(
        (status = 200, description = "Checked in successfully", body = Object, example = json!({
            "message": "Checked in successfully",
            "status": "Present"
        })),
        (status = 400, description = "Already checked in today", body = Object, example = json!({
            "message": "Already checked in today"
        })),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
    payload: web::Json<ClockRequest>,
) -> actix_web::Result<impl Responder> {
    let employee_id = payload.employee_id;

    if !employee_filter::might_exist(employee_id) {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Employee not found"
        })));
    }

    let now = Local::now().naive_local();
    let status = if now.time() > config.late_after {
        "Late"
    } else {
        "Present"
    };

    let result = sqlx::query(
        r#"
        INSERT INTO attendance_log (employee_id, date, time_in, status)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(employee_id)
    .bind(now.date())
    .bind(now.time())
    .bind(status)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            report_cache::invalidate_report(employee_id, now.date().year(), now.date().month())
                .await;

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": "Checked in successfully",
                "status": status
            })))
        }

        Err(e) => {
            // Duplicate check-in for same day
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23000") {
                    return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                        "message": "Already checked in today"
                    })));
                }
            }

            tracing::error!(error = %e, employee_id, "Check-in failed");
            Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ))
        }
    }
}

/// Check-out endpoint
#[utoipa::path(
    put,
    path = "/api/v1/attendance/check-out",
    request_body = ClockRequest,
    responses(
        (status = 200, description = "Checked out successfully", body = Object, example = json!({
            "message": "Checked out successfully"
        })),
        (status = 400, description = "No active check-in found for today", body = Object, example = json!({
            "message": "No active check-in found for today"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn check_out(
    pool: web::Data<MySqlPool>,
    payload: web::Json<ClockRequest>,
) -> actix_web::Result<impl Responder> {
    let employee_id = payload.employee_id;

    let now = Local::now().naive_local();

    let result = sqlx::query(
        r#"
        UPDATE attendance_log
        SET time_out = ?
        WHERE employee_id = ?
        AND date = ?
        AND time_out IS NULL
        "#,
    )
    .bind(now.time())
    .bind(employee_id)
    .bind(now.date())
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, employee_id, "Check-out failed");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "No active check-in found for today"
        })));
    }

    report_cache::invalidate_report(employee_id, now.date().year(), now.date().month()).await;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Checked out successfully"
    })))
}
