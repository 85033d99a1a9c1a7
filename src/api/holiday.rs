use actix_web::{HttpResponse, Responder, web};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::{IntoParams, ToSchema};

use crate::model::holiday::Holiday;
use crate::utils::report_cache;

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct HolidayQuery {
    #[schema(example = 12)]
    /// Month 1-12 (defaults to the current month)
    pub month: Option<u32>,
    #[schema(example = 2026)]
    /// Year (defaults to the current year)
    pub year: Option<i32>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateHoliday {
    #[schema(example = "2026-12-25", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Christmas Day")]
    pub description: String,
}

/// Holidays for a month endpoint
#[utoipa::path(
    get,
    path = "/api/v1/holiday",
    params(HolidayQuery),
    responses(
        (status = 200, description = "Declared non-working days", body = [Holiday]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Holiday"
)]
pub async fn list_holidays(
    pool: web::Data<MySqlPool>,
    query: web::Query<HolidayQuery>,
) -> actix_web::Result<impl Responder> {
    let today = Local::now().date_naive();
    let month = query.month.unwrap_or_else(|| today.month());
    let year = query.year.unwrap_or_else(|| today.year());

    let holidays = sqlx::query_as::<_, Holiday>(
        r#"
        SELECT date, description
        FROM non_working_days
        WHERE MONTH(date) = ? AND YEAR(date) = ?
        ORDER BY date
        "#,
    )
    .bind(month)
    .bind(year)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, year, month, "Failed to fetch holidays");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(holidays))
}

/// Declare holiday endpoint
#[utoipa::path(
    post,
    path = "/api/v1/holiday",
    request_body = CreateHoliday,
    responses(
        (status = 200, description = "Holiday declared", body = Object, example = json!({
            "message": "Holiday declared"
        })),
        (status = 400, description = "Date already declared", body = Object, example = json!({
            "message": "A holiday is already declared for this date"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Holiday"
)]
pub async fn create_holiday(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateHoliday>,
) -> actix_web::Result<impl Responder> {
    let result = sqlx::query(
        r#"
        INSERT INTO non_working_days (date, description)
        VALUES (?, ?)
        "#,
    )
    .bind(payload.date)
    .bind(&payload.description)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            // Holidays change every employee's report
            report_cache::invalidate_all();

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": "Holiday declared"
            })))
        }

        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23000") {
                    return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                        "message": "A holiday is already declared for this date"
                    })));
                }
            }

            tracing::error!(error = %e, date = %payload.date, "Failed to declare holiday");
            Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ))
        }
    }
}

/// Remove holiday endpoint
#[utoipa::path(
    delete,
    path = "/api/v1/holiday/{date}",
    params(
        ("date" = String, Path, description = "Holiday date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Holiday removed", body = Object, example = json!({
            "message": "Holiday removed"
        })),
        (status = 404, description = "No holiday on that date", body = Object, example = json!({
            "message": "No holiday declared for this date"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Holiday"
)]
pub async fn delete_holiday(
    pool: web::Data<MySqlPool>,
    path: web::Path<NaiveDate>,
) -> actix_web::Result<impl Responder> {
    let date = path.into_inner();

    let result = sqlx::query(r#"DELETE FROM non_working_days WHERE date = ?"#)
        .bind(date)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, %date, "Failed to remove holiday");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "No holiday declared for this date"
        })));
    }

    report_cache::invalidate_all();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Holiday removed"
    })))
}
