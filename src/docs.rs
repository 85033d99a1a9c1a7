use crate::api::attendance::ClockRequest;
use crate::api::holiday::{CreateHoliday, HolidayQuery};
use crate::api::leave_request::{CreateLeave, LeaveFilter, LeaveListResponse, LeaveResponse};
use crate::api::schedule::{MonthlyScheduleResponse, ScheduleQuery};
use crate::model::employee::Employee;
use crate::model::holiday::Holiday;
use crate::report::reconcile::{AttendanceSummary, DayEntry};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Portal API",
        version = "1.0.0",
        description = r#"
## Attendance & Scheduling Portal

This API powers the attendance side of an HR portal: supervisors pull
reconciled monthly timesheets, employees clock in and out, and admins
maintain the holiday and leave calendars that feed the reconciliation.

### 🔹 Key Features
- **Monthly Schedule**
  - One reconciled row per calendar day plus summary counters
  - Merges clock logs, declared holidays and approved leave
- **Attendance Tracking**
  - Daily check-in and check-out, late arrivals flagged automatically
- **Leave Management**
  - Apply for leave, approve/reject requests, and view leave history
- **Holiday Calendar**
  - Declare and remove company non-working days

### 📦 Response Format
- JSON-based RESTful responses
- Pagination supported for list endpoints

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::schedule::monthly_schedule,

        crate::api::attendance::check_in,
        crate::api::attendance::check_out,

        crate::api::leave_request::leave_list,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::create_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,

        crate::api::holiday::list_holidays,
        crate::api::holiday::create_holiday,
        crate::api::holiday::delete_holiday
    ),
    components(
        schemas(
            ScheduleQuery,
            MonthlyScheduleResponse,
            DayEntry,
            AttendanceSummary,
            ClockRequest,
            LeaveFilter,
            LeaveResponse,
            LeaveListResponse,
            CreateLeave,
            HolidayQuery,
            CreateHoliday,
            Holiday,
            Employee
        )
    ),
    tags(
        (name = "Schedule", description = "Monthly timesheet APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Leave", description = "Leave management APIs"),
        (name = "Holiday", description = "Holiday calendar APIs"),
    )
)]
pub struct ApiDoc;
