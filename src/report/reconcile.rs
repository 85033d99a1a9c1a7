use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use derive_more::{Display, Error};
use serde::{Serialize, Serializer};
use strum_macros::EnumString;
use tracing::warn;
use utoipa::ToSchema;

use crate::model::attendance::AttendanceRecord;
use crate::model::holiday::Holiday;
use crate::model::leave_request::LeaveRequest;

use super::calendar::{WorkCalendar, days_in_month};

#[derive(Debug, Display, Error, PartialEq)]
pub enum ReconcileError {
    #[display(fmt = "invalid calendar input: year {} month {}", year, month)]
    InvalidCalendarInput { year: i32, month: u32 },
}

/// Clock status vocabulary recognized in `attendance_log.status`. Anything
/// outside it is carried through as `Other` and never adjusts counters.
#[derive(Debug, Clone, PartialEq, EnumString)]
pub enum ClockStatus {
    Present,
    Late,
    #[strum(default)]
    Other(String),
}

/// Per-day classification. Exactly one applies to each calendar day.
#[derive(Debug, Clone, PartialEq)]
pub enum DayStatus {
    DayOff,
    Holiday { description: String },
    Leave { leave_type: String },
    Present,
    Late,
    Absent,
    NoRecord,
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayStatus::DayOff => f.write_str("Day Off"),
            DayStatus::Holiday { description } => write!(f, "Holiday ({})", description),
            DayStatus::Leave { leave_type } => write!(f, "Leave ({})", leave_type),
            DayStatus::Present => f.write_str("Present"),
            DayStatus::Late => f.write_str("Late"),
            DayStatus::Absent => f.write_str("Absent"),
            DayStatus::NoRecord => f.write_str("No Record"),
        }
    }
}

// Serialized as the label the timesheet table shows.
impl Serialize for DayStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the monthly timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DayEntry {
    #[schema(example = "2024-11-04", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "08:00:00", value_type = Option<String>, format = "time")]
    pub time_in: Option<NaiveTime>,
    #[schema(example = "17:00:00", value_type = Option<String>, format = "time")]
    pub time_out: Option<NaiveTime>,
    #[schema(example = "Present", value_type = String)]
    pub status: DayStatus,
    #[schema(example = "9 hours")]
    pub total_hours: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct AttendanceSummary {
    pub total_work_days: u32,
    pub present_days: u32,
    pub late_days: u32,
    pub absent_days: u32,
    pub leave_days: u32,
    pub holiday_days: u32,
    pub day_off_days: u32,
    pub attendance_rate_percent: u32,
    pub total_worked_hours: u64,
    pub total_worked_minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub timeline: Vec<DayEntry>,
    pub summary: AttendanceSummary,
}

impl WorkCalendar {
    /// Merges raw clock logs, holidays and approved leave into one complete
    /// per-day timeline for the month, plus aggregate counters.
    ///
    /// Inputs are trusted to be pre-scoped to the employee and month; rows
    /// that fall outside the month are skipped, and records with missing
    /// time fields degrade to an "N/A" duration instead of failing. The
    /// caller supplies `today`, so the same inputs always produce the same
    /// report.
    #[allow(clippy::too_many_arguments)]
    pub fn reconcile(
        &self,
        employee_id: u64,
        employee_name: &str,
        year: i32,
        month: u32,
        records: &[AttendanceRecord],
        holidays: &[Holiday],
        leaves: &[LeaveRequest],
        today: NaiveDate,
    ) -> Result<MonthlyReport, ReconcileError> {
        let invalid = ReconcileError::InvalidCalendarInput { year, month };
        if !(1000..=9999).contains(&year) {
            return Err(invalid);
        }
        let days = days_in_month(year, month).ok_or(invalid)?;
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ReconcileError::InvalidCalendarInput { year, month })?;
        let last = first + chrono::Days::new(u64::from(days) - 1);

        // Index holidays by date. First row wins on duplicates.
        let mut holiday_index: HashMap<NaiveDate, String> = HashMap::new();
        for holiday in holidays {
            if let Some(existing) = holiday_index.get(&holiday.date) {
                warn!(
                    date = %holiday.date,
                    kept = %existing,
                    ignored = %holiday.description,
                    "ambiguous holiday overlap, first row wins"
                );
            } else {
                holiday_index.insert(holiday.date, holiday.description.clone());
            }
        }

        // Expand leave intervals to one entry per covered day, clamped to
        // the month. Last row wins on overlaps.
        let mut leave_index: HashMap<NaiveDate, String> = HashMap::new();
        for leave in leaves {
            let start = leave.start_date.max(first);
            let end = leave.end_date.min(last);
            for date in start.iter_days().take_while(|d| *d <= end) {
                if let Some(previous) = leave_index.insert(date, leave.leave_type.clone()) {
                    warn!(
                        %date,
                        replaced = %previous,
                        replacement = %leave.leave_type,
                        "ambiguous leave overlap, last row wins"
                    );
                }
            }
        }

        // Pass 1: classify every day of the month, fixed priority order.
        let mut summary = AttendanceSummary::default();
        let mut timeline: Vec<DayEntry> = Vec::with_capacity(days as usize);
        for date in first.iter_days().take(days as usize) {
            let status = if self.is_rest_day(date) {
                DayStatus::DayOff
            } else if let Some(description) = holiday_index.get(&date) {
                summary.holiday_days += 1;
                DayStatus::Holiday {
                    description: description.clone(),
                }
            } else if let Some(leave_type) = leave_index.get(&date) {
                summary.leave_days += 1;
                DayStatus::Leave {
                    leave_type: leave_type.clone(),
                }
            } else {
                summary.total_work_days += 1;
                if date <= today {
                    summary.absent_days += 1;
                    DayStatus::Absent
                } else {
                    DayStatus::NoRecord
                }
            };

            timeline.push(DayEntry {
                date,
                employee_id,
                employee_name: employee_name.to_owned(),
                time_in: None,
                time_out: None,
                status,
                total_hours: "N/A".to_owned(),
            });
        }

        // Pass 2: overlay the raw clock logs. A provisional absence is
        // retracted only when a recognized status lands on a counted
        // workday slot.
        for record in records {
            if record.date.year() != year || record.date.month() != month {
                continue;
            }
            let entry = &mut timeline[(record.date.day() - 1) as usize];
            let provisional = matches!(entry.status, DayStatus::Absent | DayStatus::NoRecord);
            let was_assumed_absent = entry.status == DayStatus::Absent;

            match record.status.parse::<ClockStatus>() {
                Ok(ClockStatus::Present) => {
                    if provisional {
                        summary.present_days += 1;
                        if was_assumed_absent {
                            summary.absent_days -= 1;
                        }
                    }
                    entry.status = DayStatus::Present;
                }
                Ok(ClockStatus::Late) => {
                    if provisional {
                        summary.late_days += 1;
                        if was_assumed_absent {
                            summary.absent_days -= 1;
                        }
                    }
                    entry.status = DayStatus::Late;
                }
                // Unrecognized free text: keep the classification.
                _ => {}
            }

            entry.time_in = record.time_in;
            entry.time_out = record.time_out;
            entry.total_hours = duration_label(record.time_in, record.time_out);
        }

        // Totals over every day that has both timestamps.
        let mut worked_minutes: i64 = 0;
        for entry in &timeline {
            if let (Some(time_in), Some(time_out)) = (entry.time_in, entry.time_out) {
                worked_minutes += elapsed_minutes(time_in, time_out);
            }
        }
        summary.total_worked_hours = (worked_minutes / 60) as u64;
        summary.total_worked_minutes = (worked_minutes % 60) as u64;

        summary.attendance_rate_percent = if summary.total_work_days > 0 {
            let attended = f64::from(summary.present_days + summary.late_days);
            (attended / f64::from(summary.total_work_days) * 100.0).round() as u32
        } else {
            0
        };

        summary.day_off_days =
            days - summary.total_work_days - summary.holiday_days - summary.leave_days;

        Ok(MonthlyReport { timeline, summary })
    }
}

/// Elapsed wall-clock minutes between two times of day. A `time_out`
/// earlier than `time_in` is an overnight shift and rolls over midnight.
fn elapsed_minutes(time_in: NaiveTime, time_out: NaiveTime) -> i64 {
    let mut minutes = (time_out - time_in).num_minutes();
    if minutes < 0 {
        minutes += 24 * 60;
    }
    minutes
}

/// Human-readable duration, e.g. "9 hours", "1 hour and 30 minutes".
pub fn duration_label(time_in: Option<NaiveTime>, time_out: Option<NaiveTime>) -> String {
    let (Some(time_in), Some(time_out)) = (time_in, time_out) else {
        return "N/A".to_owned();
    };

    let minutes = elapsed_minutes(time_in, time_out);
    let (hours, minutes) = (minutes / 60, minutes % 60);

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{} hour{}", hours, if hours != 1 { "s" } else { "" }));
    }
    if minutes > 0 {
        parts.push(format!(
            "{} minute{}",
            minutes,
            if minutes != 1 { "s" } else { "" }
        ));
    }

    if parts.is_empty() {
        "0 hours".to_owned()
    } else {
        parts.join(" and ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn record(
        day_date: NaiveDate,
        time_in: Option<NaiveTime>,
        time_out: Option<NaiveTime>,
        status: &str,
    ) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: 7,
            date: day_date,
            time_in,
            time_out,
            status: status.to_owned(),
        }
    }

    fn holiday(day_date: NaiveDate, description: &str) -> Holiday {
        Holiday {
            date: day_date,
            description: description.to_owned(),
        }
    }

    fn leave(start: NaiveDate, end: NaiveDate, leave_type: &str) -> LeaveRequest {
        LeaveRequest {
            id: 1,
            employee_id: 7,
            start_date: start,
            end_date: end,
            leave_type: leave_type.to_owned(),
            status: "Approved".to_owned(),
        }
    }

    fn reconcile(
        year: i32,
        month: u32,
        records: &[AttendanceRecord],
        holidays: &[Holiday],
        leaves: &[LeaveRequest],
        today: NaiveDate,
    ) -> MonthlyReport {
        WorkCalendar::default()
            .reconcile(7, "Jane Cruz", year, month, records, holidays, leaves, today)
            .unwrap()
    }

    #[test]
    fn november_2024_worked_example() {
        let records = vec![record(
            date(2024, 11, 4),
            Some(time(8, 0)),
            Some(time(17, 0)),
            "Present",
        )];
        let report = reconcile(2024, 11, &records, &[], &[], date(2024, 11, 15));

        assert_eq!(report.timeline.len(), 30);

        // Sundays are day-offs
        for day in [3, 10, 17, 24] {
            assert_eq!(report.timeline[day - 1].status, DayStatus::DayOff);
        }

        let nov4 = &report.timeline[3];
        assert_eq!(nov4.status, DayStatus::Present);
        assert_eq!(nov4.total_hours, "9 hours");

        // Every other past workday is absent, every future workday unclassified
        assert_eq!(report.timeline[0].status, DayStatus::Absent);
        assert_eq!(report.timeline[14].status, DayStatus::Absent);
        assert_eq!(report.timeline[15].status, DayStatus::NoRecord);
        assert_eq!(report.timeline[29].status, DayStatus::NoRecord);

        assert_eq!(report.summary.total_work_days, 26);
        assert_eq!(report.summary.present_days, 1);
        assert_eq!(report.summary.late_days, 0);
        // 13 workdays on or before Nov 15, one of them contradicted by a log
        assert_eq!(report.summary.absent_days, 12);
        assert_eq!(report.summary.day_off_days, 4);
        assert_eq!(report.summary.attendance_rate_percent, 4);
        assert_eq!(report.summary.total_worked_hours, 9);
        assert_eq!(report.summary.total_worked_minutes, 0);
    }

    #[test]
    fn timeline_is_complete_and_ordered() {
        for (year, month, expected) in [(2024, 2, 29), (2023, 2, 28), (2024, 11, 30), (2025, 1, 31)]
        {
            let report = reconcile(year, month, &[], &[], &[], date(2026, 1, 1));
            assert_eq!(report.timeline.len(), expected);
            for (index, entry) in report.timeline.iter().enumerate() {
                assert_eq!(entry.date, date(year, month, index as u32 + 1));
            }
        }
    }

    #[test]
    fn day_classes_partition_the_month() {
        let holidays = vec![holiday(date(2024, 11, 1), "All Saints' Day")];
        let leaves = vec![leave(date(2024, 11, 5), date(2024, 11, 7), "sick")];
        let report = reconcile(2024, 11, &[], &holidays, &leaves, date(2024, 11, 30));

        let s = &report.summary;
        assert_eq!(s.holiday_days, 1);
        assert_eq!(s.leave_days, 3);
        assert_eq!(
            s.total_work_days + s.holiday_days + s.leave_days + s.day_off_days,
            30
        );
    }

    #[test]
    fn present_late_absent_partition_for_a_fully_past_month() {
        let records = vec![
            record(date(2024, 3, 4), Some(time(8, 0)), Some(time(17, 0)), "Present"),
            record(date(2024, 3, 5), Some(time(9, 40)), Some(time(17, 0)), "Late"),
        ];
        let report = reconcile(2024, 3, &records, &[], &[], date(2024, 4, 30));

        let s = &report.summary;
        assert!(
            report
                .timeline
                .iter()
                .all(|entry| entry.status != DayStatus::NoRecord)
        );
        assert_eq!(s.present_days + s.late_days + s.absent_days, s.total_work_days);
        assert_eq!(s.present_days, 1);
        assert_eq!(s.late_days, 1);
    }

    #[test]
    fn reconcile_is_deterministic() {
        let records = vec![record(
            date(2024, 11, 4),
            Some(time(8, 0)),
            Some(time(17, 0)),
            "Present",
        )];
        let holidays = vec![holiday(date(2024, 11, 1), "All Saints' Day")];
        let leaves = vec![leave(date(2024, 11, 5), date(2024, 11, 7), "annual")];

        let first = reconcile(2024, 11, &records, &holidays, &leaves, date(2024, 11, 15));
        let second = reconcile(2024, 11, &records, &holidays, &leaves, date(2024, 11, 15));
        assert_eq!(first, second);
    }

    #[test]
    fn overnight_shift_rolls_over_midnight() {
        let records = vec![record(
            date(2024, 11, 4),
            Some(time(22, 0)),
            Some(time(6, 0)),
            "Present",
        )];
        let report = reconcile(2024, 11, &records, &[], &[], date(2024, 11, 15));

        assert_eq!(report.timeline[3].total_hours, "8 hours");
        assert_eq!(report.summary.total_worked_hours, 8);
        assert_eq!(report.summary.total_worked_minutes, 0);
    }

    #[test]
    fn minutes_carry_into_hours() {
        let records = vec![
            record(date(2024, 11, 4), Some(time(8, 0)), Some(time(16, 45)), "Present"),
            record(date(2024, 11, 5), Some(time(8, 0)), Some(time(16, 30)), "Present"),
        ];
        let report = reconcile(2024, 11, &records, &[], &[], date(2024, 11, 15));

        // 8h45 + 8h30 = 17h15
        assert_eq!(report.summary.total_worked_hours, 17);
        assert_eq!(report.summary.total_worked_minutes, 15);
    }

    #[test]
    fn no_workdays_means_zero_rate() {
        use chrono::Weekday;

        let calendar = WorkCalendar::new(vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]);
        let report = calendar
            .reconcile(7, "Jane Cruz", 2024, 11, &[], &[], &[], date(2024, 11, 30))
            .unwrap();

        assert_eq!(report.summary.total_work_days, 0);
        assert_eq!(report.summary.attendance_rate_percent, 0);
        assert_eq!(report.summary.day_off_days, 30);
    }

    #[test]
    fn invalid_calendar_input_is_rejected() {
        let calendar = WorkCalendar::default();
        let today = date(2024, 11, 15);
        for (year, month) in [(2024, 0), (2024, 13), (99, 5)] {
            let result = calendar.reconcile(7, "Jane Cruz", year, month, &[], &[], &[], today);
            assert_eq!(
                result,
                Err(ReconcileError::InvalidCalendarInput { year, month })
            );
        }
    }

    #[test]
    fn rest_day_outranks_holiday_and_leave() {
        // 2024-11-03 is a Sunday
        let holidays = vec![holiday(date(2024, 11, 3), "Foundation Day")];
        let leaves = vec![leave(date(2024, 11, 3), date(2024, 11, 3), "annual")];
        let report = reconcile(2024, 11, &[], &holidays, &leaves, date(2024, 11, 30));

        assert_eq!(report.timeline[2].status, DayStatus::DayOff);
        assert_eq!(report.summary.holiday_days, 0);
        assert_eq!(report.summary.leave_days, 0);
    }

    #[test]
    fn holiday_outranks_leave() {
        let holidays = vec![holiday(date(2024, 11, 4), "Foundation Day")];
        let leaves = vec![leave(date(2024, 11, 4), date(2024, 11, 4), "annual")];
        let report = reconcile(2024, 11, &[], &holidays, &leaves, date(2024, 11, 30));

        assert_eq!(
            report.timeline[3].status,
            DayStatus::Holiday {
                description: "Foundation Day".to_owned()
            }
        );
        assert_eq!(report.summary.holiday_days, 1);
        assert_eq!(report.summary.leave_days, 0);
    }

    #[test]
    fn duplicate_holiday_keeps_the_first_row() {
        let holidays = vec![
            holiday(date(2024, 11, 4), "Foundation Day"),
            holiday(date(2024, 11, 4), "Company Outing"),
        ];
        let report = reconcile(2024, 11, &[], &holidays, &[], date(2024, 11, 30));

        assert_eq!(
            report.timeline[3].status,
            DayStatus::Holiday {
                description: "Foundation Day".to_owned()
            }
        );
        assert_eq!(report.summary.holiday_days, 1);
    }

    #[test]
    fn overlapping_leave_keeps_the_last_row() {
        let leaves = vec![
            leave(date(2024, 11, 4), date(2024, 11, 6), "annual"),
            leave(date(2024, 11, 6), date(2024, 11, 8), "sick"),
        ];
        let report = reconcile(2024, 11, &[], &[], &leaves, date(2024, 11, 30));

        assert_eq!(
            report.timeline[5].status,
            DayStatus::Leave {
                leave_type: "sick".to_owned()
            }
        );
        assert_eq!(report.summary.leave_days, 5);
    }

    #[test]
    fn leave_interval_is_clamped_to_the_month() {
        let leaves = vec![leave(date(2024, 10, 28), date(2024, 11, 2), "annual")];
        let report = reconcile(2024, 11, &[], &[], &leaves, date(2024, 11, 30));

        assert_eq!(
            report.timeline[0].status,
            DayStatus::Leave {
                leave_type: "annual".to_owned()
            }
        );
        assert_eq!(
            report.timeline[1].status,
            DayStatus::Leave {
                leave_type: "annual".to_owned()
            }
        );
        assert_eq!(report.summary.leave_days, 2);
    }

    #[test]
    fn unrecognized_clock_status_keeps_the_classification() {
        let records = vec![record(
            date(2024, 11, 4),
            Some(time(8, 0)),
            Some(time(12, 0)),
            "Half Day",
        )];
        let report = reconcile(2024, 11, &records, &[], &[], date(2024, 11, 15));

        let nov4 = &report.timeline[3];
        assert_eq!(nov4.status, DayStatus::Absent);
        assert_eq!(nov4.total_hours, "4 hours");
        assert_eq!(report.summary.present_days, 0);
        // the assumed absence stands
        assert_eq!(report.summary.absent_days, 13);
        assert_eq!(report.summary.total_worked_hours, 4);
    }

    #[test]
    fn log_on_a_rest_day_does_not_move_counters() {
        // 2024-11-03 is a Sunday
        let records = vec![record(
            date(2024, 11, 3),
            Some(time(8, 0)),
            Some(time(17, 0)),
            "Present",
        )];
        let report = reconcile(2024, 11, &records, &[], &[], date(2024, 11, 15));

        assert_eq!(report.timeline[2].status, DayStatus::Present);
        assert_eq!(report.summary.present_days, 0);
        assert_eq!(report.summary.absent_days, 13);
        assert_eq!(report.summary.total_worked_hours, 9);
    }

    #[test]
    fn future_dated_log_counts_without_retraction() {
        let records = vec![record(
            date(2024, 11, 20),
            Some(time(8, 0)),
            Some(time(17, 0)),
            "Present",
        )];
        let report = reconcile(2024, 11, &records, &[], &[], date(2024, 11, 15));

        assert_eq!(report.timeline[19].status, DayStatus::Present);
        assert_eq!(report.summary.present_days, 1);
        assert_eq!(report.summary.absent_days, 13);
    }

    #[test]
    fn record_outside_the_month_is_skipped() {
        let records = vec![record(
            date(2024, 10, 31),
            Some(time(8, 0)),
            Some(time(17, 0)),
            "Present",
        )];
        let report = reconcile(2024, 11, &records, &[], &[], date(2024, 11, 15));

        assert_eq!(report.summary.present_days, 0);
        assert_eq!(report.summary.total_worked_hours, 0);
    }

    #[test]
    fn missing_time_fields_degrade_to_na() {
        let records = vec![record(date(2024, 11, 4), Some(time(8, 0)), None, "Present")];
        let report = reconcile(2024, 11, &records, &[], &[], date(2024, 11, 15));

        let nov4 = &report.timeline[3];
        assert_eq!(nov4.status, DayStatus::Present);
        assert_eq!(nov4.total_hours, "N/A");
        assert_eq!(report.summary.present_days, 1);
        assert_eq!(report.summary.total_worked_hours, 0);
    }

    #[test]
    fn duration_labels() {
        assert_eq!(
            duration_label(Some(time(8, 0)), Some(time(17, 0))),
            "9 hours"
        );
        assert_eq!(
            duration_label(Some(time(9, 0)), Some(time(10, 1))),
            "1 hour and 1 minute"
        );
        assert_eq!(
            duration_label(Some(time(9, 0)), Some(time(10, 30))),
            "1 hour and 30 minutes"
        );
        assert_eq!(
            duration_label(Some(time(9, 0)), Some(time(9, 45))),
            "45 minutes"
        );
        assert_eq!(duration_label(Some(time(9, 0)), Some(time(9, 0))), "0 hours");
        assert_eq!(duration_label(Some(time(9, 0)), None), "N/A");
        assert_eq!(duration_label(None, Some(time(17, 0))), "N/A");
        assert_eq!(duration_label(None, None), "N/A");
    }

    #[test]
    fn statuses_serialize_as_timesheet_labels() {
        let report = reconcile(
            2024,
            11,
            &[],
            &[holiday(date(2024, 11, 1), "All Saints' Day")],
            &[leave(date(2024, 11, 5), date(2024, 11, 5), "sick")],
            date(2024, 11, 15),
        );

        let labels: Vec<serde_json::Value> = report
            .timeline
            .iter()
            .map(|entry| serde_json::to_value(&entry.status).unwrap())
            .collect();
        assert_eq!(labels[0], serde_json::json!("Holiday (All Saints' Day)"));
        assert_eq!(labels[2], serde_json::json!("Day Off"));
        assert_eq!(labels[4], serde_json::json!("Leave (sick)"));
        assert_eq!(labels[3], serde_json::json!("Absent"));
        assert_eq!(labels[29], serde_json::json!("No Record"));
    }

    #[test]
    fn clock_status_vocabulary() {
        assert_eq!("Present".parse(), Ok(ClockStatus::Present));
        assert_eq!("Late".parse(), Ok(ClockStatus::Late));
        assert_eq!(
            "Overtime".parse(),
            Ok(ClockStatus::Other("Overtime".to_owned()))
        );
    }
}
