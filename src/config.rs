use chrono::{NaiveTime, Weekday};
use dotenvy::dotenv;
use std::env;

use crate::report::calendar::WorkCalendar;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    // Rate limiting
    pub rate_report_per_min: u32,
    pub rate_mutation_per_min: u32,

    pub api_prefix: String,

    /// Check-ins after this time of day are recorded as "Late"
    pub late_after: NaiveTime,
    /// Weekly rest days; current policy is Sunday only
    pub rest_days: Vec<Weekday>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),

            rate_report_per_min: env::var("RATE_REPORT_PER_MIN")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .unwrap(),
            rate_mutation_per_min: env::var("RATE_MUTATION_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".to_string()),

            late_after: NaiveTime::parse_from_str(
                &env::var("LATE_AFTER").unwrap_or_else(|_| "08:15".to_string()),
                "%H:%M",
            )
            .unwrap(),

            rest_days: env::var("REST_DAYS")
                .unwrap_or_else(|_| "Sunday".to_string())
                .split(',')
                .map(|day| day.trim().parse().unwrap())
                .collect(),
        }
    }

    pub fn work_calendar(&self) -> WorkCalendar {
        WorkCalendar::new(self.rest_days.clone())
    }
}
