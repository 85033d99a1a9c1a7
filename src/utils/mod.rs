pub mod employee_filter;
pub mod report_cache;
