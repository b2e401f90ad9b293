pub mod daily_log;
pub mod duty_status;
pub mod log_event;
pub mod log_sheet;
pub mod trip_plan;
