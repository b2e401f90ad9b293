pub mod check;
pub mod config;
pub mod render;

use crate::errors::AppResult;
use crate::models::trip_plan::TripPlan;
use crate::utils::path::resolve_input;

/// Shared by `render` and `check`: read and parse the input file.
pub(crate) fn load_plan(input: &str) -> AppResult<TripPlan> {
    TripPlan::from_file(&resolve_input(input)?)
}
