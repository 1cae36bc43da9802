use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of a calendar year covered by an occupancy window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrataResult {
    /// Inclusive day count of the window clipped to the year, never negative
    pub occupied_days: u32,
    pub total_days_in_year: u32,
    /// occupied_days / total_days_in_year, 4 decimal places
    pub ratio: Decimal,
}

/// Body of `POST /calculations/prorata`; dates are `YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize)]
pub struct ProrataRequest {
    pub start_date: String,
    pub end_date: String,
    pub year: i32,
}
