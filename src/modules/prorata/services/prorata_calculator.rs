use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::round_ratio;
use crate::core::{AppError, Result};
use crate::modules::prorata::models::ProrataResult;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Day-based proration of rent and charges within a calendar year
pub struct ProrataCalculator;

impl ProrataCalculator {
    /// Prorate an occupancy window given as `YYYY-MM-DD` strings.
    ///
    /// Returns a validation error when either date does not parse.
    pub fn compute_from_str(start_date: &str, end_date: &str, year: i32) -> Result<ProrataResult> {
        let start = parse_date("start_date", start_date)?;
        let end = parse_date("end_date", end_date)?;

        Self::compute(start, end, year)
    }

    /// Prorate an occupancy window over `year`.
    ///
    /// The window is clipped to January 1st..December 31st of the year and
    /// both boundary days count. A window that ends before it starts, or lies
    /// outside the year, occupies 0 days.
    pub fn compute(start_date: NaiveDate, end_date: NaiveDate, year: i32) -> Result<ProrataResult> {
        let (year_start, year_end) = year_bounds(year)?;

        let effective_start = start_date.max(year_start);
        let effective_end = end_date.min(year_end);

        let span = (effective_end - effective_start).num_days() + 1;
        let occupied_days = u32::try_from(span.max(0)).unwrap_or_default();
        let total_days_in_year = Self::days_in_year(year);

        let ratio = round_ratio(Decimal::from(occupied_days) / Decimal::from(total_days_in_year));

        debug!(
            %effective_start,
            %effective_end,
            occupied_days,
            total_days_in_year,
            %ratio,
            "Computed prorata"
        );

        Ok(ProrataResult {
            occupied_days,
            total_days_in_year,
            ratio,
        })
    }

    /// 366 when `year` is divisible by 4, 365 otherwise.
    ///
    /// Century years are not special-cased, so 2100 counts 366 days.
    pub fn days_in_year(year: i32) -> u32 {
        if year % 4 == 0 {
            366
        } else {
            365
        }
    }
}

fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    let last = NaiveDate::from_ymd_opt(year, 12, 31);

    first
        .zip(last)
        .ok_or_else(|| AppError::validation(format!("Year {} is out of range", year)))
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        AppError::validation(format!("{} must be a YYYY-MM-DD date, got '{}'", field, value))
    })
}
