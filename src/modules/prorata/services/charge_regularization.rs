use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{checked_amount, round_money};
use crate::core::Result;
use crate::modules::prorata::models::{ChargeRegularization, ProrataResult};
use crate::modules::prorata::services::ProrataCalculator;

/// Year-end reconciliation of charge provisions against actual charges
pub struct ChargeRegularizationCalculator;

impl ChargeRegularizationCalculator {
    /// Compare the provisions a tenant paid with their share of the year's
    /// actual charges for an occupancy window.
    pub fn compute(
        annual_charges: Decimal,
        provisions_paid: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
        year: i32,
    ) -> Result<ChargeRegularization> {
        let prorata = ProrataCalculator::compute(start_date, end_date, year)?;
        Self::regularize(prorata, annual_charges, provisions_paid)
    }

    /// Same as [`compute`](Self::compute) with `YYYY-MM-DD` date strings
    pub fn compute_from_str(
        annual_charges: Decimal,
        provisions_paid: Decimal,
        start_date: &str,
        end_date: &str,
        year: i32,
    ) -> Result<ChargeRegularization> {
        let prorata = ProrataCalculator::compute_from_str(start_date, end_date, year)?;
        Self::regularize(prorata, annual_charges, provisions_paid)
    }

    /// The share uses the exact occupied/total day fraction rather than the
    /// 4-decimal ratio carried in `prorata`; share and balance are rounded
    /// to cents only on output.
    pub fn regularize(
        prorata: ProrataResult,
        annual_charges: Decimal,
        provisions_paid: Decimal,
    ) -> Result<ChargeRegularization> {
        let share = annual_charges
            .checked_mul(Decimal::from(prorata.occupied_days))
            .and_then(|charges| charges.checked_div(Decimal::from(prorata.total_days_in_year)));
        let share = checked_amount(share, "tenant_share")?;
        let balance = checked_amount(share.checked_sub(provisions_paid), "balance")?;

        debug!(
            %annual_charges,
            %provisions_paid,
            tenant_share = %share,
            %balance,
            "Computed charge regularization"
        );

        Ok(ChargeRegularization {
            prorata,
            annual_charges,
            provisions_paid,
            tenant_share: round_money(share),
            balance: round_money(balance),
        })
    }
}
