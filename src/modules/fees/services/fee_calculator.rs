use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{checked_amount, round_money};
use crate::core::{AppError, Result};
use crate::modules::fees::models::FeeCalculation;
use crate::modules::taxes::resolve_vat_rate;

/// Default management fee rate, excluding VAT (7%)
pub const DEFAULT_FEE_RATE_HT: Decimal = Decimal::from_parts(7, 0, 0, false, 2);

/// Postal code assumed when a property has none on file (Paris)
pub const DEFAULT_POSTAL_CODE: &str = "75000";

/// Fee rates are limited to 4 decimal places (e.g. 0.0725)
const MAX_FEE_RATE_SCALE: u32 = 4;

/// Calculator for management fees (honoraires) and the owner's net share
pub struct FeeCalculator;

impl FeeCalculator {
    /// Compute the fee breakdown for a gross rent.
    ///
    /// Intermediate values keep full precision; each returned amount is rounded
    /// to cents on its own. Negative rents are not rejected and simply
    /// propagate through the arithmetic. Amounts too large for a `Decimal`
    /// are a validation error.
    pub fn compute_fees(
        gross_rent: Decimal,
        fee_rate_ht: Decimal,
        postal_code: &str,
    ) -> Result<FeeCalculation> {
        let vat_rate = resolve_vat_rate(postal_code);

        let fee_amount_ht = checked_amount(gross_rent.checked_mul(fee_rate_ht), "fee_amount_ht")?;
        let vat_amount = checked_amount(fee_amount_ht.checked_mul(vat_rate), "vat_amount")?;
        let total_ttc = checked_amount(fee_amount_ht.checked_add(vat_amount), "total_ttc")?;
        let net_to_owner = checked_amount(gross_rent.checked_sub(total_ttc), "net_to_owner")?;

        debug!(
            %gross_rent,
            %fee_rate_ht,
            %vat_rate,
            %total_ttc,
            "Computed management fees"
        );

        Ok(FeeCalculation {
            gross_rent,
            fee_rate_ht,
            fee_amount_ht: round_money(fee_amount_ht),
            vat_rate,
            vat_amount: round_money(vat_amount),
            total_ttc: round_money(total_ttc),
            net_to_owner: round_money(net_to_owner),
        })
    }

    /// [`compute_fees`](Self::compute_fees) with the default 7% rate in metropolitan France
    pub fn compute_fees_with_defaults(gross_rent: Decimal) -> Result<FeeCalculation> {
        Self::compute_fees(gross_rent, DEFAULT_FEE_RATE_HT, DEFAULT_POSTAL_CODE)
    }

    /// Validate a fee rate received from a client or configuration.
    ///
    /// The calculators themselves accept any rate; this guards the request
    /// boundary: 0 <= rate <= 1 with at most 4 decimal places.
    pub fn validate_fee_rate(fee_rate_ht: Decimal) -> Result<()> {
        if fee_rate_ht < Decimal::ZERO {
            return Err(AppError::validation("Fee rate cannot be negative"));
        }

        if fee_rate_ht > Decimal::ONE {
            return Err(AppError::validation("Fee rate cannot exceed 1.0 (100%)"));
        }

        if fee_rate_ht.normalize().scale() > MAX_FEE_RATE_SCALE {
            return Err(AppError::validation(format!(
                "Fee rate cannot have more than {} decimal places",
                MAX_FEE_RATE_SCALE
            )));
        }

        Ok(())
    }
}
