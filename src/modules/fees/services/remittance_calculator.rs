use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::money::{checked_amount, round_money};
use crate::core::Result;
use crate::modules::fees::models::{RemittanceCalculation, RemittanceInput};
use crate::modules::fees::services::FeeCalculator;

/// Nets collected rent and charges against fees and deductions
pub struct RemittanceCalculator;

impl RemittanceCalculator {
    /// Compute the amount remitted to the owner.
    ///
    /// Fees are charged on the rent only, never on recoverable charges. The
    /// rounded `total_ttc` of the fee breakdown is what gets deducted.
    pub fn compute(input: &RemittanceInput) -> Result<RemittanceCalculation> {
        let fees = FeeCalculator::compute_fees(
            input.rent_collected,
            input.fee_rate_ht,
            &input.postal_code,
        )?;

        let amount_remitted = input
            .rent_collected
            .checked_add(input.charges_collected)
            .and_then(|total| total.checked_sub(fees.total_ttc))
            .and_then(|total| total.checked_sub(input.repair_deductions))
            .and_then(|total| total.checked_sub(input.other_deductions));
        let amount_remitted = round_money(checked_amount(amount_remitted, "amount_remitted")?);

        if amount_remitted < Decimal::ZERO {
            warn!(
                %amount_remitted,
                "Deductions exceed collected amounts, owner owes the platform"
            );
        } else {
            debug!(%amount_remitted, fees_ttc = %fees.total_ttc, "Computed owner remittance");
        }

        Ok(RemittanceCalculation {
            rent_collected: input.rent_collected,
            charges_collected: input.charges_collected,
            fees_ttc: fees.total_ttc,
            repair_deductions: input.repair_deductions,
            other_deductions: input.other_deductions,
            amount_remitted,
        })
    }
}
