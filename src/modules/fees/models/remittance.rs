use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::fees::services::{DEFAULT_FEE_RATE_HT, DEFAULT_POSTAL_CODE};

/// Inputs of an owner remittance (reversement propriétaire)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemittanceInput {
    pub rent_collected: Decimal,
    pub charges_collected: Decimal,
    pub fee_rate_ht: Decimal,
    pub repair_deductions: Decimal,
    pub other_deductions: Decimal,
    pub postal_code: String,
}

impl RemittanceInput {
    /// Rent and charges with the default fee rate, no deductions, metropolitan VAT
    pub fn new(rent_collected: Decimal, charges_collected: Decimal) -> Self {
        Self {
            rent_collected,
            charges_collected,
            ..Self::default()
        }
    }

    pub fn with_fee_rate(mut self, fee_rate_ht: Decimal) -> Self {
        self.fee_rate_ht = fee_rate_ht;
        self
    }

    pub fn with_deductions(mut self, repairs: Decimal, other: Decimal) -> Self {
        self.repair_deductions = repairs;
        self.other_deductions = other;
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }
}

impl Default for RemittanceInput {
    fn default() -> Self {
        Self {
            rent_collected: Decimal::ZERO,
            charges_collected: Decimal::ZERO,
            fee_rate_ht: DEFAULT_FEE_RATE_HT,
            repair_deductions: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            postal_code: DEFAULT_POSTAL_CODE.to_string(),
        }
    }
}

/// Amount paid out to an owner after fees and deductions.
///
/// `amount_remitted` is negative when the owner owes the platform; it is
/// never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemittanceCalculation {
    pub rent_collected: Decimal,
    pub charges_collected: Decimal,
    pub fees_ttc: Decimal,
    pub repair_deductions: Decimal,
    pub other_deductions: Decimal,
    pub amount_remitted: Decimal,
}

/// Body of `POST /calculations/remittance`
#[derive(Debug, Clone, Deserialize)]
pub struct RemittanceRequest {
    pub rent_collected: Decimal,
    #[serde(default)]
    pub charges_collected: Decimal,
    pub fee_rate_ht: Option<Decimal>,
    #[serde(default)]
    pub repair_deductions: Decimal,
    #[serde(default)]
    pub other_deductions: Decimal,
    pub postal_code: Option<String>,
}

impl RemittanceRequest {
    pub fn into_input(self, default_fee_rate_ht: Decimal, default_postal_code: &str) -> RemittanceInput {
        RemittanceInput {
            rent_collected: self.rent_collected,
            charges_collected: self.charges_collected,
            fee_rate_ht: self.fee_rate_ht.unwrap_or(default_fee_rate_ht),
            repair_deductions: self.repair_deductions,
            other_deductions: self.other_deductions,
            postal_code: self
                .postal_code
                .unwrap_or_else(|| default_postal_code.to_string()),
        }
    }
}
