use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Management fee (honoraires de gestion) breakdown for one rent amount.
///
/// Computed on demand and never stored as the source of truth; the persisted
/// invoice holds the authoritative amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeCalculation {
    pub gross_rent: Decimal,
    pub fee_rate_ht: Decimal,
    /// gross_rent × fee_rate_ht, rounded to cents
    pub fee_amount_ht: Decimal,
    pub vat_rate: Decimal,
    pub vat_amount: Decimal,
    pub total_ttc: Decimal,
    /// gross_rent − total_ttc, may be negative
    pub net_to_owner: Decimal,
}

/// Body of `POST /calculations/fees`
///
/// Omitted fields fall back to the configured billing defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct FeeRequest {
    pub gross_rent: Decimal,
    pub fee_rate_ht: Option<Decimal>,
    pub postal_code: Option<String>,
}
