use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProrataResult;

/// Annual charges regularization (régularisation des charges) for one tenant.
///
/// A positive `balance` is owed by the tenant, a negative one is refunded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRegularization {
    pub prorata: ProrataResult,
    pub annual_charges: Decimal,
    pub provisions_paid: Decimal,
    /// annual_charges × occupied share of the year
    pub tenant_share: Decimal,
    pub balance: Decimal,
}

/// Body of `POST /calculations/charge-regularization`
#[derive(Debug, Clone, Deserialize)]
pub struct ChargeRegularizationRequest {
    pub annual_charges: Decimal,
    #[serde(default)]
    pub provisions_paid: Decimal,
    pub start_date: String,
    pub end_date: String,
    pub year: i32,
}
