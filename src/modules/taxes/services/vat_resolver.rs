use rust_decimal::Decimal;

use crate::modules::taxes::models::Territory;

/// Resolve the VAT rate applied to management fees for a property's postal code.
///
/// Only the first three characters matter: 971/972 (Antilles) and 974
/// (Réunion) give 8.5%, 973 (Guyane) and 976 (Mayotte) give 0%, everything
/// else including an empty code gives the metropolitan 20%. Never fails.
pub fn resolve_vat_rate(postal_code: &str) -> Decimal {
    let territory = Territory::from_postal_code(postal_code);
    tracing::trace!(postal_code, %territory, "Resolved VAT territory");
    territory.vat_rate()
}
