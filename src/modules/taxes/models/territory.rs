use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// French tax territory a property belongs to, derived from its postal code.
///
/// Overseas departments apply a reduced VAT rate (Guadeloupe, Martinique,
/// La Réunion) or no VAT at all (Guyane, Mayotte).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Territory {
    /// Mainland France and Corsica (20%)
    #[default]
    Metropole,
    /// Guadeloupe (971) and Martinique (972), 8.5%
    Antilles,
    /// Guyane (973), no VAT
    Guyane,
    /// La Réunion (974), 8.5%
    Reunion,
    /// Mayotte (976), no VAT
    Mayotte,
}

impl Territory {
    /// Resolve the territory from the first three characters of a postal code.
    ///
    /// Empty or unrecognised codes fall back to [`Territory::Metropole`].
    pub fn from_postal_code(postal_code: &str) -> Self {
        match postal_code.get(..3) {
            Some("971") | Some("972") => Territory::Antilles,
            Some("973") => Territory::Guyane,
            Some("974") => Territory::Reunion,
            Some("976") => Territory::Mayotte,
            _ => Territory::Metropole,
        }
    }

    /// VAT rate applicable to management fees in this territory
    pub fn vat_rate(&self) -> Decimal {
        match self {
            Territory::Metropole => Decimal::new(20, 2),
            Territory::Antilles | Territory::Reunion => Decimal::new(85, 3),
            Territory::Guyane | Territory::Mayotte => Decimal::ZERO,
        }
    }
}

impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Territory::Metropole => write!(f, "METROPOLE"),
            Territory::Antilles => write!(f, "ANTILLES"),
            Territory::Guyane => write!(f, "GUYANE"),
            Territory::Reunion => write!(f, "REUNION"),
            Territory::Mayotte => write!(f, "MAYOTTE"),
        }
    }
}

/// Response body of `GET /calculations/vat-rate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VatRateResponse {
    pub postal_code: String,
    pub territory: Territory,
    pub vat_rate: Decimal,
}

impl VatRateResponse {
    pub fn for_postal_code(postal_code: impl Into<String>) -> Self {
        let postal_code = postal_code.into();
        let territory = Territory::from_postal_code(&postal_code);

        Self {
            postal_code,
            territory,
            vat_rate: territory.vat_rate(),
        }
    }
}
