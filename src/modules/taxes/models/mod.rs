mod territory;

pub use territory::{Territory, VatRateResponse};
