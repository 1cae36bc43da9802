mod charge_regularization;
mod prorata_result;

pub use charge_regularization::{ChargeRegularization, ChargeRegularizationRequest};
pub use prorata_result::{ProrataRequest, ProrataResult};
