use actix_web::{web, HttpResponse};

use crate::config::BillingConfig;
use crate::core::error::AppError;
use crate::modules::fees::models::{FeeRequest, RemittanceRequest};
use crate::modules::fees::services::{FeeCalculator, RemittanceCalculator};

/// Compute the management fee breakdown for a rent
/// POST /calculations/fees
pub async fn calculate_fees(
    billing: web::Data<BillingConfig>,
    request: web::Json<FeeRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let fee_rate_ht = request.fee_rate_ht.unwrap_or(billing.default_fee_rate_ht);
    FeeCalculator::validate_fee_rate(fee_rate_ht)?;

    let postal_code = request
        .postal_code
        .as_deref()
        .unwrap_or(&billing.default_postal_code);

    let fees = FeeCalculator::compute_fees(request.gross_rent, fee_rate_ht, postal_code)?;

    Ok(HttpResponse::Ok().json(fees))
}

/// Compute the amount remitted to an owner
/// POST /calculations/remittance
pub async fn calculate_remittance(
    billing: web::Data<BillingConfig>,
    request: web::Json<RemittanceRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request
        .into_inner()
        .into_input(billing.default_fee_rate_ht, &billing.default_postal_code);
    FeeCalculator::validate_fee_rate(input.fee_rate_ht)?;

    let remittance = RemittanceCalculator::compute(&input)?;

    Ok(HttpResponse::Ok().json(remittance))
}

/// Configure fee routes
pub fn configure_fee_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/fees", web::post().to(calculate_fees))
        .route("/remittance", web::post().to(calculate_remittance));
}
