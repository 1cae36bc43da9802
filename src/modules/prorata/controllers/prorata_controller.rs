use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::prorata::models::{ChargeRegularizationRequest, ProrataRequest};
use crate::modules::prorata::services::{ChargeRegularizationCalculator, ProrataCalculator};

/// Prorate an occupancy window over a calendar year
/// POST /calculations/prorata
pub async fn calculate_prorata(
    request: web::Json<ProrataRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let result =
        ProrataCalculator::compute_from_str(&request.start_date, &request.end_date, request.year)?;

    Ok(HttpResponse::Ok().json(result))
}

/// Reconcile a tenant's charge provisions with the year's actual charges
/// POST /calculations/charge-regularization
pub async fn calculate_charge_regularization(
    request: web::Json<ChargeRegularizationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let regularization = ChargeRegularizationCalculator::compute_from_str(
        request.annual_charges,
        request.provisions_paid,
        &request.start_date,
        &request.end_date,
        request.year,
    )?;

    Ok(HttpResponse::Ok().json(regularization))
}

/// Configure prorata routes
pub fn configure_prorata_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/prorata", web::post().to(calculate_prorata))
        .route(
            "/charge-regularization",
            web::post().to(calculate_charge_regularization),
        );
}
