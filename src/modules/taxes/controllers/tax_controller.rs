//! VAT lookup endpoint
//!
//! Mounted under the `/calculations` scope by [`crate::modules::configure_routes`].

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::modules::taxes::models::VatRateResponse;

#[derive(Debug, Deserialize)]
pub struct VatRateQuery {
    #[serde(default)]
    pub postal_code: String,
}

/// Resolve the VAT territory and rate for a postal code
///
/// GET /calculations/vat-rate?postal_code=97200
pub async fn get_vat_rate(query: web::Query<VatRateQuery>) -> HttpResponse {
    let response = VatRateResponse::for_postal_code(query.into_inner().postal_code);
    HttpResponse::Ok().json(response)
}

/// Configure tax routes
pub fn configure_tax_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/vat-rate", web::get().to(get_vat_rate));
}
