use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::leases::services::LeaseActivationService;

/// Activate a signed lease
/// POST /leases/{id}/activate
///
/// 200 with the saga outcome when both updates applied, 500 with the outcome
/// when a step failed and the completed ones were rolled back.
pub async fn activate_lease(
    service: web::Data<LeaseActivationService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let lease_id = path.into_inner();
    let outcome = service.activate(lease_id).await?;

    if outcome.success {
        Ok(HttpResponse::Ok().json(outcome))
    } else {
        tracing::error!(
            %lease_id,
            error = ?outcome.error,
            "Lease activation failed"
        );
        Ok(HttpResponse::InternalServerError().json(outcome))
    }
}

/// Configure lease routes
pub fn configure_lease_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/leases").route("/{id}/activate", web::post().to(activate_lease)));
}
