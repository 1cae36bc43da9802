use actix_web::web;

pub mod fees;
pub mod health;
pub mod leases;
pub mod prorata;
pub mod taxes;

/// Register every API route.
///
/// Calculation endpoints share a single `/calculations` scope so that one
/// module's unmatched path does not shadow another's.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::controllers::configure)
        .service(
            web::scope("/calculations")
                .configure(taxes::controllers::configure_tax_routes)
                .configure(fees::controllers::configure_fee_routes)
                .configure(prorata::controllers::configure_prorata_routes),
        )
        .configure(leases::controllers::configure_lease_routes);
}
