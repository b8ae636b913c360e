// Route exports
pub mod stylist;

use actix_web::web;

pub use stylist::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(stylist::configure),
    );
}
