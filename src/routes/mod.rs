// Route exports
pub mod expenses;
pub mod friends;
pub mod groups;
pub mod health;

use crate::services::Gateway;
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::health_check)).service(
        web::scope("/mcp")
            .configure(expenses::configure)
            .configure(groups::configure)
            .configure(friends::configure),
    );
}
