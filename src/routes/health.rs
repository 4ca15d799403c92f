use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder};

/// Static liveness indicator; does not touch the downstream API
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "Splitwise MCP is running".to_string(),
    })
}
