use crate::error::GatewayError;
use crate::models::GroupIntent;
use crate::routes::AppState;
use actix_web::{web, HttpResponse};

/// Configure group routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/create_group", web::post().to(create_group))
        .route("/delete_group/{group_id}", web::post().to(delete_group))
        .route("/list_groups", web::get().to(list_groups))
        .route("/get_group/{group_id}", web::get().to(get_group));
}

/// POST /mcp/create_group
///
/// Request body:
/// ```json
/// { "name": "Trip", "group_type": "trip", "simplify_by_default": false, "users": [1, 2] }
/// ```
async fn create_group(
    state: web::Data<AppState>,
    intent: web::Json<GroupIntent>,
) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.create_group(&intent).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn delete_group(
    state: web::Data<AppState>,
    group_id: web::Path<i64>,
) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.delete_group(group_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn list_groups(state: web::Data<AppState>) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.list_groups().await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn get_group(
    state: web::Data<AppState>,
    group_id: web::Path<i64>,
) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.get_group(group_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
