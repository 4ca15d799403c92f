use crate::error::GatewayError;
use crate::models::{FriendIntent, UserId};
use crate::routes::AppState;
use actix_web::{web, HttpResponse};

/// Configure friend routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/list_friends", web::get().to(list_friends))
        .route("/add_friend", web::post().to(add_friend))
        .route("/delete_friend/{friend_id}", web::post().to(delete_friend));
}

async fn list_friends(state: web::Data<AppState>) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.list_friends().await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /mcp/add_friend
///
/// Request body:
/// ```json
/// { "user_email": "ada@example.com", "first_name": "Ada", "last_name": "Lovelace" }
/// ```
async fn add_friend(
    state: web::Data<AppState>,
    intent: web::Json<FriendIntent>,
) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.add_friend(&intent).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn delete_friend(
    state: web::Data<AppState>,
    friend_id: web::Path<UserId>,
) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.delete_friend(friend_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
