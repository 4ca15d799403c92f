use crate::error::GatewayError;
use crate::models::{ExpenseFilter, ExpenseIntent, UserId};
use crate::routes::AppState;
use actix_web::{web, HttpResponse};

/// Configure expense and balance routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/create_expense", web::post().to(create_expense))
        .route("/list_expenses", web::get().to(list_expenses))
        .route("/get_expense/{expense_id}", web::get().to(get_expense))
        .route("/get_balance/{user_id}", web::get().to(get_balance));
}

/// Create an expense
///
/// POST /mcp/create_expense
///
/// Request body:
/// ```json
/// {
///   "user_id": 1,
///   "amount": 100,
///   "currency": "INR",
///   "description": "Snacks",
///   "participants": [1, 2, 3],
///   "split_type": "shares",
///   "owed_shares": [50, 30, 20]
/// }
/// ```
async fn create_expense(
    state: web::Data<AppState>,
    intent: web::Json<ExpenseIntent>,
) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.create_expense(&intent).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /mcp/list_expenses?group_id={id}&user_id={id}
async fn list_expenses(
    state: web::Data<AppState>,
    filter: web::Query<ExpenseFilter>,
) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.list_expenses(&filter).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn get_expense(
    state: web::Data<AppState>,
    expense_id: web::Path<i64>,
) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.get_expense(expense_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /mcp/get_balance/{user_id}
///
/// Passes through the current authenticated user; no balance is computed.
async fn get_balance(
    state: web::Data<AppState>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, GatewayError> {
    let response = state.gateway.get_balance(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
