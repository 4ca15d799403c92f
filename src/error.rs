use crate::core::AllocationError;
use crate::models::ErrorResponse;
use crate::services::SplitwiseError;
use actix_web::{error, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Every failure the gateway surfaces to its caller
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Expense could not be split; nothing was sent downstream
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    /// Intent failed field validation
    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Body, query or path could not be decoded
    #[error("{0}")]
    Payload(String),

    #[error(transparent)]
    Splitwise(#[from] SplitwiseError),
}

impl GatewayError {
    /// Detail message shown to the caller
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

impl error::ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Allocation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Validation(_) | GatewayError::Payload(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            GatewayError::Splitwise(SplitwiseError::ApiError { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            GatewayError::Splitwise(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.detail(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    GatewayError::Payload(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    GatewayError::Payload(format!("Invalid query: {}", err)).into()
}

/// Handle path segment errors, e.g. a non-numeric id
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    GatewayError::Payload(format!("Invalid path: {}", err)).into()
}
