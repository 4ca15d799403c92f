use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform envelope around every successful downstream payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub status: String,
    pub data: Value,
}

impl GatewayResponse {
    pub fn success(data: Value) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
