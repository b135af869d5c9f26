use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Acknowledgement body for commands without a payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
