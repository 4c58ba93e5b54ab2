use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /api/audit`. A missing `url` is treated as empty and fails
/// validation like any other malformed URL.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AuditRequest {
    #[serde(default)]
    pub url: String,
}

/// Query string of `GET /api/audit`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuditQuery {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
