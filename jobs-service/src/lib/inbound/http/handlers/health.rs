use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

pub async fn health_check() -> ApiSuccess<HealthResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            status: "healthy".to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: String,
}
