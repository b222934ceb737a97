//! GET /api/health

use axum::Json;
use chrono::Utc;

use fizzbit_core::gateway::persona::{HEALTH_MESSAGE, HEALTH_STATUS};
use fizzbit_types::api::HealthStatus;

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HEALTH_STATUS.to_string(),
        message: HEALTH_MESSAGE.to_string(),
        timestamp: Utc::now(),
    })
}
