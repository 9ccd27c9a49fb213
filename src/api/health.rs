use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::services::activity_store::ActivityStore;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub activities: usize,
}

pub async fn health_check(State(store): State<Arc<ActivityStore>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        activities: store.len(),
    })
}
