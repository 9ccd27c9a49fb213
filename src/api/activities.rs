use std::sync::Arc;

use axum::{Json, extract::{Path, Query, State, rejection::QueryRejection}};
use serde::Deserialize;

use crate::{error::ApiError, models::activity::{ActivityListing, MessageResponse}, services::activity_store::ActivityStore};

#[derive(Deserialize)]
pub struct EmailQuery {
    email: String,
}

fn email_param(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    query
        .map(|Query(params)| params.email)
        .map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))
}

pub async fn list_activities(
    State(store): State<Arc<ActivityStore>>
) -> Json<ActivityListing> {
    Json(ActivityListing(store.list()))
}

pub async fn signup_for_activity(
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(store): State<Arc<ActivityStore>>
) -> Result<Json<MessageResponse>, ApiError> {
    let email = email_param(query)?;
    store.add_participant(&activity_name, &email)?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    }))
}

pub async fn remove_participant(
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(store): State<Arc<ActivityStore>>
) -> Result<Json<MessageResponse>, ApiError> {
    let email = email_param(query)?;
    store.remove_participant(&activity_name, &email)?;

    Ok(Json(MessageResponse {
        message: format!("Removed {} from {}", email, activity_name),
    }))
}
