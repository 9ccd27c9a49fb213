/*
error.rs
*/

use axum::{
    Json,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Participant not found in this activity")]
    ParticipantNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("{0}")]
    InvalidQuery(String),
    #[error("{0}")]
    StartupError(String),
}

/*
Handlers return ApiError directly; the body carries the message
under "detail" so the signup page can show it as-is.
*/
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ApiError::ActivityNotFound => StatusCode::NOT_FOUND,
            ApiError::ParticipantNotFound => StatusCode::NOT_FOUND,
            ApiError::AlreadySignedUp => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::StartupError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(ApiError::ActivityNotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::ParticipantNotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::AlreadySignedUp.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidQuery("missing field `email`".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::StartupError("boom".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
