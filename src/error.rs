//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::state::PersonId;
use crate::validation::ValidationErrors;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Person with the given id was not found
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),

    /// Request payload failed validation
    #[error("Validation failed")]
    Validation(ValidationErrors),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Validation failures render the field -> messages map as the body
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            AppError::PersonNotFound(_) => {
                problem_response(StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Internal(_) => {
                problem_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        }
    }
}

/// Build a problem-style error response carrying the status code in the body
pub fn problem_response(status: StatusCode, message: String) -> Response {
    let body = Json(json!({
        "error": message,
        "status": status.as_u16(),
    }));

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::PersonNotFound(5).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let errors = crate::validation::PersonPayload::default()
            .validate()
            .unwrap_err();
        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
