// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Duplicate signup (HTTP 400).
    #[error("Already signed up: {0}")]
    AlreadySignedUp(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Unexpected failure. Logged; the response body carries no detail.
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const ACTIVITY_NOT_FOUND: &'static str = "Activity not found";
    pub const PARTICIPANT_NOT_FOUND: &'static str = "Participant not found in this activity";
    pub const ALREADY_SIGNED_UP: &'static str = "Student already signed up";

    pub fn activity_not_found() -> Self {
        AppError::NotFound(Self::ACTIVITY_NOT_FOUND.to_string())
    }

    pub fn participant_not_found() -> Self {
        AppError::NotFound(Self::PARTICIPANT_NOT_FOUND.to_string())
    }

    pub fn already_signed_up() -> Self {
        AppError::AlreadySignedUp(Self::ALREADY_SIGNED_UP.to_string())
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadySignedUp(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, detail) = match &self {
            AppError::NotFound(msg) => ("not_found", Some(msg.clone())),
            AppError::AlreadySignedUp(msg) => ("already_signed_up", Some(msg.clone())),
            AppError::BadRequest(msg) => ("bad_request", Some(msg.clone())),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                ("internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            detail,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
