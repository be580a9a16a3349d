// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing and signup routes.

use crate::error::{AppError, Result};
use crate::models::ActivityDirectory;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .route(
            "/activities/{activity_name}/participants",
            delete(unregister),
        )
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

/// Confirmation returned by roster changes.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Unwrap the `email` query parameter, reporting a missing one as a JSON 400.
fn email_param(query: std::result::Result<Query<EmailQuery>, QueryRejection>) -> Result<String> {
    query
        .map(|Query(q)| q.email)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// List every activity with its roster.
async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityDirectory> {
    Json(state.activities.list().await)
}

/// Sign a student up for an activity.
async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>> {
    let email = email_param(query)?;
    state.activities.signup(&activity_name, &email).await?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {email} for {activity_name}"),
    }))
}

/// Remove a student from an activity.
async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>> {
    let email = email_param(query)?;
    state.activities.unregister(&activity_name, &email).await?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {email} from {activity_name}"),
    }))
}
