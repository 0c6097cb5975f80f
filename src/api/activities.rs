//! Activity API handlers
//!
//! Contains HTTP request handlers for listing activities and for signing
//! participants up and unregistering them by email.

use crate::error::AppError;
use crate::state::{Activity, ActivityName, AppState};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation message
    pub message: String,
}

/// Query parameters shared by the signup and unregister endpoints
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Participant email; treated as an opaque string, no format validation
    pub email: String,
}

/// GET /activities - Full roster as a mapping of name to activity record
pub async fn list_activities(
    State(state): State<Arc<RwLock<AppState>>>,
) -> Json<BTreeMap<ActivityName, Activity>> {
    let state = state.read().await;
    Json(state.activities.clone())
}

/// POST /activities/:activity_name/signup - Add a participant to an activity
pub async fn signup(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(activity_name): Path<ActivityName>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut state = state.write().await;
    let activity = state
        .activities
        .get_mut(&activity_name)
        .ok_or_else(|| AppError::ActivityNotFound(activity_name.clone()))?;

    if !activity.signup(&query.email) {
        return Err(AppError::AlreadyRegistered {
            activity: activity_name,
            email: query.email,
        });
    }

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

/// POST /activities/:activity_name/unregister - Remove a participant from an activity
pub async fn unregister(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(activity_name): Path<ActivityName>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut state = state.write().await;
    let activity = state
        .activities
        .get_mut(&activity_name)
        .ok_or_else(|| AppError::ActivityNotFound(activity_name.clone()))?;

    if !activity.unregister(&query.email) {
        return Err(AppError::NotRegistered {
            activity: activity_name,
            email: query.email,
        });
    }

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
