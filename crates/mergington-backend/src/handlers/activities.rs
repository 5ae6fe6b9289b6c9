use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use mergington::data::{ActivityDirectory, EmailQuery, MessageResponse};
use mergington::log;

use super::ApiError;
use crate::services::ActivityService;

/// Handler to list every activity
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<ActivityDirectory>, ApiError> {
    let directory = state.activities.list().await?;
    Ok(Json(directory))
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    if let Err(err) = state.activities.signup(&activity, &email).await {
        log::warn!("Signup rejected: {err}");
        return Err(err.into());
    }

    log::info!("Signed up {email} for {activity}");
    Ok(Json(MessageResponse::signed_up(&email, &activity)))
}

/// Handler to remove a student from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    if let Err(err) = state.activities.unregister(&activity, &email).await {
        log::warn!("Unregister rejected: {err}");
        return Err(err.into());
    }

    log::info!("Unregistered {email} from {activity}");
    Ok(Json(MessageResponse::unregistered(&email, &activity)))
}
