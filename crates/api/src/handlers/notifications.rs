use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use slotcast_core::models::{
    UserId,
    notification::{Notification, unread_count},
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

pub async fn list_notifications(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<NotificationsResponse>, AppError> {
    let notifications = state.notifications.notifications_for(user_id).await?;
    let unread_count = unread_count(&notifications);

    Ok(Json(NotificationsResponse {
        notifications,
        unread_count,
    }))
}

pub async fn mark_read(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.notifications.mark_read(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
