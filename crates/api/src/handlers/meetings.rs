use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use slotcast_core::models::{UserId, meeting::Meeting};

use crate::{ApiState, middleware::error_handling::AppError};

pub async fn list_meetings(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<Meeting>>, AppError> {
    let meetings = state.meetings.meetings_for(user_id).await?;
    Ok(Json(meetings))
}
