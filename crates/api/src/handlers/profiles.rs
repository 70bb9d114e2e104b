use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use slotcast_core::{errors::BookingError, models::UserId};
use slotcast_hub::{HubClient, models::Profile};

use crate::{ApiState, middleware::error_handling::AppError};

const TRENDING_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct ProfileSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

fn hub(state: &ApiState) -> Result<&HubClient, AppError> {
    state
        .hub
        .as_ref()
        .ok_or_else(|| AppError(BookingError::NotFound("Social hub is not configured".into())))
}

pub async fn get_profile(
    State(state): State<Arc<ApiState>>,
    Path(fid): Path<UserId>,
) -> Result<Json<Profile>, AppError> {
    let profile = hub(&state)?.user_by_fid(fid).await?;
    Ok(Json(profile))
}

/// Searches by username, or lists trending profiles when `q` is empty.
pub async fn search_profiles(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ProfileSearchQuery>,
) -> Result<Json<Vec<Profile>>, AppError> {
    let client = hub(&state)?;
    let profiles = match query.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => client.search_users(q).await?,
        _ => client.trending_users(TRENDING_LIMIT).await?,
    };
    Ok(Json(profiles))
}
