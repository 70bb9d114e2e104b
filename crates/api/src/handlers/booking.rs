use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use slotcast_core::{
    models::{UserId, meeting::Meeting, time_slot::TimeSlot},
    workflow::BookingRequest,
};
use tracing::info;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    pub host_id: UserId,
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingWindowResponse {
    pub dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub host_id: UserId,
    #[serde(default)]
    pub guest_id: Option<UserId>,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub meeting: Meeting,
    pub notified: bool,
}

pub async fn booking_window(State(state): State<Arc<ApiState>>) -> Json<BookingWindowResponse> {
    Json(BookingWindowResponse {
        dates: state.window.dates(),
    })
}

pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Path(host_id): Path<UserId>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let mut workflow = state.workflow();
    let slots = workflow.load_slots(host_id, query.date).await?.to_vec();

    Ok(Json(SlotsResponse {
        host_id,
        date: query.date,
        slots,
    }))
}

/// Runs a whole booking attempt: load the day, pick the requested slot,
/// submit.
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), AppError> {
    let mut workflow = state.workflow();
    workflow.load_slots(payload.host_id, payload.date).await?;
    workflow.select_slot_at(payload.start_time)?;

    let outcome = workflow
        .submit_booking(BookingRequest {
            host_id: payload.host_id,
            guest_id: payload.guest_id,
            title: payload.title,
            description: payload.description,
        })
        .await?;

    info!(
        "Booking {} created (host notified: {})",
        outcome.meeting.id,
        outcome.notified()
    );
    let notified = outcome.notified();
    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            meeting: outcome.meeting,
            notified,
        }),
    ))
}
