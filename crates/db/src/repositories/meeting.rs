use crate::models::DbMeeting;
use chrono::{DateTime, Utc};
use eyre::Result;
use slotcast_core::models::meeting::MeetingStatus;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_meeting(
    pool: &Pool<Postgres>,
    host_id: i64,
    guest_id: i64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    title: &str,
    description: Option<&str>,
) -> Result<DbMeeting> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating meeting: id={}, host={}, guest={}, start={}",
        id,
        host_id,
        guest_id,
        start_time
    );

    let meeting = sqlx::query_as::<_, DbMeeting>(
        r#"
        INSERT INTO meetings (id, host_id, guest_id, start_time, end_time, title, description, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, host_id, guest_id, start_time, end_time, title, description, status, created_at
        "#,
    )
    .bind(id)
    .bind(host_id)
    .bind(guest_id)
    .bind(start_time)
    .bind(end_time)
    .bind(title)
    .bind(description)
    .bind(MeetingStatus::Scheduled.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(meeting)
}

pub async fn get_meeting_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbMeeting>> {
    tracing::debug!("Getting meeting by id: {}", id);

    let meeting = sqlx::query_as::<_, DbMeeting>(
        r#"
        SELECT id, host_id, guest_id, start_time, end_time, title, description, status, created_at
        FROM meetings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(meeting)
}

pub async fn get_meetings_for_user(pool: &Pool<Postgres>, user_id: i64) -> Result<Vec<DbMeeting>> {
    let meetings = sqlx::query_as::<_, DbMeeting>(
        r#"
        SELECT id, host_id, guest_id, start_time, end_time, title, description, status, created_at
        FROM meetings
        WHERE host_id = $1 OR guest_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    tracing::debug!("Found {} meetings for user {}", meetings.len(), user_id);
    Ok(meetings)
}
