use crate::models::DbNotification;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_notification(
    pool: &Pool<Postgres>,
    recipient_id: i64,
    sender_id: i64,
    kind: &str,
    meeting_id: Option<Uuid>,
    message: &str,
) -> Result<DbNotification> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let notification = sqlx::query_as::<_, DbNotification>(
        r#"
        INSERT INTO notifications (id, recipient_id, sender_id, kind, meeting_id, message, read, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, FALSE, $7)
        RETURNING id, recipient_id, sender_id, kind, meeting_id, message, read, created_at
        "#,
    )
    .bind(id)
    .bind(recipient_id)
    .bind(sender_id)
    .bind(kind)
    .bind(meeting_id)
    .bind(message)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Notification {} created for {}", id, recipient_id);
    Ok(notification)
}

pub async fn get_notifications_for_user(
    pool: &Pool<Postgres>,
    recipient_id: i64,
) -> Result<Vec<DbNotification>> {
    let notifications = sqlx::query_as::<_, DbNotification>(
        r#"
        SELECT id, recipient_id, sender_id, kind, meeting_id, message, read, created_at
        FROM notifications
        WHERE recipient_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(recipient_id)
    .fetch_all(pool)
    .await?;

    Ok(notifications)
}

/// Returns `false` when no notification has this id.
pub async fn mark_notification_read(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE notifications
        SET read = TRUE
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
