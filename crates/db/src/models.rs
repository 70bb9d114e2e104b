use chrono::{DateTime, Utc};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use slotcast_core::models::{
    UserId,
    meeting::{Meeting, MeetingStatus},
    notification::{Notification, NotificationKind},
};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMeeting {
    pub id: Uuid,
    pub host_id: i64,
    pub guest_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbNotification {
    pub id: Uuid,
    pub recipient_id: i64,
    pub sender_id: i64,
    pub kind: String,
    pub meeting_id: Option<Uuid>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// FIDs are unsigned but Postgres only has signed BIGINT.
pub fn to_db_id(id: UserId) -> Result<i64> {
    i64::try_from(id).wrap_err_with(|| format!("User id {} does not fit in BIGINT", id))
}

pub fn from_db_id(id: i64) -> Result<UserId> {
    UserId::try_from(id).wrap_err_with(|| format!("Stored user id {} is negative", id))
}

impl TryFrom<DbMeeting> for Meeting {
    type Error = eyre::Report;

    fn try_from(row: DbMeeting) -> Result<Self> {
        let status: MeetingStatus = row.status.parse()?;
        Ok(Meeting {
            id: row.id,
            host_id: from_db_id(row.host_id)?,
            guest_id: from_db_id(row.guest_id)?,
            start_time: row.start_time,
            end_time: row.end_time,
            title: row.title,
            description: row.description,
            status,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<DbNotification> for Notification {
    type Error = eyre::Report;

    fn try_from(row: DbNotification) -> Result<Self> {
        let kind: NotificationKind = row.kind.parse()?;
        Ok(Notification {
            id: row.id,
            recipient_id: from_db_id(row.recipient_id)?,
            sender_id: from_db_id(row.sender_id)?,
            kind,
            meeting_id: row.meeting_id,
            message: row.message,
            read: row.read,
            created_at: row.created_at,
        })
    }
}
