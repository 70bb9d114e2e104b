//! PostgreSQL-backed implementations of the core collaborator traits.

use async_trait::async_trait;
use slotcast_core::{
    errors::{BookingError, BookingResult},
    models::{
        UserId,
        meeting::{Meeting, NewMeeting},
        notification::{NewNotification, Notification},
    },
    ports::{MeetingStore, NotificationSink},
};
use uuid::Uuid;

use crate::{
    DbPool,
    models::to_db_id,
    repositories::{meeting, notification},
};

#[derive(Debug, Clone)]
pub struct PgMeetingStore {
    pool: DbPool,
}

impl PgMeetingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetingStore for PgMeetingStore {
    async fn create_meeting(&self, new: NewMeeting) -> BookingResult<Meeting> {
        new.validate()?;
        let host_id = to_db_id(new.host_id).map_err(|e| BookingError::Validation(e.to_string()))?;
        let guest_id =
            to_db_id(new.guest_id).map_err(|e| BookingError::Validation(e.to_string()))?;

        let row = meeting::create_meeting(
            &self.pool,
            host_id,
            guest_id,
            new.start_time,
            new.end_time,
            &new.title,
            new.description.as_deref(),
        )
        .await?;

        Ok(Meeting::try_from(row)?)
    }

    async fn meetings_for(&self, user_id: UserId) -> BookingResult<Vec<Meeting>> {
        let Ok(user_id) = to_db_id(user_id) else {
            return Ok(Vec::new());
        };

        let rows = meeting::get_meetings_for_user(&self.pool, user_id).await?;
        let meetings = rows
            .into_iter()
            .map(Meeting::try_from)
            .collect::<eyre::Result<Vec<_>>>()?;
        Ok(meetings)
    }
}

#[derive(Debug, Clone)]
pub struct PgNotificationSink {
    pool: DbPool,
}

impl PgNotificationSink {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationSink for PgNotificationSink {
    async fn notify(&self, new: NewNotification) -> BookingResult<Notification> {
        let recipient_id =
            to_db_id(new.recipient_id).map_err(|e| BookingError::Validation(e.to_string()))?;
        let sender_id =
            to_db_id(new.sender_id).map_err(|e| BookingError::Validation(e.to_string()))?;

        let row = notification::create_notification(
            &self.pool,
            recipient_id,
            sender_id,
            new.kind.as_str(),
            new.meeting_id,
            &new.message,
        )
        .await?;

        Ok(Notification::try_from(row)?)
    }

    async fn mark_read(&self, notification_id: Uuid) -> BookingResult<()> {
        if notification::mark_notification_read(&self.pool, notification_id).await? {
            Ok(())
        } else {
            Err(BookingError::NotFound(format!(
                "Notification with ID {} not found",
                notification_id
            )))
        }
    }

    async fn notifications_for(&self, user_id: UserId) -> BookingResult<Vec<Notification>> {
        let Ok(user_id) = to_db_id(user_id) else {
            return Ok(Vec::new());
        };

        let rows = notification::get_notifications_for_user(&self.pool, user_id).await?;
        let notifications = rows
            .into_iter()
            .map(Notification::try_from)
            .collect::<eyre::Result<Vec<_>>>()?;
        Ok(notifications)
    }
}
