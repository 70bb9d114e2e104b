//! In-process stores used when no database is configured, and in tests.
//!
//! Nothing here survives a restart.

use async_trait::async_trait;
use chrono::Utc;
use slotcast_core::{
    errors::{BookingError, BookingResult},
    models::{
        UserId,
        meeting::{Meeting, MeetingStatus, NewMeeting},
        notification::{NewNotification, Notification},
    },
    ports::{MeetingStore, NotificationSink},
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryMeetingStore {
    meetings: RwLock<Vec<Meeting>>,
}

impl InMemoryMeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.meetings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.meetings.read().await.is_empty()
    }

    pub async fn get(&self, id: Uuid) -> Option<Meeting> {
        self.meetings
            .read()
            .await
            .iter()
            .find(|meeting| meeting.id == id)
            .cloned()
    }
}

#[async_trait]
impl MeetingStore for InMemoryMeetingStore {
    async fn create_meeting(&self, new: NewMeeting) -> BookingResult<Meeting> {
        new.validate()?;

        let meeting = Meeting {
            id: Uuid::new_v4(),
            host_id: new.host_id,
            guest_id: new.guest_id,
            start_time: new.start_time,
            end_time: new.end_time,
            title: new.title,
            description: new.description,
            status: MeetingStatus::Scheduled,
            created_at: Utc::now(),
        };

        tracing::debug!("Storing meeting {} in memory", meeting.id);
        self.meetings.write().await.push(meeting.clone());
        Ok(meeting)
    }

    async fn meetings_for(&self, user_id: UserId) -> BookingResult<Vec<Meeting>> {
        let mut meetings: Vec<Meeting> = self
            .meetings
            .read()
            .await
            .iter()
            .filter(|meeting| meeting.involves(user_id))
            .cloned()
            .collect();
        meetings.sort_by_key(|meeting| meeting.start_time);
        Ok(meetings)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryNotificationSink {
    notifications: RwLock<Vec<Notification>>,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.notifications.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notifications.read().await.is_empty()
    }
}

#[async_trait]
impl NotificationSink for InMemoryNotificationSink {
    async fn notify(&self, new: NewNotification) -> BookingResult<Notification> {
        let notification = Notification {
            id: Uuid::new_v4(),
            recipient_id: new.recipient_id,
            sender_id: new.sender_id,
            kind: new.kind,
            meeting_id: new.meeting_id,
            message: new.message,
            read: false,
            created_at: Utc::now(),
        };

        self.notifications.write().await.push(notification.clone());
        Ok(notification)
    }

    async fn mark_read(&self, notification_id: Uuid) -> BookingResult<()> {
        let mut notifications = self.notifications.write().await;
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| {
                BookingError::NotFound(format!(
                    "Notification with ID {} not found",
                    notification_id
                ))
            })?;
        notification.read = true;
        Ok(())
    }

    async fn notifications_for(&self, user_id: UserId) -> BookingResult<Vec<Notification>> {
        // Newest first; insertion order breaks created_at ties.
        Ok(self
            .notifications
            .read()
            .await
            .iter()
            .rev()
            .filter(|n| n.recipient_id == user_id)
            .cloned()
            .collect())
    }
}
