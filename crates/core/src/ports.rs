//! Collaborator contracts consumed by the booking workflow.
//!
//! Implementations live outside this crate (in-memory and PostgreSQL stores,
//! the hub-backed notification sink); the workflow only sees these traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::BookingResult;
use crate::models::{
    UserId,
    meeting::{Meeting, NewMeeting},
    notification::{NewNotification, Notification},
    time_slot::TimeSlot,
};

/// Produces candidate slots for a host on a calendar day.
#[async_trait]
pub trait SlotProvider: Send + Sync {
    async fn available_slots(&self, host_id: UserId, date: NaiveDate)
    -> BookingResult<Vec<TimeSlot>>;
}

#[async_trait]
pub trait MeetingStore: Send + Sync {
    /// Persists a new meeting. The returned meeting carries a globally
    /// unique id and `MeetingStatus::Scheduled`.
    async fn create_meeting(&self, meeting: NewMeeting) -> BookingResult<Meeting>;

    /// Meetings where `user_id` is either host or guest, earliest first.
    async fn meetings_for(&self, user_id: UserId) -> BookingResult<Vec<Meeting>>;
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, notification: NewNotification) -> BookingResult<Notification>;

    async fn mark_read(&self, notification_id: Uuid) -> BookingResult<()>;

    /// Notifications addressed to `user_id`, newest first.
    async fn notifications_for(&self, user_id: UserId) -> BookingResult<Vec<Notification>>;
}
