//! mockall doubles of the collaborator traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::errors::BookingResult;
use crate::models::{
    UserId,
    meeting::{Meeting, NewMeeting},
    notification::{NewNotification, Notification},
    time_slot::TimeSlot,
};
use crate::ports::{MeetingStore, NotificationSink, SlotProvider};

mock! {
    pub SlotSource {}

    #[async_trait]
    impl SlotProvider for SlotSource {
        async fn available_slots(
            &self,
            host_id: UserId,
            date: NaiveDate,
        ) -> BookingResult<Vec<TimeSlot>>;
    }
}

mock! {
    pub MeetingRepo {}

    #[async_trait]
    impl MeetingStore for MeetingRepo {
        async fn create_meeting(&self, meeting: NewMeeting) -> BookingResult<Meeting>;

        async fn meetings_for(&self, user_id: UserId) -> BookingResult<Vec<Meeting>>;
    }
}

mock! {
    pub Notifier {}

    #[async_trait]
    impl NotificationSink for Notifier {
        async fn notify(&self, notification: NewNotification) -> BookingResult<Notification>;

        async fn mark_read(&self, notification_id: Uuid) -> BookingResult<()>;

        async fn notifications_for(&self, user_id: UserId) -> BookingResult<Vec<Notification>>;
    }
}
