use std::sync::Arc;

use async_trait::async_trait;
use slotcast_core::{
    errors::BookingResult,
    models::{
        UserId,
        notification::{NewNotification, Notification},
    },
    ports::NotificationSink,
};
use tracing::warn;
use uuid::Uuid;

use crate::client::HubClient;

/// Stores notifications through `inner` and also publishes each one as a
/// cast. The cast is best-effort: a hub failure is logged and the stored
/// notification is still returned.
pub struct CastingNotificationSink {
    inner: Arc<dyn NotificationSink>,
    hub: HubClient,
}

impl CastingNotificationSink {
    pub fn new(inner: Arc<dyn NotificationSink>, hub: HubClient) -> Self {
        Self { inner, hub }
    }
}

#[async_trait]
impl NotificationSink for CastingNotificationSink {
    async fn notify(&self, new: NewNotification) -> BookingResult<Notification> {
        let notification = self.inner.notify(new).await?;

        if let Err(err) = self.hub.send_cast(&notification.message, None).await {
            warn!(
                "Notification {} stored but cast to hub failed: {}",
                notification.id, err
            );
        }

        Ok(notification)
    }

    async fn mark_read(&self, notification_id: Uuid) -> BookingResult<()> {
        self.inner.mark_read(notification_id).await
    }

    async fn notifications_for(&self, user_id: UserId) -> BookingResult<Vec<Notification>> {
        self.inner.notifications_for(user_id).await
    }
}
