use std::sync::Arc;

use chrono_tz::Tz;
use eyre::Result;
use slotcast_core::{
    calendar::{Availability, HourlySlotProvider},
    ports::{MeetingStore, NotificationSink, SlotProvider},
    window::BookingWindow,
    workflow::BookingWorkflow,
};
use slotcast_db::{
    create_pool,
    memory::{InMemoryMeetingStore, InMemoryNotificationSink},
    schema::initialize_database,
    store::{PgMeetingStore, PgNotificationSink},
};
use slotcast_hub::{CastingNotificationSink, HubClient};
use tracing::{info, warn};

use crate::config::ApiConfig;

/// Shared application state that is accessible to all request handlers
///
/// Holds the collaborators every booking workflow is built from, plus the
/// optional hub client used for profile lookups.
pub struct ApiState {
    pub slots: Arc<dyn SlotProvider>,
    pub meetings: Arc<dyn MeetingStore>,
    pub notifications: Arc<dyn NotificationSink>,
    pub hub: Option<HubClient>,
    pub window: BookingWindow,
    /// Zone of the hosts' working hours, used when messaging hosts.
    pub timezone: Tz,
}

impl ApiState {
    /// Wires collaborators according to `config`.
    ///
    /// With `DATABASE_URL` set, meetings and notifications go to PostgreSQL
    /// (the schema is created if missing); otherwise they live in memory.
    /// With a hub key, every stored notification is also cast.
    pub async fn from_config(config: &ApiConfig) -> Result<Arc<Self>> {
        let window = BookingWindow::new(config.booking_window_days)?;
        let availability =
            Availability::from_probability(config.slot_availability, config.slot_seeded);
        let provider = HourlySlotProvider::new(availability).with_timezone(config.slot_timezone);
        let timezone = provider.timezone();
        let slots: Arc<dyn SlotProvider> = Arc::new(provider);

        let (meetings, notifications): (Arc<dyn MeetingStore>, Arc<dyn NotificationSink>) =
            match &config.database_url {
                Some(url) => {
                    let pool = create_pool(url).await?;
                    initialize_database(&pool).await?;
                    info!("Using PostgreSQL for meetings and notifications");
                    (
                        Arc::new(PgMeetingStore::new(pool.clone())),
                        Arc::new(PgNotificationSink::new(pool)),
                    )
                }
                None => {
                    warn!("DATABASE_URL not set, meetings and notifications are kept in memory");
                    (
                        Arc::new(InMemoryMeetingStore::new()),
                        Arc::new(InMemoryNotificationSink::new()),
                    )
                }
            };

        let hub = config.hub_config()?.map(HubClient::new);
        let notifications: Arc<dyn NotificationSink> = match &hub {
            Some(client) => Arc::new(CastingNotificationSink::new(notifications, client.clone())),
            None => notifications,
        };

        Ok(Arc::new(Self {
            slots,
            meetings,
            notifications,
            hub,
            window,
            timezone,
        }))
    }

    /// A fresh workflow for one booking attempt.
    pub fn workflow(&self) -> BookingWorkflow {
        BookingWorkflow::new(
            self.slots.clone(),
            self.meetings.clone(),
            self.notifications.clone(),
        )
        .with_window(self.window)
        .with_timezone(self.timezone)
    }
}
