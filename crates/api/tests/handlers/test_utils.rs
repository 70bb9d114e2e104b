use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveDate;
use chrono_tz::Tz;
use slotcast_api::{ApiState, build_router};
use slotcast_core::{
    calendar::{Availability, HourlySlotProvider},
    window::BookingWindow,
};
use slotcast_db::memory::{InMemoryMeetingStore, InMemoryNotificationSink};
use slotcast_hub::{HubClient, HubConfig};

pub const HOST: u64 = 7;
pub const GUEST: u64 = 99;

pub fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

pub struct TestContext {
    pub meetings: Arc<InMemoryMeetingStore>,
    pub notifications: Arc<InMemoryNotificationSink>,
    pub hub: Option<HubClient>,
    pub timezone: Tz,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            meetings: Arc::new(InMemoryMeetingStore::new()),
            notifications: Arc::new(InMemoryNotificationSink::new()),
            hub: None,
            timezone: Tz::UTC,
        }
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_hub(mut self, base_url: String) -> Self {
        self.hub = Some(HubClient::new(HubConfig::new(base_url, None).unwrap()));
        self
    }

    // Every hour open, window pinned to June 2025
    pub fn build_state(&self) -> Arc<ApiState> {
        Arc::new(ApiState {
            slots: Arc::new(
                HourlySlotProvider::new(Availability::AllOpen).with_timezone(self.timezone),
            ),
            meetings: self.meetings.clone(),
            notifications: self.notifications.clone(),
            hub: self.hub.clone(),
            window: BookingWindow::starting_on(first_day(), 14).unwrap(),
            timezone: self.timezone,
        })
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(build_router(self.build_state())).unwrap()
    }
}
