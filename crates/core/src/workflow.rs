//! # Booking Workflow
//!
//! A single booking attempt between a host and a guest, modelled as an
//! explicit state machine:
//!
//! ```text
//! Idle -> SlotsLoading -> SlotsReady -> Submitting -> Succeeded
//!              |                             |
//!              +----------> Failed <---------+
//! ```
//!
//! The two suspension points are the slot provider call in
//! [`BookingWorkflow::load_slots`] and the meeting store call in
//! [`BookingWorkflow::submit_booking`]. Every operation takes `&mut self`,
//! so a second call cannot start while one is still in flight on the same
//! instance.
//!
//! Creating the meeting is the only step that can fail a booking. The host
//! notification is sent afterwards and its failure is logged, not returned.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use eyre::eyre;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::errors::{BookingError, BookingResult};
use crate::models::{
    UserId,
    meeting::{Meeting, NewMeeting},
    notification::{NewNotification, Notification, NotificationKind},
    time_slot::TimeSlot,
};
use crate::ports::{MeetingStore, NotificationSink, SlotProvider};
use crate::window::BookingWindow;

/// How long a finished booking stays on screen before the workflow resets.
pub const AUTO_DISMISS_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    Idle,
    SlotsLoading,
    SlotsReady,
    Submitting,
    Succeeded,
    Failed,
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowState::Idle => "idle",
            WorkflowState::SlotsLoading => "loading slots",
            WorkflowState::SlotsReady => "slots ready",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Succeeded => "succeeded",
            WorkflowState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What the guest asks for once a slot is selected.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub host_id: UserId,
    /// `None` when the guest has not identified themselves yet.
    pub guest_id: Option<UserId>,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BookingOutcome {
    pub meeting: Meeting,
    /// `None` if the host notification could not be delivered.
    pub notification: Option<Notification>,
}

impl BookingOutcome {
    pub fn notified(&self) -> bool {
        self.notification.is_some()
    }
}

pub struct BookingWorkflow {
    slot_provider: Arc<dyn SlotProvider>,
    meetings: Arc<dyn MeetingStore>,
    notifications: Arc<dyn NotificationSink>,
    window: BookingWindow,
    timezone: Tz,
    state: WorkflowState,
    host_id: Option<UserId>,
    date: Option<NaiveDate>,
    slots: Vec<TimeSlot>,
    selected: Option<TimeSlot>,
    last_error: Option<String>,
}

impl fmt::Debug for BookingWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingWorkflow")
            .field("state", &self.state)
            .field("host_id", &self.host_id)
            .field("date", &self.date)
            .field("slots", &self.slots.len())
            .field("selected", &self.selected)
            .finish()
    }
}

impl BookingWorkflow {
    pub fn new(
        slot_provider: Arc<dyn SlotProvider>,
        meetings: Arc<dyn MeetingStore>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            slot_provider,
            meetings,
            notifications,
            window: BookingWindow::default(),
            timezone: Tz::UTC,
            state: WorkflowState::Idle,
            host_id: None,
            date: None,
            slots: Vec::new(),
            selected: None,
            last_error: None,
        }
    }

    pub fn with_window(mut self, window: BookingWindow) -> Self {
        self.window = window;
        self
    }

    /// Zone the host's working hours are expressed in; notification
    /// messages show slot times in it.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn window(&self) -> &BookingWindow {
        &self.window
    }

    pub fn host_id(&self) -> Option<UserId> {
        self.host_id
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Every slot from the last successful load, taken or not.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn available_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|slot| slot.available)
    }

    pub fn selected_slot(&self) -> Option<&TimeSlot> {
        self.selected.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fetch a fresh set of slots for `host_id` on `date`.
    ///
    /// Replaces any previously loaded slots and clears the selection. On a
    /// collaborator failure the workflow moves to `Failed`; calling this
    /// again is the retry path.
    pub async fn load_slots(
        &mut self,
        host_id: UserId,
        date: NaiveDate,
    ) -> BookingResult<&[TimeSlot]> {
        if matches!(
            self.state,
            WorkflowState::Submitting | WorkflowState::Succeeded
        ) {
            return Err(BookingError::Validation(format!(
                "Cannot load slots while the workflow is {}",
                self.state
            )));
        }
        self.window.check(date)?;

        self.state = WorkflowState::SlotsLoading;
        self.host_id = Some(host_id);
        self.date = Some(date);
        self.slots.clear();
        self.selected = None;
        self.last_error = None;

        let slots = match self.slot_provider.available_slots(host_id, date).await {
            Ok(slots) => slots,
            Err(err) => return Err(self.fail(err)),
        };

        if let Some(bad) = slots.iter().find(|slot| !slot.is_well_formed()) {
            let err = BookingError::Fetch(eyre!(
                "Slot provider returned a slot ending before it starts ({} - {})",
                bad.start_time,
                bad.end_time
            ));
            return Err(self.fail(err));
        }

        info!(
            "Loaded {} slots for host {} on {}",
            slots.len(),
            host_id,
            date
        );
        self.slots = slots;
        self.state = WorkflowState::SlotsReady;
        Ok(&self.slots)
    }

    /// Mark `slot` as the one the guest wants. No side effects.
    pub fn select_slot(&mut self, slot: &TimeSlot) -> BookingResult<()> {
        if self.state != WorkflowState::SlotsReady {
            return Err(BookingError::Validation(format!(
                "Cannot select a slot while the workflow is {}",
                self.state
            )));
        }
        if !slot.available {
            return Err(BookingError::Validation(format!(
                "Slot starting at {} is not available",
                slot.start_time
            )));
        }
        if !self.slots.contains(slot) {
            return Err(BookingError::Validation(format!(
                "Slot starting at {} was not offered for this date",
                slot.start_time
            )));
        }

        self.selected = Some(slot.clone());
        Ok(())
    }

    /// Select the loaded slot that starts at `start_time`.
    pub fn select_slot_at(&mut self, start_time: DateTime<Utc>) -> BookingResult<TimeSlot> {
        if self.state != WorkflowState::SlotsReady {
            return Err(BookingError::Validation(format!(
                "Cannot select a slot while the workflow is {}",
                self.state
            )));
        }
        let slot = self
            .slots
            .iter()
            .find(|slot| slot.start_time == start_time)
            .cloned()
            .ok_or_else(|| {
                BookingError::NotFound(format!("No slot starts at {}", start_time))
            })?;
        self.select_slot(&slot)?;
        Ok(slot)
    }

    /// Book the selected slot and notify the host.
    ///
    /// All preconditions are checked before anything is written. The host
    /// notification is best-effort: if it fails the booking still succeeds
    /// and `BookingOutcome::notification` is `None`.
    pub async fn submit_booking(&mut self, request: BookingRequest) -> BookingResult<BookingOutcome> {
        if self.state != WorkflowState::SlotsReady {
            return Err(BookingError::Validation(format!(
                "Cannot submit a booking while the workflow is {}",
                self.state
            )));
        }
        let slot = self
            .selected
            .clone()
            .ok_or_else(|| BookingError::validation("No time slot selected"))?;
        let guest_id = request
            .guest_id
            .ok_or_else(|| BookingError::validation("Guest identity is required to book"))?;
        if guest_id == request.host_id {
            return Err(BookingError::validation("Cannot book a meeting with yourself"));
        }
        if self.host_id != Some(request.host_id) {
            return Err(BookingError::validation(
                "Slots were loaded for a different host",
            ));
        }
        if request.title.trim().is_empty() {
            return Err(BookingError::validation("Meeting title cannot be empty"));
        }

        let new_meeting = NewMeeting {
            host_id: request.host_id,
            guest_id,
            start_time: slot.start_time,
            end_time: slot.end_time,
            title: request.title.trim().to_string(),
            description: request.description,
        };

        self.state = WorkflowState::Submitting;
        let meeting = match self.meetings.create_meeting(new_meeting).await {
            Ok(meeting) => meeting,
            Err(err) => return Err(self.fail(err)),
        };
        info!(
            "Booked meeting {} for host {} with guest {}",
            meeting.id, meeting.host_id, meeting.guest_id
        );

        let notice = NewNotification {
            recipient_id: meeting.host_id,
            sender_id: guest_id,
            kind: NotificationKind::BookingRequest,
            meeting_id: Some(meeting.id),
            message: booking_request_message(guest_id, &slot, self.timezone),
        };
        let notification = match self.notifications.notify(notice).await {
            Ok(notification) => Some(notification),
            Err(err) => {
                warn!(
                    "Meeting {} booked but host {} was not notified: {}",
                    meeting.id, meeting.host_id, err
                );
                None
            }
        };

        self.state = WorkflowState::Succeeded;
        Ok(BookingOutcome {
            meeting,
            notification,
        })
    }

    /// Return to `Idle`, forgetting slots, selection and the last error.
    pub fn reset(&mut self) {
        self.state = WorkflowState::Idle;
        self.host_id = None;
        self.date = None;
        self.slots.clear();
        self.selected = None;
        self.last_error = None;
    }

    /// Wait `delay` after a successful booking, then reset.
    ///
    /// Returns `false` without waiting when there is nothing to dismiss.
    pub async fn dismiss_after(&mut self, delay: Duration) -> bool {
        if self.state != WorkflowState::Succeeded {
            return false;
        }
        tokio::time::sleep(delay).await;
        self.reset();
        true
    }

    fn fail(&mut self, err: BookingError) -> BookingError {
        error!("Booking workflow failed while {}: {}", self.state, err);
        self.state = WorkflowState::Failed;
        self.last_error = Some(err.to_string());
        err
    }
}

/// Message shown to the host when a guest requests a slot, with the slot
/// start rendered in the host's `timezone`.
pub fn booking_request_message(guest_id: UserId, slot: &TimeSlot, timezone: Tz) -> String {
    let local_start = slot.start_time.with_timezone(&timezone);
    format!(
        "{} wants to book a meeting with you on {} at {}",
        guest_id,
        local_start.format("%A, %B %-d, %Y"),
        local_start.format("%-I:%M %p")
    )
}
