use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;
use crate::errors::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Scheduled,
    Cancelled,
    Completed,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => "scheduled",
            MeetingStatus::Cancelled => "cancelled",
            MeetingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MeetingStatus::Scheduled),
            "cancelled" => Ok(MeetingStatus::Cancelled),
            "completed" => Ok(MeetingStatus::Completed),
            other => Err(BookingError::Validation(format!(
                "Unknown meeting status: {}",
                other
            ))),
        }
    }
}

/// A booked meeting between a host and a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: Uuid,
    pub host_id: UserId,
    pub guest_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: MeetingStatus,
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    pub fn involves(&self, user_id: UserId) -> bool {
        self.host_id == user_id || self.guest_id == user_id
    }
}

/// Everything a `MeetingStore` needs to create a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeeting {
    pub host_id: UserId,
    pub guest_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
}

impl NewMeeting {
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.host_id == self.guest_id {
            return Err(BookingError::validation("Host and guest must differ"));
        }
        if self.start_time >= self.end_time {
            return Err(BookingError::validation("Meeting must end after it starts"));
        }
        if self.title.trim().is_empty() {
            return Err(BookingError::validation("Meeting title cannot be empty"));
        }
        Ok(())
    }
}
