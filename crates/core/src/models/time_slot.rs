use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// A bounded interval offered by a host, flagged available or taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub available: bool,
}

impl TimeSlot {
    pub fn new(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        available: bool,
    ) -> BookingResult<Self> {
        if start_time >= end_time {
            return Err(BookingError::Validation(format!(
                "Slot must end after it starts ({} >= {})",
                start_time, end_time
            )));
        }

        Ok(Self {
            start_time,
            end_time,
            available,
        })
    }

    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}
