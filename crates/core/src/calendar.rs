//! Stand-in calendar that offers one-hour slots across a working day.
//!
//! There is no real calendar behind this provider: availability is either
//! fully open, random per call, or pseudo-random but stable for a given
//! host and date.

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::errors::{BookingError, BookingResult};
use crate::models::{UserId, time_slot::TimeSlot};
use crate::ports::SlotProvider;

pub const DAY_START_HOUR: u32 = 9;
pub const DAY_END_HOUR: u32 = 17;
pub const DEFAULT_AVAILABILITY: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Availability {
    AllOpen,
    /// Each slot is open with `probability`, re-rolled on every call.
    Random { probability: f64 },
    /// Same odds as `Random`, but the outcome only depends on host and date.
    Seeded { probability: f64 },
}

impl Availability {
    pub fn from_probability(probability: f64, seeded: bool) -> Self {
        if probability >= 1.0 {
            Availability::AllOpen
        } else if seeded {
            Availability::Seeded { probability }
        } else {
            Availability::Random { probability }
        }
    }
}

#[derive(Debug, Clone)]
pub struct HourlySlotProvider {
    timezone: Tz,
    start_hour: u32,
    end_hour: u32,
    availability: Availability,
}

impl Default for HourlySlotProvider {
    fn default() -> Self {
        Self::new(Availability::Random {
            probability: DEFAULT_AVAILABILITY,
        })
    }
}

impl HourlySlotProvider {
    pub fn new(availability: Availability) -> Self {
        Self {
            timezone: Tz::UTC,
            start_hour: DAY_START_HOUR,
            end_hour: DAY_END_HOUR,
            availability,
        }
    }

    /// Interpret working hours in `timezone` rather than UTC.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_hours(mut self, start_hour: u32, end_hour: u32) -> BookingResult<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(BookingError::Validation(format!(
                "Invalid working hours {}..{}",
                start_hour, end_hour
            )));
        }
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        Ok(self)
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn slots_for(&self, host_id: UserId, date: NaiveDate) -> Vec<TimeSlot> {
        let mut seeded = match self.availability {
            Availability::Seeded { .. } => Some(StdRng::seed_from_u64(seed_for(host_id, date))),
            _ => None,
        };
        let mut thread = rand::thread_rng();

        let mut slots = Vec::with_capacity((self.end_hour - self.start_hour) as usize);
        for hour in self.start_hour..self.end_hour {
            let available = match self.availability {
                Availability::AllOpen => true,
                Availability::Random { probability } => thread.gen_bool(odds(probability)),
                Availability::Seeded { probability } => match seeded.as_mut() {
                    Some(rng) => rng.gen_bool(odds(probability)),
                    None => false,
                },
            };

            let Some(local_start) = date.and_hms_opt(hour, 0, 0) else {
                continue;
            };
            let local_end = local_start + Duration::hours(1);

            // Local times swallowed by a DST jump have no slot.
            let (Some(start), Some(end)) = (
                self.timezone.from_local_datetime(&local_start).earliest(),
                self.timezone.from_local_datetime(&local_end).earliest(),
            ) else {
                continue;
            };

            if let Ok(slot) =
                TimeSlot::new(start.with_timezone(&Utc), end.with_timezone(&Utc), available)
            {
                slots.push(slot);
            }
        }
        slots
    }
}

#[async_trait]
impl SlotProvider for HourlySlotProvider {
    async fn available_slots(
        &self,
        host_id: UserId,
        date: NaiveDate,
    ) -> BookingResult<Vec<TimeSlot>> {
        tracing::debug!("Generating slots for host {} on {}", host_id, date);
        Ok(self.slots_for(host_id, date))
    }
}

fn odds(probability: f64) -> f64 {
    if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn seed_for(host_id: UserId, date: NaiveDate) -> u64 {
    let day = u64::from(date.num_days_from_ce().unsigned_abs());
    host_id.rotate_left(21) ^ day.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
