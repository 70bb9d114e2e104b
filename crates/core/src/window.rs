use chrono::{Days, NaiveDate, Utc};

use crate::errors::{BookingError, BookingResult};

pub const DEFAULT_WINDOW_DAYS: u32 = 14;

/// The range of calendar days a guest may book into.
///
/// Without an anchor the window starts on the current UTC day, so the set of
/// bookable dates moves forward as time passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    days: u32,
    anchor: Option<NaiveDate>,
}

impl Default for BookingWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            anchor: None,
        }
    }
}

impl BookingWindow {
    pub fn new(days: u32) -> BookingResult<Self> {
        if days == 0 {
            return Err(BookingError::validation(
                "Booking window must span at least one day",
            ));
        }
        Ok(Self { days, anchor: None })
    }

    /// A window pinned to `first_day` instead of today.
    pub fn starting_on(first_day: NaiveDate, days: u32) -> BookingResult<Self> {
        let mut window = Self::new(days)?;
        window.anchor = Some(first_day);
        Ok(window)
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn first_day(&self) -> NaiveDate {
        self.anchor.unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        first
            .checked_add_days(Days::new(u64::from(self.days - 1)))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let first = self.first_day();
        date >= first && date <= self.last_day()
    }

    pub fn check(&self, date: NaiveDate) -> BookingResult<()> {
        if self.contains(date) {
            Ok(())
        } else {
            Err(BookingError::Validation(format!(
                "Date {} is outside the booking window ({} to {})",
                date,
                self.first_day(),
                self.last_day()
            )))
        }
    }

    /// Every bookable day in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.first_day()
            .iter_days()
            .take(self.days as usize)
            .collect()
    }
}
