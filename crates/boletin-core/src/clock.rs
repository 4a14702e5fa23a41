use time::{OffsetDateTime, UtcOffset};

use crate::BulletinDate;

/// Source of "today" for requests that name no date.
pub trait Clock: Send + Sync {
    fn today(&self) -> BulletinDate;
}

/// Wall-clock date in a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    /// Falls back to UTC when `hours` is not a representable offset.
    pub fn with_offset_hours(hours: i8) -> Self {
        Self {
            offset: UtcOffset::from_hms(hours, 0, 0).unwrap_or(UtcOffset::UTC),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::with_offset_hours(0)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> BulletinDate {
        BulletinDate::new(OffsetDateTime::now_utc().to_offset(self.offset).date())
    }
}

/// Always answers the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub BulletinDate);

impl Clock for FixedClock {
    fn today(&self) -> BulletinDate {
        self.0
    }
}
