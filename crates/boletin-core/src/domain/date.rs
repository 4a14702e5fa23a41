use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, Weekday};

use crate::ValidationError;

const YMD_LEN: usize = 8;

/// Calendar date a bulletin is published under, rendered as `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BulletinDate(Date);

impl BulletinDate {
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn from_calendar_date(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        let out_of_range = || ValidationError::DateOutOfRange {
            value: format!("{year:04}{month:02}{day:02}"),
        };
        let month = Month::try_from(month).map_err(|_| out_of_range())?;
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| out_of_range())
    }

    /// Strict `^\d{8}$` parse into a real calendar date.
    pub fn parse_ymd(input: &str) -> Result<Self, ValidationError> {
        if input.len() != YMD_LEN || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::DateFormat {
                value: input.to_owned(),
            });
        }

        // All eight bytes are ASCII digits, so these slices cannot fail to parse.
        let year: i32 = input[0..4].parse().map_err(|_| ValidationError::DateFormat {
            value: input.to_owned(),
        })?;
        let month: u8 = input[4..6].parse().map_err(|_| ValidationError::DateFormat {
            value: input.to_owned(),
        })?;
        let day: u8 = input[6..8].parse().map_err(|_| ValidationError::DateFormat {
            value: input.to_owned(),
        })?;

        Self::from_calendar_date(year, month, day)
    }

    /// Malformed or impossible dates collapse to `None` instead of failing.
    pub fn from_ymd_lenient(input: Option<&str>) -> Option<Self> {
        input.and_then(|value| Self::parse_ymd(value.trim()).ok())
    }

    pub fn ymd(self) -> String {
        format!("{:04}{:02}{:02}", self.year(), self.month(), self.day())
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_weekend(self) -> bool {
        matches!(self.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    pub fn previous_day(self) -> Self {
        Self(self.0.saturating_sub(Duration::days(1)))
    }

    /// Walks backward until the date is Monday through Friday.
    pub fn roll_back_to_weekday(self) -> Self {
        let mut date = self;
        while date.is_weekend() {
            date = date.previous_day();
        }
        date
    }

    pub fn into_inner(self) -> Date {
        self.0
    }
}

impl Display for BulletinDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.ymd())
    }
}

impl From<Date> for BulletinDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl TryFrom<String> for BulletinDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_ymd(&value)
    }
}

impl TryFrom<&str> for BulletinDate {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_ymd(value)
    }
}

impl From<BulletinDate> for String {
    fn from(value: BulletinDate) -> Self {
        value.ymd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compact_date() {
        let date = BulletinDate::parse_ymd("20240105").expect("valid date");
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 5);
        assert_eq!(date.ymd(), "20240105");
    }

    #[test]
    fn rejects_dashed_and_short_input() {
        for input in ["2024-01-01", "2024011", "202401011", "2024O105", ""] {
            let err = BulletinDate::parse_ymd(input).expect_err("must fail");
            assert!(matches!(err, ValidationError::DateFormat { .. }), "{input}");
        }
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        let err = BulletinDate::parse_ymd("20230229").expect_err("2023 is not a leap year");
        assert!(matches!(err, ValidationError::DateOutOfRange { .. }));
        assert!(BulletinDate::parse_ymd("20241301").is_err());
        assert!(BulletinDate::parse_ymd("20240100").is_err());
    }

    #[test]
    fn lenient_parse_treats_garbage_as_absent() {
        assert_eq!(BulletinDate::from_ymd_lenient(Some("2024-01-01")), None);
        assert_eq!(BulletinDate::from_ymd_lenient(None), None);
        assert_eq!(
            BulletinDate::from_ymd_lenient(Some("20240105")),
            Some(BulletinDate::parse_ymd("20240105").expect("valid"))
        );
    }

    #[test]
    fn weekend_rolls_back_to_friday() {
        // 2024-01-06 is a Saturday, 2024-01-07 a Sunday.
        let friday = BulletinDate::parse_ymd("20240105").expect("valid");
        for input in ["20240106", "20240107"] {
            let date = BulletinDate::parse_ymd(input).expect("valid");
            assert!(date.is_weekend());
            assert_eq!(date.roll_back_to_weekday(), friday);
        }
        assert_eq!(friday.roll_back_to_weekday(), friday);
    }

    #[test]
    fn previous_day_crosses_month_and_year() {
        let date = BulletinDate::parse_ymd("20240101").expect("valid");
        assert_eq!(date.previous_day().ymd(), "20231231");
    }

    #[test]
    fn serializes_as_compact_string() {
        let date = BulletinDate::parse_ymd("20240105").expect("valid");
        let json = serde_json::to_string(&date).expect("serializes");
        assert_eq!(json, "\"20240105\"");
        let back: BulletinDate = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, date);
    }
}
