/// Date and time formatting for the `{date}` and `{time}` placeholders.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// One instant, viewed in a target timezone.
///
/// Date and time are both read from the same instant so a single render
/// never mixes a date from before midnight with a time from after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZonedInstant {
    /// The zone was recognized.
    Zoned(DateTime<Tz>),
    /// The zone was not recognized; the instant is shown as naive UTC.
    Naive(NaiveDateTime),
}

impl ZonedInstant {
    pub fn new(now: DateTime<Utc>, timezone: &str) -> ZonedInstant {
        match timezone.parse::<Tz>() {
            Ok(tz) => ZonedInstant::Zoned(now.with_timezone(&tz)),
            Err(_) => {
                tracing::warn!(
                    timezone,
                    "timezone not recognized, formatting date and time as UTC"
                );
                ZonedInstant::Naive(now.naive_utc())
            }
        }
    }

    /// `YYYY-MM-DD`
    pub fn date(&self) -> String {
        self.format("%Y-%m-%d")
    }

    /// 24-hour `HH:MM`
    pub fn time(&self) -> String {
        self.format("%H:%M")
    }

    fn format(&self, pattern: &str) -> String {
        match self {
            ZonedInstant::Zoned(dt) => dt.format(pattern).to_string(),
            ZonedInstant::Naive(dt) => dt.format(pattern).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn london_summer_time() {
        let zoned = ZonedInstant::new(instant(2024, 7, 1, 12, 5), "Europe/London");
        assert_eq!(zoned.date(), "2024-07-01");
        assert_eq!(zoned.time(), "13:05");
    }

    #[test]
    fn london_winter_time() {
        let zoned = ZonedInstant::new(instant(2024, 1, 15, 9, 30), "Europe/London");
        assert_eq!(zoned.time(), "09:30");
    }

    #[test]
    fn date_rolls_over_with_zone() {
        let now = instant(2024, 3, 10, 23, 30);
        let tokyo = ZonedInstant::new(now, "Asia/Tokyo");
        assert_eq!(tokyo.date(), "2024-03-11");
        assert_eq!(tokyo.time(), "08:30");

        let new_york = ZonedInstant::new(now, "America/New_York");
        assert_eq!(new_york.date(), "2024-03-10");
        assert_eq!(new_york.time(), "19:30");
    }

    #[test]
    fn unknown_zone_falls_back_to_utc() {
        let zoned = ZonedInstant::new(instant(2024, 7, 1, 12, 5), "Not/AZone");
        assert!(matches!(zoned, ZonedInstant::Naive(_)));
        assert_eq!(zoned.date(), "2024-07-01");
        assert_eq!(zoned.time(), "12:05");
    }

    #[test]
    fn time_is_zero_padded_24_hour() {
        let zoned = ZonedInstant::new(instant(2024, 1, 2, 3, 4), "UTC");
        assert_eq!(zoned.date(), "2024-01-02");
        assert_eq!(zoned.time(), "03:04");

        let evening = ZonedInstant::new(instant(2024, 1, 2, 21, 45), "UTC");
        assert_eq!(evening.time(), "21:45");
    }
}
