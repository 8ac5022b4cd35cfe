//! Calendar parsing and formatting for post dates.
//!
//! The post index itself never parses dates (sorting is plain string
//! comparison over `YYYY-MM-DD`); only the generators need a calendar
//! value, for rss pub dates and sitemap lastmod fields.

use anyhow::{Result, bail};

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format.
    ///
    /// Anything else (including shapes like "Jan 5, 2024") yields `None`;
    /// callers decide whether to skip the record or fall back.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_digits(&bytes[0..4])? as u16;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_digits(&bytes[5..7])? as u8;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_digits(&bytes[8..10])? as u8;

        // Optional time part (RFC3339, UTC only)
        let (hour, minute, second) = if bytes.len() >= 20 && bytes[10] == b'T' && bytes[19] == b'Z'
        {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            (
                parse_digits(&bytes[11..13])? as u8,
                parse_digits(&bytes[14..16])? as u8,
                parse_digits(&bytes[17..19])? as u8,
            )
        } else if bytes.len() == 10 {
            (0, 0, 0)
        } else {
            return None;
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as "YYYY-MM-DD" for sitemap lastmod fields.
    pub fn to_ymd(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Format as RFC 2822 for rss pub dates.
    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        // Zeller's congruence for weekday calculation
        let weekday = self.weekday_index();

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[weekday],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    #[inline]
    fn weekday_index(&self) -> usize {
        let (y, m) = if self.month < 3 {
            (self.year as i32 - 1, self.month as i32 + 12)
        } else {
            (self.year as i32, self.month as i32)
        };
        let d = self.day as i32;
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

/// Parse a fixed-width run of ASCII digits
#[inline]
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    let mut result = 0u32;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u32;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2024-06-01").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 1, 0, 0, 0));
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = DateTimeUtc::parse("2024-01-15T10:30:45Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 1, 15, 10, 30, 45));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(DateTimeUtc::parse("Jan 5, 2024").is_none());
        assert!(DateTimeUtc::parse("2024/01/05").is_none());
        assert!(DateTimeUtc::parse("2024-1-5").is_none());
        assert!(DateTimeUtc::parse("").is_none());
        // trailing garbage after a valid date
        assert!(DateTimeUtc::parse("2024-01-05 extra").is_none());
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_dates() {
        assert!(DateTimeUtc::parse("2024-13-01").is_none());
        assert!(DateTimeUtc::parse("2024-00-01").is_none());
        assert!(DateTimeUtc::parse("2024-04-31").is_none());
        assert!(DateTimeUtc::parse("2023-02-29").is_none());
    }

    #[test]
    fn test_parse_leap_year() {
        assert!(DateTimeUtc::parse("2024-02-29").is_some());
        assert!(DateTimeUtc::parse("2000-02-29").is_some()); // divisible by 400
        assert!(DateTimeUtc::parse("1900-02-29").is_none()); // divisible by 100 but not 400
    }

    #[test]
    fn test_validate_time_bounds() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 30, 60).validate().is_err());
        assert!(
            DateTimeUtc::new(2024, 12, 31, 23, 59, 59)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_to_ymd() {
        let dt = DateTimeUtc::parse("2024-06-01").unwrap();
        assert_eq!(dt.to_ymd(), "2024-06-01");
    }

    #[test]
    fn test_to_rfc2822_known_date() {
        // 2024-01-15 was a Monday
        let dt = DateTimeUtc::new(2024, 1, 15, 10, 30, 45);
        assert_eq!(dt.to_rfc2822(), "Mon, 15 Jan 2024 10:30:45 GMT");
    }

    #[test]
    fn test_to_rfc2822_date_only() {
        // 2024-06-01 was a Saturday
        let dt = DateTimeUtc::parse("2024-06-01").unwrap();
        assert_eq!(dt.to_rfc2822(), "Sat, 01 Jun 2024 00:00:00 GMT");
    }

    #[test]
    fn test_to_rfc2822_all_months() {
        let months = [
            (1, "Jan"),
            (2, "Feb"),
            (3, "Mar"),
            (4, "Apr"),
            (5, "May"),
            (6, "Jun"),
            (7, "Jul"),
            (8, "Aug"),
            (9, "Sep"),
            (10, "Oct"),
            (11, "Nov"),
            (12, "Dec"),
        ];

        for (month_num, month_name) in months {
            let dt = DateTimeUtc::new(2024, month_num, 15, 12, 0, 0);
            assert!(dt.validate().is_ok());
            assert!(dt.to_rfc2822().contains(month_name));
        }
    }
}
