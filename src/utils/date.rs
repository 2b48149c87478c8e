use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use std::fmt;

/// English short month names, shared by rfc2822 and the `en` date format.
pub const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// UTC datetime without timezone complexity.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let (hour, minute, second) = if bytes.len() == 20 && bytes[10] == b'T' && bytes[19] == b'Z'
        {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
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

    /// Zero-based month index, for month name tables.
    #[inline]
    pub fn month_index(&self) -> usize {
        (self.month.clamp(1, 12) - 1) as usize
    }

    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

        // Zeller's congruence for weekday calculation
        let weekday = self.weekday_index();

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[weekday],
            self.day,
            MONTHS_SHORT[self.month_index()],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    /// Shift by `minutes`, rolling over days, months and years.
    ///
    /// `None` when the result leaves the `0..=9999` year range.
    pub fn add_minutes(self, minutes: i64) -> Option<Self> {
        let days = days_from_civil(i64::from(self.year), i64::from(self.month), i64::from(self.day));
        let total = days * MINUTES_PER_DAY
            + i64::from(self.hour) * 60
            + i64::from(self.minute)
            + minutes;

        let (year, month, day) = civil_from_days(total.div_euclid(MINUTES_PER_DAY));
        let of_day = total.rem_euclid(MINUTES_PER_DAY);
        let year = u16::try_from(year).ok().filter(|y| *y <= 9999)?;

        Some(Self::new(
            year,
            month as u8,
            day as u8,
            (of_day / 60) as u8,
            (of_day % 60) as u8,
            self.second,
        ))
    }

    /// "YYYY-MM-DD", the date part only.
    pub fn to_ymd(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
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

impl fmt::Display for DateTimeUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.hour, self.minute, self.second) == (0, 0, 0) {
            f.write_str(&self.to_ymd())
        } else {
            write!(
                f,
                "{}T{:02}:{:02}:{:02}Z",
                self.to_ymd(),
                self.hour,
                self.minute,
                self.second
            )
        }
    }
}

impl Serialize for DateTimeUtc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts a quoted string or a native TOML date/datetime.
impl<'de> Deserialize<'de> for DateTimeUtc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = match toml::Value::deserialize(deserializer)? {
            toml::Value::String(s) => s,
            toml::Value::Datetime(dt) => {
                let date = dt
                    .date
                    .ok_or_else(|| D::Error::custom("datetime without a date part"))?;
                let time = dt.time.unwrap_or(toml::value::Time {
                    hour: 0,
                    minute: 0,
                    second: 0,
                    nanosecond: 0,
                });
                let parsed = Self::new(
                    date.year,
                    date.month,
                    date.day,
                    time.hour,
                    time.minute,
                    time.second,
                );
                parsed.validate().map_err(D::Error::custom)?;
                return match dt.offset {
                    None | Some(toml::value::Offset::Z) => Ok(parsed),
                    Some(toml::value::Offset::Custom { minutes }) => parsed
                        .add_minutes(-i64::from(minutes))
                        .ok_or_else(|| D::Error::custom(format!("datetime out of range: `{dt}`"))),
                };
            }
            other => {
                return Err(D::Error::custom(format!(
                    "expected a date, found {}",
                    other.type_str()
                )));
            }
        };
        Self::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: `{raw}`")))
    }
}

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Days since 1970-01-01 of a proleptic Gregorian date.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year - era * 400;
    let doy = (153 * ((month + 9) % 12) + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2025-03-15").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2025, 3, 15));
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 15, 14, 30, 45));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(DateTimeUtc::parse("").is_none());
        assert!(DateTimeUtc::parse("2025/03/15").is_none());
        assert!(DateTimeUtc::parse("2025-03-15T10:00").is_none());
        assert!(DateTimeUtc::parse("2025-13-01").is_none());
        assert!(DateTimeUtc::parse("2023-02-29").is_none());
    }

    #[test]
    fn test_validate_invalid_day() {
        assert!(DateTimeUtc::new(2024, 6, 0, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 4, 31, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 2, 30, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::from_ymd(2024, 2, 29).validate().is_ok());
        assert!(DateTimeUtc::from_ymd(2000, 2, 29).validate().is_ok());
        assert!(DateTimeUtc::from_ymd(1900, 2, 29).validate().is_err());
    }

    #[test]
    fn test_validate_invalid_time() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 30, 60).validate().is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let older = DateTimeUtc::from_ymd(2024, 12, 31);
        let newer = DateTimeUtc::from_ymd(2025, 1, 1);
        let same_day_later = DateTimeUtc::new(2025, 1, 1, 8, 0, 0);
        assert!(older < newer);
        assert!(newer < same_day_later);
    }

    #[test]
    fn test_to_rfc2822() {
        // 2025-03-15 is a Saturday
        assert_eq!(
            DateTimeUtc::from_ymd(2025, 3, 15).to_rfc2822(),
            "Sat, 15 Mar 2025 00:00:00 GMT"
        );
        assert_eq!(
            DateTimeUtc::new(2024, 1, 15, 10, 30, 45).to_rfc2822(),
            "Mon, 15 Jan 2024 10:30:45 GMT"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(DateTimeUtc::from_ymd(2024, 1, 1).to_string(), "2024-01-01");
        assert_eq!(
            DateTimeUtc::new(2024, 1, 1, 9, 5, 0).to_string(),
            "2024-01-01T09:05:00Z"
        );
    }

    #[derive(Deserialize)]
    struct Holder {
        date: DateTimeUtc,
    }

    #[test]
    fn test_deserialize_from_toml_string_and_date() {
        let quoted: Holder = toml::from_str(r#"date = "2025-03-15""#).unwrap();
        assert_eq!(quoted.date, DateTimeUtc::from_ymd(2025, 3, 15));

        let native: Holder = toml::from_str("date = 2025-03-15").unwrap();
        assert_eq!(native.date, DateTimeUtc::from_ymd(2025, 3, 15));

        let native_dt: Holder = toml::from_str("date = 2025-03-15T08:30:00Z").unwrap();
        assert_eq!(native_dt.date, DateTimeUtc::new(2025, 3, 15, 8, 30, 0));
    }

    #[test]
    fn test_deserialize_converts_offset_to_utc() {
        let west: Holder = toml::from_str("date = 2025-03-15T23:30:00-05:00").unwrap();
        assert_eq!(west.date, DateTimeUtc::new(2025, 3, 16, 4, 30, 0));

        let east: Holder = toml::from_str("date = 2025-01-01T01:15:30+02:00").unwrap();
        assert_eq!(east.date, DateTimeUtc::new(2024, 12, 31, 23, 15, 30));

        let zulu: Holder = toml::from_str("date = 2025-03-15T23:30:00Z").unwrap();
        assert_eq!(zulu.date, DateTimeUtc::new(2025, 3, 15, 23, 30, 0));
    }

    #[test]
    fn test_add_minutes_rollover() {
        let leap_eve = DateTimeUtc::new(2024, 2, 28, 23, 0, 0);
        assert_eq!(leap_eve.add_minutes(90), Some(DateTimeUtc::new(2024, 2, 29, 0, 30, 0)));

        let new_year = DateTimeUtc::from_ymd(2025, 1, 1);
        assert_eq!(new_year.add_minutes(-1), Some(DateTimeUtc::new(2024, 12, 31, 23, 59, 0)));
        assert_eq!(new_year.add_minutes(0), Some(new_year));

        assert_eq!(DateTimeUtc::from_ymd(0, 1, 1).add_minutes(-1), None);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(toml::from_str::<Holder>(r#"date = "2025-02-30""#).is_err());
        assert!(toml::from_str::<Holder>("date = 42").is_err());
    }
}
