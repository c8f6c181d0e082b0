//! Date and time display utilities.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system time zone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// An optional start/end pair rendered as a schedule.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use shifted_core::display::Schedule;
///
/// let window = Schedule(Some(date(2024, 7, 1)), Some(date(2024, 7, 10)));
/// assert_eq!(window.to_string(), "2024-07-01 → 2024-07-10");
/// assert_eq!(Schedule(None, None).to_string(), "unscheduled");
/// ```
pub struct Schedule(pub Option<Date>, pub Option<Date>);

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0, self.1) {
            (Some(start), Some(end)) => write!(f, "{start} → {end}"),
            (Some(start), None) => write!(f, "from {start}"),
            (None, Some(end)) => write!(f, "until {end}"),
            (None, None) => f.write_str("unscheduled"),
        }
    }
}
