//! Month and day axis labels.

use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};

use super::{add_days, TimelineRange};

/// Axis label spanning the visible part of one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthMarker {
    /// Short month and year, e.g. "Jul 2024"
    pub label: String,
    pub offset_days: i64,
    pub span_days: i64,
}

/// Axis label for a single day column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayMarker {
    pub date: Date,
    pub offset_days: i64,
    /// Day of the month
    pub label: String,
    /// Saturday or Sunday; a styling hint only
    pub is_weekend: bool,
}

/// Build one marker per calendar month intersecting the range.
///
/// A marker starts on the first day of the range and on every 1st of a
/// month; it spans the rest of that month or the rest of the range, whichever
/// is shorter. Markers that would span nothing are skipped.
pub fn month_markers(range: &TimelineRange) -> Vec<MonthMarker> {
    let total_days = range.total_days();

    range
        .dates()
        .enumerate()
        .filter(|(offset, day)| *offset == 0 || day.day() == 1)
        .filter_map(|(offset, day)| {
            let offset = offset as i64;
            let left_in_month = i64::from(day.days_in_month() - day.day()) + 1;
            let span_days = left_in_month.min(total_days - offset);
            (span_days > 0).then(|| MonthMarker {
                label: day.strftime("%b %Y").to_string(),
                offset_days: offset,
                span_days,
            })
        })
        .collect()
}

/// Build one marker per day column.
pub fn day_markers(range: &TimelineRange) -> Vec<DayMarker> {
    (0..range.total_days())
        .map(|offset| {
            let date = add_days(range.start, offset);
            DayMarker {
                date,
                offset_days: offset,
                label: date.day().to_string(),
                is_weekend: matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday),
            }
        })
        .collect()
}
