//! Timeline range resolution and day offsets.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{add_days, days_between, TimelineConfig, TimelineItem};

/// The padded date window that serves as the origin for bar placement.
///
/// `end >= start` always holds for ranges produced by [`resolve_range`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineRange {
    pub start: Date,
    pub end: Date,
}

impl TimelineRange {
    /// Number of day columns in the range, never less than one.
    pub fn total_days(&self) -> i64 {
        days_between(self.start, self.end).max(1)
    }

    /// Whole days from the range start to `date`, clamped to zero for dates
    /// before the start.
    pub fn day_offset(&self, date: Date) -> i64 {
        days_between(self.start, date).max(0)
    }

    /// Every calendar day from `start` to `end`, inclusive.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        std::iter::successors(Some(self.start), |day| day.tomorrow().ok())
            .take_while(move |day| *day <= self.end)
    }
}

/// Compute the padded range covering a project and its tasks.
///
/// The project's own dates seed the window; missing ones fall back to
/// `today` and `today + fallback_window_days`. Each task can then widen it:
/// its start lowers the minimum (or raises the maximum when it lies past
/// it), and its explicit end, or its start plus duration, raises the
/// maximum. Both ends are finally padded by `padding_days`.
pub fn resolve_range<P, T>(
    project: &P,
    tasks: &[T],
    today: Date,
    config: &TimelineConfig,
) -> TimelineRange
where
    P: TimelineItem + ?Sized,
    T: TimelineItem,
{
    let mut min = project.start_date().unwrap_or(today);
    let mut max = project
        .end_date()
        .unwrap_or_else(|| add_days(today, i64::from(config.fallback_window_days)));

    for task in tasks {
        if let Some(start) = task.start_date() {
            min = min.min(start);
            max = max.max(start);
        }
        if let Some(end) = task.projected_end() {
            max = max.max(end);
        }
    }

    if max < min {
        max = min;
    }

    let padding = i64::from(config.padding_days);
    TimelineRange {
        start: add_days(min, -padding),
        end: add_days(max, padding),
    }
}
