//! The date shape the layout engine reads from records.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::add_days;
use crate::models::{Project, Task};

/// Anything that can be placed on a timeline.
///
/// All three fields are optional; the engine resolves missing values with
/// fallbacks instead of failing.
pub trait TimelineItem {
    fn start_date(&self) -> Option<Date>;

    /// Explicit end (the "deadline" of a task), inclusive.
    fn end_date(&self) -> Option<Date>;

    /// Planned length in days.
    fn duration_days(&self) -> Option<u32> {
        None
    }

    /// The latest date this item is known to reach: the explicit end, or
    /// the start plus the duration when no end is recorded.
    fn projected_end(&self) -> Option<Date> {
        self.end_date().or_else(|| {
            let start = self.start_date()?;
            let days = self.duration_days()?;
            Some(add_days(start, i64::from(days)))
        })
    }
}

/// A bare date window, for callers that do not hold full records.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineSpan {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub duration_days: Option<u32>,
}

impl TimelineItem for TimelineSpan {
    fn start_date(&self) -> Option<Date> {
        self.start_date
    }

    fn end_date(&self) -> Option<Date> {
        self.end_date
    }

    fn duration_days(&self) -> Option<u32> {
        self.duration_days
    }
}

impl TimelineItem for Project {
    fn start_date(&self) -> Option<Date> {
        self.start_date
    }

    fn end_date(&self) -> Option<Date> {
        self.end_date
    }
}

impl TimelineItem for Task {
    fn start_date(&self) -> Option<Date> {
        self.start_date
    }

    fn end_date(&self) -> Option<Date> {
        self.end_date
    }

    fn duration_days(&self) -> Option<u32> {
        self.duration_days
    }
}

impl<T: TimelineItem + ?Sized> TimelineItem for &T {
    fn start_date(&self) -> Option<Date> {
        (**self).start_date()
    }

    fn end_date(&self) -> Option<Date> {
        (**self).end_date()
    }

    fn duration_days(&self) -> Option<u32> {
        (**self).duration_days()
    }
}
