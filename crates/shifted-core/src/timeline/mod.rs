//! Gantt timeline layout.
//!
//! Pure, synchronous computation of the geometry a Gantt chart needs: a
//! padded date range shared by a project and its tasks, day offsets into that
//! range, a bar `(offset, width)` per item, and month/day axis labels. Nothing
//! here performs I/O or keeps state between calls; the same input always
//! yields the same output.
//!
//! ```text
//! project + tasks ──▶ resolve_range ──▶ TimelineRange ──┬─▶ month_markers / day_markers
//!                                                       └─▶ bar_geometry (per item)
//! ```
//!
//! All positions are in day units. Presentation layers multiply by a
//! pixels-per-day scale ([`BarGeometry::to_pixels`]).
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use shifted_core::timeline::{
//!     bar_geometry, resolve_range, TimelineConfig, TimelineSpan,
//! };
//!
//! let config = TimelineConfig::default();
//! let project = TimelineSpan {
//!     start_date: Some(date(2024, 7, 1)),
//!     end_date: Some(date(2024, 9, 30)),
//!     duration_days: None,
//! };
//! let task = TimelineSpan {
//!     start_date: Some(date(2024, 7, 5)),
//!     end_date: Some(date(2024, 7, 15)),
//!     duration_days: None,
//! };
//!
//! let range = resolve_range(&project, &[task], date(2024, 1, 1), &config);
//! assert_eq!(range.start, date(2024, 6, 28));
//! assert_eq!(range.end, date(2024, 10, 3));
//!
//! let bar = bar_geometry(&task, date(2024, 7, 1), &range, &config);
//! assert_eq!((bar.offset_days, bar.width_days), (7, 11));
//! ```

use jiff::{civil::Date, Span};
use serde::{Deserialize, Serialize};

pub mod axis;
pub mod config;
pub mod geometry;
pub mod item;
pub mod range;


pub use axis::{day_markers, month_markers, DayMarker, MonthMarker};
pub use config::{
    TimelineConfig, DEFAULT_BAR_WIDTH_DAYS, DEFAULT_FALLBACK_WINDOW_DAYS, DEFAULT_PADDING_DAYS,
    DEFAULT_PIXELS_PER_DAY, MAX_CONFIG_WINDOW_DAYS, MAX_PADDING_DAYS, MAX_PIXELS_PER_DAY,
};
pub use geometry::{bar_geometry, BarGeometry, PixelBar};
pub use item::{TimelineItem, TimelineSpan};
pub use range::{resolve_range, TimelineRange};

use crate::models::{Priority, Project, TaskStatus};

const SECONDS_PER_DAY: i64 = 86_400;

/// A task's bar together with the fields needed to label it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskBar {
    pub task_id: u64,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub geometry: BarGeometry,
}

/// Complete layout of one project's Gantt chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    pub project_id: u64,
    pub project_title: String,
    pub range: TimelineRange,
    pub total_days: i64,
    pub months: Vec<MonthMarker>,
    pub days: Vec<DayMarker>,
    pub project_bar: BarGeometry,
    pub task_bars: Vec<TaskBar>,
    pub pixels_per_day: u32,
}

impl Timeline {
    /// Lay out `project` and its loaded tasks.
    ///
    /// `today` is only consulted when the project lacks a start or end date.
    /// The project bar is anchored at the range start; tasks without a start
    /// date are anchored at the project start (or the range start).
    pub fn build(project: &Project, today: Date, config: &TimelineConfig) -> Self {
        let range = resolve_range(project, &project.tasks, today, config);
        let task_anchor = project.start_date.unwrap_or(range.start);

        let task_bars = project
            .tasks
            .iter()
            .map(|task| TaskBar {
                task_id: task.id,
                title: task.title.clone(),
                status: task.status,
                priority: task.priority,
                assignee: task.assignee.clone(),
                geometry: bar_geometry(task, task_anchor, &range, config),
            })
            .collect();

        Self {
            project_id: project.id,
            project_title: project.title.clone(),
            total_days: range.total_days(),
            months: month_markers(&range),
            days: day_markers(&range),
            project_bar: bar_geometry(project, range.start, &range, config),
            task_bars,
            range,
            pixels_per_day: config.pixels_per_day,
        }
    }

    /// Width of the whole chart in pixels.
    pub fn pixel_width(&self) -> i64 {
        self.total_days.saturating_mul(i64::from(self.pixels_per_day))
    }
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub(crate) fn days_between(from: Date, to: Date) -> i64 {
    to.duration_since(from).as_secs() / SECONDS_PER_DAY
}

/// Shift `date` by `days`, saturating at the supported calendar bounds.
pub(crate) fn add_days(date: Date, days: i64) -> Date {
    match Span::new().try_days(days) {
        Ok(span) => date.saturating_add(span),
        Err(_) if days < 0 => Date::MIN,
        Err(_) => Date::MAX,
    }
}
