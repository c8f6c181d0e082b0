//! Bar position and width in day units.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{days_between, TimelineConfig, TimelineItem, TimelineRange};

/// Horizontal extent of one bar, in days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BarGeometry {
    /// Columns from the range start, `>= 0`
    pub offset_days: i64,
    /// Columns covered, `>= 1`
    pub width_days: i64,
}

/// Horizontal extent of one bar, in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PixelBar {
    pub left: i64,
    pub width: i64,
}

impl BarGeometry {
    /// First column past the bar.
    pub fn end_offset(&self) -> i64 {
        self.offset_days + self.width_days
    }

    /// Scale to pixels, saturating at `i64::MAX`.
    pub fn to_pixels(&self, pixels_per_day: u32) -> PixelBar {
        let scale = i64::from(pixels_per_day);
        PixelBar {
            left: self.offset_days.saturating_mul(scale),
            width: self.width_days.saturating_mul(scale),
        }
    }
}

/// Place one item on the range.
///
/// Items without a start date are placed at `anchor`. The width comes from,
/// in order: a positive duration; the inclusive span between start and end;
/// the configured default width.
pub fn bar_geometry<I>(
    item: &I,
    anchor: Date,
    range: &TimelineRange,
    config: &TimelineConfig,
) -> BarGeometry
where
    I: TimelineItem + ?Sized,
{
    let offset_days = range.day_offset(item.start_date().unwrap_or(anchor));
    BarGeometry {
        offset_days,
        width_days: width_days(item, config),
    }
}

fn width_days<I>(item: &I, config: &TimelineConfig) -> i64
where
    I: TimelineItem + ?Sized,
{
    if let Some(days) = item.duration_days().filter(|days| *days > 0) {
        return i64::from(days);
    }
    match (item.start_date(), item.end_date()) {
        (Some(start), Some(end)) => (days_between(start, end) + 1).max(1),
        _ => i64::from(config.default_bar_width_days).max(1),
    }
}
