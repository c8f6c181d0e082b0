//! Tunable constants for timeline layout.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Days added before the earliest and after the latest date of a timeline.
pub const DEFAULT_PADDING_DAYS: u32 = 3;

/// Length of the window assumed for a project without an end date, counted
/// from the reference date.
pub const DEFAULT_FALLBACK_WINDOW_DAYS: u32 = 30;

/// Bar width for items with neither a duration nor a complete date window.
pub const DEFAULT_BAR_WIDTH_DAYS: u32 = 2;

/// Horizontal scale used when converting day units to pixels.
pub const DEFAULT_PIXELS_PER_DAY: u32 = 30;

/// Largest accepted padding on each side of a timeline.
pub const MAX_PADDING_DAYS: u32 = 365;

/// Largest accepted fallback window and default bar width.
pub const MAX_CONFIG_WINDOW_DAYS: u32 = 3660;

/// Largest accepted horizontal scale.
pub const MAX_PIXELS_PER_DAY: u32 = 1000;

/// Layout constants applied by the timeline engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimelineConfig {
    pub padding_days: u32,
    pub fallback_window_days: u32,
    pub default_bar_width_days: u32,
    pub pixels_per_day: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            padding_days: DEFAULT_PADDING_DAYS,
            fallback_window_days: DEFAULT_FALLBACK_WINDOW_DAYS,
            default_bar_width_days: DEFAULT_BAR_WIDTH_DAYS,
            pixels_per_day: DEFAULT_PIXELS_PER_DAY,
        }
    }
}

impl TimelineConfig {
    /// Check that widths and scales are usable.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the default bar width or the
    /// pixel scale is zero, or when any value exceeds its `MAX_*` bound.
    pub fn validate(&self) -> Result<()> {
        if self.default_bar_width_days == 0 {
            return Err(TrackerError::invalid_input("timeline.default_bar_width_days")
                .with_reason("Bar width must be at least one day"));
        }
        if self.pixels_per_day == 0 {
            return Err(TrackerError::invalid_input("timeline.pixels_per_day")
                .with_reason("Pixel scale must be positive"));
        }

        for (key, value, max) in [
            ("timeline.padding_days", self.padding_days, MAX_PADDING_DAYS),
            (
                "timeline.fallback_window_days",
                self.fallback_window_days,
                MAX_CONFIG_WINDOW_DAYS,
            ),
            (
                "timeline.default_bar_width_days",
                self.default_bar_width_days,
                MAX_CONFIG_WINDOW_DAYS,
            ),
            ("timeline.pixels_per_day", self.pixels_per_day, MAX_PIXELS_PER_DAY),
        ] {
            if value > max {
                return Err(TrackerError::invalid_input(key)
                    .with_reason(format!("Value {value} is above the maximum of {max}")));
            }
        }
        Ok(())
    }
}
