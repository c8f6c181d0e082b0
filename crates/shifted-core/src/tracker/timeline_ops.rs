//! Timeline layout for stored projects.

use jiff::{civil::Date, Zoned};
use log::debug;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    params::{Id, ShowTimeline},
    permissions::Action,
    timeline::{Timeline, TimelineConfig},
};

impl Tracker {
    /// Load a project with its tasks and lay out its Gantt timeline.
    ///
    /// The reference date defaults to today in the system time zone and only
    /// matters for projects missing a start or end date.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::ProjectNotFound` for unknown projects and
    /// `TrackerError::InvalidDate` when `params.today` is malformed.
    pub async fn show_timeline(
        &self,
        params: &ShowTimeline,
        config: &TimelineConfig,
    ) -> Result<Timeline> {
        self.authorize(Action::ViewTimeline)?;
        let today = params.today()?.unwrap_or_else(local_today);

        let project = self
            .get_project(&Id {
                id: params.project_id,
            })
            .await?
            .ok_or(TrackerError::ProjectNotFound {
                id: params.project_id,
            })?;

        let timeline = Timeline::build(&project, today, config);
        debug!(
            "Laid out project {} over {} days from {}",
            project.id, timeline.total_days, timeline.range.start
        );
        Ok(timeline)
    }
}

fn local_today() -> Date {
    Zoned::now().date()
}
