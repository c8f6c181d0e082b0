//! Text Gantt chart for a laid-out [`Timeline`].
//!
//! One character column per day. The chart is wrapped in a fenced code block
//! so markdown renderers keep the columns aligned.

use std::fmt;

use crate::{
    models::TaskStatus,
    timeline::{BarGeometry, Timeline},
};

const PROJECT_GLYPH: char = '═';
const MIN_LABEL_WIDTH: usize = 7;
const MAX_LABEL_WIDTH: usize = 24;

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Timeline: {}", self.project_title)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Range: {} → {} ({} days)",
            self.range.start, self.range.end, self.total_days
        )?;
        writeln!(
            f,
            "- Scale: {} px/day, {} px wide",
            self.pixels_per_day,
            self.pixel_width()
        )?;
        writeln!(f)?;

        let columns = usize::try_from(self.total_days).unwrap_or(0);
        let labels: Vec<String> = self
            .task_bars
            .iter()
            .map(|bar| format!("{}. {}", bar.task_id, bar.title))
            .collect();
        let label_width = labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(MIN_LABEL_WIDTH, MAX_LABEL_WIDTH);

        writeln!(f, "```text")?;
        writeln!(
            f,
            "{} │{}│",
            " ".repeat(label_width),
            self.month_header(columns)
        )?;
        writeln!(
            f,
            "{} │{}│",
            fit_label("Project", label_width),
            bar_row(&self.project_bar, columns, PROJECT_GLYPH)
        )?;
        for (bar, label) in self.task_bars.iter().zip(&labels) {
            writeln!(
                f,
                "{} │{}│",
                fit_label(label, label_width),
                bar_row(&bar.geometry, columns, bar.status.bar_glyph())
            )?;
        }
        writeln!(f, "```")?;
        writeln!(f)?;

        if self.task_bars.is_empty() {
            writeln!(f, "No tasks in this project.")?;
        } else {
            write!(f, "Legend:")?;
            for status in [
                TaskStatus::Done,
                TaskStatus::Review,
                TaskStatus::InProgress,
                TaskStatus::Todo,
            ] {
                write!(f, " {} {}", status.bar_glyph(), status.as_str())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Timeline {
    /// Month labels placed at their first column, cut to the month's span.
    fn month_header(&self, columns: usize) -> String {
        let mut header = vec![' '; columns];
        for month in &self.months {
            let start = usize::try_from(month.offset_days).unwrap_or(0);
            let span = usize::try_from(month.span_days).unwrap_or(0);
            for (i, ch) in month.label.chars().take(span).enumerate() {
                if let Some(cell) = header.get_mut(start + i) {
                    *cell = ch;
                }
            }
        }
        header.into_iter().collect()
    }
}

fn bar_row(bar: &BarGeometry, columns: usize, glyph: char) -> String {
    let clamp = |value: i64| usize::try_from(value.max(0)).unwrap_or(0).min(columns);
    let start = clamp(bar.offset_days);
    let end = clamp(bar.end_offset()).max(start);

    let mut row = String::with_capacity(columns * glyph.len_utf8());
    row.extend(std::iter::repeat(' ').take(start));
    row.extend(std::iter::repeat(glyph).take(end - start));
    row.extend(std::iter::repeat(' ').take(columns - end));
    row
}

fn fit_label(label: &str, width: usize) -> String {
    let count = label.chars().count();
    if count <= width {
        format!("{label}{}", " ".repeat(width - count))
    } else {
        let mut cut: String = label.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}
