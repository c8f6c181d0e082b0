//! Terminal rendering of markdown output.
//!
//! Uses termimad for inline styling. Fenced code blocks (the Gantt chart) are
//! printed untouched so their columns stay aligned.

use anyhow::Result;
use shifted_core::Theme;
use termimad::{crossterm::style::Color, MadSkin};

const FENCE: &str = "```";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    header_color: Color,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool, theme: Theme) -> Self {
        let (mut skin, header_color) = match theme {
            Theme::Dark => (MadSkin::default_dark(), Color::Cyan),
            Theme::Light => (MadSkin::default_light(), Color::DarkBlue),
        };

        skin.set_headers_fg(header_color);
        skin.bold.set_fg(match theme {
            Theme::Dark => Color::Yellow,
            Theme::Light => Color::DarkYellow,
        });
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self {
            rich_enabled,
            header_color,
            skin,
        }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        let mut in_code_block = false;
        for line in markdown.lines() {
            if line.starts_with(FENCE) {
                in_code_block = !in_code_block;
                continue;
            }

            if in_code_block {
                println!("{line}");
            } else if line.starts_with('#') {
                println!("{}", self.paint_header(line));
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    fn paint_header(&self, line: &str) -> String {
        use termimad::crossterm::style::Stylize;
        format!("{}", line.with(self.header_color).bold())
    }
}
