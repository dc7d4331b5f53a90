use anyhow::Result;
use crossterm::{
    queue,
    style::{Color, Print, PrintStyledContent, Stylize},
};
use monocore::LineView;
use std::io::Write;

use crate::config::DisplayConfig;

/// How the cursor cell is marked on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    /// Background colour through ANSI escapes
    Highlight(Color),
    /// `[c]` markers for terminals without colour
    Brackets,
}

pub struct Display {
    style: CursorStyle,
}

impl Display {
    pub fn new(style: CursorStyle) -> Self {
        Self { style }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        let style = if config.use_color {
            CursorStyle::Highlight(config.cursor_color.to_color())
        } else {
            CursorStyle::Brackets
        };
        Self::new(style)
    }

    pub fn style(&self) -> CursorStyle {
        self.style
    }

    /// Writes one rendered line followed by a newline.
    pub fn write_line<W: Write>(&self, view: &LineView, out: &mut W) -> Result<()> {
        queue!(out, Print(&view.head))?;

        if let Some(cell) = &view.cursor {
            match self.style {
                CursorStyle::Highlight(color) => {
                    queue!(out, PrintStyledContent(cell.text.as_str().on(color)))?
                }
                CursorStyle::Brackets => queue!(out, Print(format!("[{}]", cell.text)))?,
            }
        }

        queue!(out, Print(&view.tail), Print("\n"))?;
        out.flush()?;
        Ok(())
    }
}
