//! Cursor, current style and text placement.
//!
//! The screen keeps no cell contents: it turns `draw_text` calls into draw
//! commands clipped to the current size, and tracks where the cursor ends up.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::backend::{CellStyle, DrawCmd};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    cursor: (u16, u16),
    style: CellStyle,
    tab_width: u16,
}

impl Screen {
    pub fn new(width: u16, height: u16, tab_width: u16) -> Self {
        Self {
            width,
            height,
            cursor: (0, 0),
            style: CellStyle::default(),
            tab_width: tab_width.max(1),
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }

    pub fn style(&self) -> CellStyle {
        self.style
    }

    pub fn style_mut(&mut self) -> &mut CellStyle {
        &mut self.style
    }

    /// Homes the cursor. The current style survives a clear.
    pub fn clear(&mut self) -> DrawCmd {
        self.cursor = (0, 0);
        DrawCmd::Clear
    }

    pub fn layout_text(&mut self, text: &str) -> Vec<DrawCmd> {
        let (x, y) = self.cursor;
        let mut layout = Layout {
            width: self.width,
            height: self.height,
            style: self.style,
            x,
            y,
            run: String::new(),
            run_x: x,
            cmds: Vec::new(),
        };

        for g in text.graphemes(true) {
            match g {
                "\n" | "\r\n" => layout.newline(),
                "\t" => {
                    let next = (layout.x / self.tab_width + 1).saturating_mul(self.tab_width);
                    while layout.x < next {
                        layout.place(" ", 1);
                    }
                }
                _ if g.chars().any(char::is_control) => {}
                _ => {
                    let w = UnicodeWidthStr::width(g) as u16;
                    if w > 0 {
                        layout.place(g, w);
                    }
                }
            }
        }
        layout.flush();

        self.cursor = (layout.x, layout.y);
        layout.cmds
    }
}

struct Layout {
    width: u16,
    height: u16,
    style: CellStyle,
    x: u16,
    y: u16,
    run: String,
    run_x: u16,
    cmds: Vec<DrawCmd>,
}

impl Layout {
    fn place(&mut self, g: &str, w: u16) {
        let fits =
            self.y < self.height && u32::from(self.x) + u32::from(w) <= u32::from(self.width);
        if fits {
            if self.run.is_empty() {
                self.run_x = self.x;
            }
            self.run.push_str(g);
        } else {
            self.flush();
        }
        self.x = self.x.saturating_add(w);
    }

    fn newline(&mut self) {
        self.flush();
        self.x = 0;
        self.y = self.y.saturating_add(1);
    }

    fn flush(&mut self) {
        if self.run.is_empty() {
            return;
        }
        self.cmds.push(DrawCmd::Text {
            x: self.run_x,
            y: self.y,
            text: std::mem::take(&mut self.run),
            style: self.style,
        });
    }
}

#[cfg(test)]
#[path = "../tests/unit/screen.rs"]
mod tests;
