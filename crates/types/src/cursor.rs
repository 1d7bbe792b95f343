use crate::geometry::Rect;
use serde::Serialize;

/// The position where the next section of a document is drawn.
///
/// A cursor is a plain value: every section renderer receives one and returns
/// the cursor for the section that follows it. Nothing holds a reference to
/// it, so a layout pass can be replayed from any intermediate cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawCursor {
    /// Left edge of the content area.
    pub x: f32,
    /// Top of the next section, measured from the top of the page.
    pub y: f32,
    /// Width available to a section (page width minus both side margins).
    pub page_width: f32,
    /// Zero-based index of the page being filled.
    pub page_index: usize,
}

impl DrawCursor {
    pub fn new(x: f32, y: f32, page_width: f32) -> Self {
        Self {
            x,
            y,
            page_width,
            page_index: 0,
        }
    }

    /// The same cursor moved down by `dy`.
    pub fn advanced_by(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    /// A cursor at `top` on the following page.
    pub fn on_next_page(self, top: f32) -> Self {
        Self {
            y: top,
            page_index: self.page_index + 1,
            ..self
        }
    }

    /// The full-width box of `height` starting at this cursor.
    pub fn bounds(&self, height: f32) -> Rect {
        Rect::new(self.x, self.y, self.page_width, height)
    }
}
