use super::{SECTION_MARGIN, SectionOutput};
use crate::text::{fit_text, measure, wrap_text};
use danfe_types::{DrawCommand, DrawCursor, FontWeight, Rect};

pub(crate) const PAD: f32 = 3.0;
pub(crate) const TITLE_SIZE: f32 = 6.5;
pub(crate) const LABEL_SIZE: f32 = 5.0;
pub(crate) const VALUE_SIZE: f32 = 7.5;
/// Height of the title strip at the top of titled sections.
pub(crate) const TITLE_HEIGHT: f32 = 11.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Center,
    Right,
}

/// One labelled field of a row.
pub(crate) struct Cell<'a> {
    pub label: &'a str,
    pub value: String,
    /// Share of the row width, relative to the other cells.
    pub share: f32,
    pub align: Align,
    pub weight: FontWeight,
}

impl<'a> Cell<'a> {
    pub fn new(label: &'a str, value: impl Into<String>, share: f32) -> Self {
        Self {
            label,
            value: value.into(),
            share,
            align: Align::Left,
            weight: FontWeight::Regular,
        }
    }

    /// Right-aligned, for amounts.
    pub fn amount(label: &'a str, value: impl Into<String>, share: f32) -> Self {
        Self {
            align: Align::Right,
            ..Self::new(label, value, share)
        }
    }

    pub fn bold(self) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..self
        }
    }
}

/// Collects the commands of one section. The bounding rectangle is always
/// the first command.
pub(crate) struct Frame {
    bounds: Rect,
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn open(cursor: &DrawCursor, height: f32) -> Self {
        let bounds = cursor.bounds(height);
        Self {
            bounds,
            commands: vec![DrawCommand::rect(bounds)],
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = DrawCommand>) {
        self.commands.extend(commands);
    }

    pub fn rect(&mut self, area: Rect) {
        self.commands.push(DrawCommand::rect(area));
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.commands.push(DrawCommand::line(x1, y1, x2, y2));
    }

    /// Text ellipsized to `max_width`. Blank text draws nothing.
    pub fn text(&mut self, x: f32, y: f32, text: &str, size: f32, weight: FontWeight, max_width: f32) {
        let fitted = fit_text(text, max_width, size, weight);
        if !fitted.trim().is_empty() {
            self.commands.push(DrawCommand::text(x, y, fitted, size, weight));
        }
    }

    /// Text placed inside `area` with the given alignment and inner padding.
    pub fn aligned(&mut self, area: Rect, y: f32, text: &str, size: f32, weight: FontWeight, align: Align) {
        let inner = area.width - 2.0 * PAD;
        let fitted = fit_text(text, inner, size, weight);
        let width = measure(&fitted, size, weight);
        let x = match align {
            Align::Left => area.x + PAD,
            Align::Center => area.x + (area.width - width) / 2.0,
            Align::Right => area.right() - PAD - width,
        };
        if !fitted.trim().is_empty() {
            self.commands.push(DrawCommand::text(x, y, fitted, size, weight));
        }
    }

    /// Wrapped text starting at `y`, one line every `leading` points, cut to
    /// the lines that fit above `bottom`.
    pub fn paragraph(&mut self, area: Rect, y: f32, bottom: f32, text: &str, size: f32, leading: f32) {
        let room = ((bottom - y) / leading).floor().max(0.0) as usize;
        let lines = wrap_text(text, area.width - 2.0 * PAD, size, FontWeight::Regular, room);
        for (i, line) in lines.into_iter().enumerate() {
            let line_y = y + i as f32 * leading;
            self.commands
                .push(DrawCommand::text(area.x + PAD, line_y, line, size, FontWeight::Regular));
        }
    }

    /// The section title in the top strip.
    pub fn title(&mut self, title: &str) {
        let b = self.bounds;
        self.text(b.x + PAD, b.y + 2.5, title, TITLE_SIZE, FontWeight::Bold, b.width - 2.0 * PAD);
    }

    /// A bordered field with a small caption and its value near the bottom.
    pub fn cell(&mut self, area: Rect, cell: &Cell<'_>) {
        self.rect(area);
        self.text(
            area.x + PAD,
            area.y + 1.5,
            cell.label,
            LABEL_SIZE,
            FontWeight::Regular,
            area.width - 2.0 * PAD,
        );
        let value_y = area.bottom() - VALUE_SIZE - 2.0;
        self.aligned(area, value_y, &cell.value, VALUE_SIZE, cell.weight, cell.align);
    }

    /// Lays `cells` side by side across the full section width, sized by
    /// their shares.
    pub fn row(&mut self, y: f32, height: f32, cells: &[Cell<'_>]) {
        let b = self.bounds;
        self.row_within(b.x, b.width, y, height, cells);
    }

    pub fn row_within(&mut self, x: f32, width: f32, y: f32, height: f32, cells: &[Cell<'_>]) {
        let total: f32 = cells.iter().map(|c| c.share).sum();
        if total <= 0.0 {
            return;
        }
        let mut cell_x = x;
        for cell in cells {
            let w = width * cell.share / total;
            self.cell(Rect::new(cell_x, y, w, height), cell);
            cell_x += w;
        }
    }

    /// Closes the section: the next cursor sits `height` plus the section
    /// margin below the entry cursor.
    pub fn finish(self, entry: DrawCursor, height: f32) -> SectionOutput {
        SectionOutput {
            commands: self.commands,
            cursor: entry.advanced_by(height + SECTION_MARGIN),
        }
    }
}
