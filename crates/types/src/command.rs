use crate::geometry::Rect;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// One element of a linear barcode: a bar or a space, `width` modules wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarModule {
    pub bar: bool,
    pub width: u8,
}

/// A square grid of 2D-code modules, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleMatrix {
    size: usize,
    dark: Vec<bool>,
}

impl ModuleMatrix {
    /// Builds a matrix from row-major module colors. Missing cells are light
    /// and extra cells are dropped, so the grid is always `size * size`.
    pub fn new(size: usize, mut dark: Vec<bool>) -> Self {
        dark.resize(size * size, false);
        Self { size, dark }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.dark[y * self.size + x]
    }

    /// Iterates `(x, y)` of every dark module in row-major order.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.dark
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(move |(i, _)| (i % size, i / size))
    }
}

/// The encoded form of an embedded symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SymbolKind {
    Barcode { modules: Vec<BarModule> },
    Qr { matrix: ModuleMatrix },
}

/// A backend-agnostic drawing instruction.
///
/// Coordinates are points from the top-left corner of the page with `y`
/// growing downward. For `Text`, `y` is the top of the line box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        weight: FontWeight,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Symbol {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        kind: SymbolKind,
        payload: String,
    },
}

impl DrawCommand {
    pub fn rect(r: Rect) -> Self {
        DrawCommand::Rect {
            x: r.x,
            y: r.y,
            w: r.width,
            h: r.height,
        }
    }

    pub fn text(x: f32, y: f32, text: impl Into<String>, size: f32, weight: FontWeight) -> Self {
        DrawCommand::Text {
            x,
            y,
            text: text.into(),
            size,
            weight,
        }
    }

    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        DrawCommand::Line { x1, y1, x2, y2 }
    }

    pub fn symbol(r: Rect, kind: SymbolKind, payload: impl Into<String>) -> Self {
        DrawCommand::Symbol {
            x: r.x,
            y: r.y,
            w: r.width,
            h: r.height,
            kind,
            payload: payload.into(),
        }
    }

    /// The text of a `Text` command.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The box covered by a `Rect` or `Symbol` command.
    pub fn area(&self) -> Option<Rect> {
        match self {
            DrawCommand::Rect { x, y, w, h } | DrawCommand::Symbol { x, y, w, h, .. } => {
                Some(Rect::new(*x, *y, *w, *h))
            }
            _ => None,
        }
    }
}

/// One output page: its physical size and the commands drawn on it, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl Page {
    pub fn new(width: f32, height: f32, commands: Vec<DrawCommand>) -> Self {
        Self {
            width,
            height,
            commands,
        }
    }

    /// All text runs on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::as_text)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}
