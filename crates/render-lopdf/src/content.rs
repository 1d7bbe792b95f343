//! Translation of draw commands into PDF content-stream operators.

use danfe_render_core::RenderError;
use danfe_render_core::utils::{baseline, flip_y, font_for};
use danfe_types::{BarModule, DrawCommand, FontWeight, ModuleMatrix, Page, SymbolKind};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

const STROKE_WIDTH: f32 = 0.5;

/// Accumulates the operators of one page, tracking the current font so
/// repeated `Tf` operators are skipped.
pub struct PageContext {
    page_height: f32,
    content: Content,
    font: Option<(FontWeight, f32)>,
}

impl PageContext {
    pub fn new(page_height: f32) -> Self {
        let mut content = Content { operations: vec![] };
        content
            .operations
            .push(Operation::new("w", vec![STROKE_WIDTH.into()]));
        Self {
            page_height,
            content,
            font: None,
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    pub fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Rect { x, y, w, h } => {
                self.push_rect(*x, *y, *w, *h);
                self.push("S", vec![]);
            }
            DrawCommand::Line { x1, y1, x2, y2 } => {
                self.push("m", vec![(*x1).into(), flip_y(*y1, self.page_height).into()]);
                self.push("l", vec![(*x2).into(), flip_y(*y2, self.page_height).into()]);
                self.push("S", vec![]);
            }
            DrawCommand::Text {
                x,
                y,
                text,
                size,
                weight,
            } => self.draw_text(*x, *y, text, *size, *weight),
            DrawCommand::Symbol {
                x, y, w, h, kind, ..
            } => match kind {
                SymbolKind::Barcode { modules } => self.draw_bars(*x, *y, *w, *h, modules),
                SymbolKind::Qr { matrix } => self.draw_matrix(*x, *y, *w, *h, matrix),
            },
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    /// `re` for a box given in layout coordinates.
    fn push_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let pdf_y = self.page_height - (y + h);
        self.push("re", vec![x.into(), pdf_y.into(), w.into(), h.into()]);
    }

    fn set_font(&mut self, weight: FontWeight, size: f32) {
        if self.font != Some((weight, size)) {
            let (name, _) = font_for(weight);
            self.push("Tf", vec![Object::Name(name.as_bytes().to_vec()), size.into()]);
            self.font = Some((weight, size));
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, size: f32, weight: FontWeight) {
        if text.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font(weight, size);
        let pdf_y = flip_y(baseline(y, size), self.page_height);
        self.push("Td", vec![x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn draw_bars(&mut self, x: f32, y: f32, w: f32, h: f32, modules: &[BarModule]) {
        let total: u32 = modules.iter().map(|m| u32::from(m.width)).sum();
        if total == 0 {
            return;
        }
        let module_width = w / total as f32;
        let mut offset = 0u32;
        for module in modules {
            if module.bar {
                let bar_x = x + offset as f32 * module_width;
                self.push_rect(bar_x, y, f32::from(module.width) * module_width, h);
            }
            offset += u32::from(module.width);
        }
        self.push("f", vec![]);
    }

    fn draw_matrix(&mut self, x: f32, y: f32, w: f32, h: f32, matrix: &ModuleMatrix) {
        if matrix.size() == 0 {
            return;
        }
        let cell = w.min(h) / matrix.size() as f32;
        for (col, row) in matrix.dark_modules() {
            self.push_rect(x + col as f32 * cell, y + row as f32 * cell, cell, cell);
        }
        self.push("f", vec![]);
    }
}

/// Encodes a page into the bytes of its content stream.
pub fn encode_page(page: &Page) -> Result<Vec<u8>, RenderError> {
    let mut ctx = PageContext::new(page.height);
    for command in &page.commands {
        ctx.draw(command);
    }
    Ok(ctx.finish().encode()?)
}

/// Latin-1 characters map onto WinAnsi; anything beyond becomes `?`.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}
