use super::frame::{Frame, PAD, TITLE_HEIGHT};
use super::{RenderContext, SectionOutput};
use danfe_format::{PLACEHOLDER, format_currency_grouped, format_date, or_placeholder};
use danfe_types::{DrawCursor, FontWeight, Rect};

pub const HEIGHT: f32 = 40.0;
const SLOT_WIDTH: f32 = 95.0;
const LINE_SIZE: f32 = 6.0;

/// The payment schedule, one slot per installment. Installments that do not
/// fit are counted in the last slot.
pub fn render(ctx: &RenderContext<'_>, cursor: DrawCursor) -> SectionOutput {
    let duplicates = &ctx.record.duplicatas;
    let mut frame = Frame::open(&cursor, HEIGHT);
    frame.title("FATURA / DUPLICATA");
    let b = frame.bounds();
    let top = b.y + TITLE_HEIGHT;

    if duplicates.is_empty() {
        frame.text(b.x + PAD, top + 4.0, PLACEHOLDER, 7.0, FontWeight::Regular, b.width);
        return frame.finish(cursor, HEIGHT);
    }

    let slots = ((b.width / SLOT_WIDTH).floor() as usize).max(1);
    let overflow = duplicates.len() > slots;
    let shown = if overflow { slots - 1 } else { duplicates.len() };
    let inner = SLOT_WIDTH - 2.0 * PAD;

    for (i, duplicate) in duplicates.iter().take(shown).enumerate() {
        let slot = Rect::new(b.x + i as f32 * SLOT_WIDTH, top, SLOT_WIDTH, HEIGHT - TITLE_HEIGHT);
        let lines = [
            format!("Núm. {}", or_placeholder(duplicate.numero.as_deref())),
            format!("Venc. {}", format_date(duplicate.vencimento.as_deref())),
            format!("Valor R$ {}", format_currency_grouped(duplicate.valor)),
        ];
        for (row, line) in lines.iter().enumerate() {
            frame.text(slot.x + PAD, slot.y + 2.0 + row as f32 * 8.5, line, LINE_SIZE, FontWeight::Regular, inner);
        }
    }
    if overflow {
        let rest = duplicates.len() - shown;
        let x = b.x + shown as f32 * SLOT_WIDTH;
        frame.text(x + PAD, top + 2.0, &format!("+ {rest} DUPLICATA(S)"), LINE_SIZE, FontWeight::Bold, inner);
    }
    frame.finish(cursor, HEIGHT)
}
