use super::frame::{Cell, Frame};
use super::{RenderContext, SectionOutput};
use danfe_format::{PLACEHOLDER, format_date_time, non_blank, or_placeholder};
use danfe_invoice::InvoiceRecord;
use danfe_types::DrawCursor;

pub const HEIGHT: f32 = 25.0;

/// `<protocol> - <authorization date>`, taken from the record as given.
pub fn authorization_text(record: &InvoiceRecord) -> String {
    let Some(protocol) = non_blank(record.protocolo_autorizacao.as_deref()) else {
        return PLACEHOLDER.to_string();
    };
    match non_blank(record.data_autorizacao.as_deref()) {
        Some(at) => format!("{protocol} - {}", format_date_time(Some(at))),
        None => protocol.to_string(),
    }
}

pub fn render(ctx: &RenderContext<'_>, cursor: DrawCursor) -> SectionOutput {
    let record = ctx.record;
    let mut frame = Frame::open(&cursor, HEIGHT);
    frame.row(
        cursor.y,
        HEIGHT,
        &[
            Cell::new(
                "NATUREZA DA OPERAÇÃO",
                or_placeholder(record.natureza_operacao.as_deref()),
                0.6,
            )
            .bold(),
            Cell::new("PROTOCOLO DE AUTORIZAÇÃO DE USO", authorization_text(record), 0.4),
        ],
    );
    frame.finish(cursor, HEIGHT)
}
