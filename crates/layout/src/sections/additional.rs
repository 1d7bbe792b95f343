use super::frame::{Cell, Frame, LABEL_SIZE, PAD, TITLE_HEIGHT};
use super::{RenderContext, SectionOutput};
use danfe_format::non_blank;
use danfe_types::{DrawCursor, Rect};

pub const HEIGHT: f32 = 60.0;
const INFO_SHARE: f32 = 0.7;
const TEXT_SIZE: f32 = 6.0;
const LEADING: f32 = 7.0;

/// Free-text notes of the taxpayer and the area reserved to the tax
/// authority. Text is wrapped and cut to the lines that fit.
pub fn render(ctx: &RenderContext<'_>, cursor: DrawCursor) -> SectionOutput {
    let record = ctx.record;
    let mut frame = Frame::open(&cursor, HEIGHT);
    frame.title("DADOS ADICIONAIS");
    let b = frame.bounds();

    let top = b.y + TITLE_HEIGHT;
    let body = HEIGHT - TITLE_HEIGHT;
    let info = Rect::new(b.x, top, b.width * INFO_SHARE, body);
    let fisco = Rect::new(info.right(), top, b.width - info.width, body);
    frame.cell(info, &Cell::new("INFORMAÇÕES COMPLEMENTARES", "", 1.0));
    frame.cell(fisco, &Cell::new("RESERVADO AO FISCO", "", 1.0));

    let text_top = top + LABEL_SIZE + 4.0;
    let bottom = b.bottom() - PAD;
    if let Some(notes) = non_blank(record.informacoes_complementares.as_deref()) {
        frame.paragraph(info, text_top, bottom, notes, TEXT_SIZE, LEADING);
    }
    if let Some(notes) = non_blank(record.informacoes_fisco.as_deref()) {
        frame.paragraph(fisco, text_top, bottom, notes, TEXT_SIZE, LEADING);
    }
    frame.finish(cursor, HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::sections::test_support::*;
    use crate::text::ELLIPSIS;

    #[test]
    fn long_notes_are_cut_to_the_box() {
        let config = LayoutConfig::default();
        let mut record = record();
        record.informacoes_complementares = Some("Inf. Contribuinte: pedido 4411 entregue em duas etapas. ".repeat(20));
        record.informacoes_fisco = Some("Isento".into());
        let output = render(&RenderContext::new(&record, &config), cursor());
        let texts = check_contract(&output, cursor(), HEIGHT);
        let note_lines: Vec<_> = texts.iter().filter(|t| t.starts_with("Inf.") || t.contains("etapas")).collect();
        // (60 - 11 - 9 - 3) / 7 leaves room for five lines
        assert!(note_lines.len() <= 5);
        assert!(texts.iter().any(|t| t.ends_with(ELLIPSIS)));
        assert!(texts.contains(&"Isento".to_string()));
    }

    #[test]
    fn no_notes_draws_only_captions() {
        let config = LayoutConfig::default();
        let mut record = record();
        record.informacoes_complementares = None;
        let output = render(&RenderContext::new(&record, &config), cursor());
        let texts = check_contract(&output, cursor(), HEIGHT);
        assert_eq!(
            texts,
            vec!["DADOS ADICIONAIS", "INFORMAÇÕES COMPLEMENTARES", "RESERVADO AO FISCO"]
        );
    }
}
