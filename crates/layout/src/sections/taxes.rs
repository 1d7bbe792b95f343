use super::frame::{Cell, Frame, TITLE_HEIGHT};
use super::{RenderContext, SectionOutput};
use danfe_format::format_currency_grouped as money;
use danfe_types::DrawCursor;

pub const HEIGHT: f32 = 52.0;
const ROW_HEIGHT: f32 = 20.0;

/// Tax bases and totals. Missing amounts print `0,00`; the products total is
/// derived from the lines when the record does not state it.
pub fn render(ctx: &RenderContext<'_>, cursor: DrawCursor) -> SectionOutput {
    let record = ctx.record;
    let t = &record.totais;
    let mut frame = Frame::open(&cursor, HEIGHT);
    frame.title("CÁLCULO DO IMPOSTO");

    let top = cursor.y + TITLE_HEIGHT;
    frame.row(
        top,
        ROW_HEIGHT,
        &[
            Cell::amount("BASE DE CÁLC. DO ICMS", money(t.base_calculo_icms), 1.0),
            Cell::amount("VALOR DO ICMS", money(t.valor_icms), 1.0),
            Cell::amount("BASE DE CÁLC. ICMS S.T.", money(t.base_calculo_icms_st), 1.0),
            Cell::amount("VALOR DO ICMS SUBST.", money(t.valor_icms_st), 1.0),
            Cell::amount("V. IMP. IMPORTAÇÃO", money(t.valor_importacao), 1.0),
            Cell::amount("V. TOT. TRIB.", money(t.valor_total_tributos), 1.0),
            Cell::amount("V. TOTAL PRODUTOS", money(record.products_total()), 1.0),
        ],
    );
    frame.row(
        top + ROW_HEIGHT,
        ROW_HEIGHT,
        &[
            Cell::amount("VALOR DO FRETE", money(t.valor_frete), 1.0),
            Cell::amount("VALOR DO SEGURO", money(t.valor_seguro), 1.0),
            Cell::amount("DESCONTO", money(t.valor_desconto), 1.0),
            Cell::amount("OUTRAS DESPESAS", money(t.outras_despesas), 1.0),
            Cell::amount("VALOR TOTAL IPI", money(t.valor_total_ipi), 1.0),
            Cell::amount("V. TOTAL DA NOTA", money(t.valor_total_nota), 2.0).bold(),
        ],
    );
    frame.finish(cursor, HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::sections::test_support::*;
    use danfe_types::{DrawCommand, FontWeight};

    #[test]
    fn prints_invoice_total_in_bold() {
        let config = LayoutConfig::default();
        let record = record();
        let output = render(&RenderContext::new(&record, &config), cursor());
        check_contract(&output, cursor(), HEIGHT);
        let bold_totals: Vec<_> = output
            .commands
            .iter()
            .filter(|c| {
                matches!(c, DrawCommand::Text { text, weight: FontWeight::Bold, .. } if text == "100,00")
            })
            .collect();
        assert_eq!(bold_totals.len(), 1);
    }

    #[test]
    fn derives_products_total_from_lines() {
        let config = LayoutConfig::default();
        let record = record();
        let output = render(&RenderContext::new(&record, &config), cursor());
        let texts = check_contract(&output, cursor(), HEIGHT);
        // invoice total and derived products total
        assert_eq!(texts.iter().filter(|t| *t == "100,00").count(), 2);
    }

    #[test]
    fn missing_invoice_total_is_zero() {
        let config = LayoutConfig::default();
        let mut record = record();
        record.totais.valor_total_nota = None;
        record.produtos.clear();
        let output = render(&RenderContext::new(&record, &config), cursor());
        let texts = check_contract(&output, cursor(), HEIGHT);
        assert_eq!(texts.iter().filter(|t| *t == "0,00").count(), 13);
    }
}
