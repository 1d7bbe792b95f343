use super::frame::{Align, Frame, PAD};
use super::{RenderContext, SectionOutput};
use crate::text::wrap_text;
use danfe_format::{format_currency_grouped, format_decimal, format_quantity, or_placeholder};
use danfe_invoice::LineItem;
use danfe_types::{DrawCommand, DrawCursor, FontWeight, Rect};

/// Title strip plus the column header row.
pub const HEADER_HEIGHT: f32 = 26.0;
pub const ROW_HEIGHT: f32 = 11.0;
/// Narrowest content width the table can be scaled to.
pub const MIN_TABLE_WIDTH: f32 = 300.0;

const TITLE_STRIP: f32 = 10.0;
const HEADER_SIZE: f32 = 5.0;
const CELL_SIZE: f32 = 6.0;

struct Column {
    label: &'static str,
    width: f32,
    align: Align,
}

const fn column(label: &'static str, width: f32, align: Align) -> Column {
    Column { label, width, align }
}

/// Column widths at the reference content width of 575 points.
const COLUMNS: [Column; 11] = [
    column("CÓDIGO PRODUTO", 55.0, Align::Left),
    column("DESCRIÇÃO DO PRODUTO / SERVIÇO", 150.0, Align::Left),
    column("NCM/SH", 45.0, Align::Left),
    column("O/CST", 30.0, Align::Left),
    column("CFOP", 30.0, Align::Left),
    column("UN", 25.0, Align::Left),
    column("QUANT.", 45.0, Align::Right),
    column("VALOR UNIT.", 50.0, Align::Right),
    column("VALOR TOTAL", 50.0, Align::Right),
    column("B.CÁLC ICMS", 50.0, Align::Right),
    column("VALOR ICMS", 45.0, Align::Right),
];

/// Height of a table with `rows` rows.
pub fn table_height(rows: usize) -> f32 {
    HEADER_HEIGHT + rows as f32 * ROW_HEIGHT
}

fn cells(item: &LineItem) -> [String; 11] {
    let text = |value: &Option<String>| or_placeholder(value.as_deref());
    [
        text(&item.codigo),
        text(&item.descricao),
        text(&item.ncm),
        text(&item.cst),
        text(&item.cfop),
        text(&item.unidade),
        format_quantity(item.quantidade),
        format_decimal(item.valor_unitario, 4),
        format_currency_grouped(item.line_total()),
        format_currency_grouped(item.base_calculo_icms),
        format_currency_grouped(item.valor_icms),
    ]
}

/// Draws the table header and one row per item of `items`, in order.
///
/// The caller decides how many items go on a page; the height is
/// `HEADER_HEIGHT + items.len() * ROW_HEIGHT`.
pub fn render(_ctx: &RenderContext<'_>, cursor: DrawCursor, items: &[LineItem]) -> SectionOutput {
    let height = table_height(items.len());
    let mut frame = Frame::open(&cursor, height);
    frame.title("DADOS DOS PRODUTOS / SERVIÇOS");
    let b = frame.bounds();

    let reference: f32 = COLUMNS.iter().map(|c| c.width).sum();
    let scale = b.width / reference;
    let header_top = b.y + TITLE_STRIP;
    let rows_top = b.y + HEADER_HEIGHT;

    frame.line(b.x, header_top, b.right(), header_top);
    frame.line(b.x, rows_top, b.right(), rows_top);

    let rows: Vec<[String; 11]> = items.iter().map(cells).collect();
    let mut x = b.x;
    for (i, col) in COLUMNS.iter().enumerate() {
        let w = col.width * scale;
        if i > 0 {
            frame.line(x, header_top, x, b.bottom());
        }
        let label_lines = wrap_text(col.label, w - 2.0 * PAD, HEADER_SIZE, FontWeight::Bold, 2);
        for (n, line) in label_lines.into_iter().enumerate() {
            frame.push(DrawCommand::text(
                x + PAD,
                header_top + 2.0 + n as f32 * 6.5,
                line,
                HEADER_SIZE,
                FontWeight::Bold,
            ));
        }
        for (row, values) in rows.iter().enumerate() {
            let cell = Rect::new(x, rows_top + row as f32 * ROW_HEIGHT, w, ROW_HEIGHT);
            frame.aligned(cell, cell.y + 2.5, &values[i], CELL_SIZE, FontWeight::Regular, col.align);
        }
        x += w;
    }

    frame.finish(cursor, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::sections::test_support::*;
    use rust_decimal::Decimal;

    #[test]
    fn one_row_with_derived_total() {
        let config = LayoutConfig::default();
        let record = record();
        let output = render(&RenderContext::new(&record, &config), cursor(), &record.produtos);
        let texts = check_contract(&output, cursor(), table_height(1));
        assert!(texts.contains(&"100,00".to_string()));
        assert!(texts.contains(&"1,0000".to_string()));
        assert!(texts.contains(&"100,0000".to_string()));
        assert!(texts.contains(&"00362".to_string()));
    }

    #[test]
    fn empty_slice_draws_header_only() {
        let config = LayoutConfig::default();
        let record = record();
        let output = render(&RenderContext::new(&record, &config), cursor(), &[]);
        let texts = check_contract(&output, cursor(), HEADER_HEIGHT);
        assert!(texts.iter().any(|t| t == "NCM/SH"));
        assert!(!texts.iter().any(|t| t == "00362"));
    }

    #[test]
    fn height_grows_with_rows() {
        let config = LayoutConfig::default();
        let record = record();
        let items: Vec<LineItem> = (0..7)
            .map(|i| LineItem {
                codigo: Some(format!("P{i}")),
                valor_total: Some(Decimal::new(i, 0)),
                ..Default::default()
            })
            .collect();
        let output = render(&RenderContext::new(&record, &config), cursor(), &items);
        let texts = check_contract(&output, cursor(), HEADER_HEIGHT + 7.0 * ROW_HEIGHT);
        let codes: Vec<_> = texts.iter().filter(|t| t.len() == 2 && t.starts_with('P')).cloned().collect();
        assert_eq!(codes, (0..7).map(|i| format!("P{i}")).collect::<Vec<_>>());
    }

    #[test]
    fn long_descriptions_are_ellipsized() {
        let config = LayoutConfig::default();
        let record = record();
        let items = vec![LineItem {
            descricao: Some("CILINDRO B MF ANT 191/5/6101/1602 ".repeat(5)),
            ..Default::default()
        }];
        let output = render(&RenderContext::new(&record, &config), cursor(), &items);
        let texts = check_contract(&output, cursor(), table_height(1));
        assert!(texts.iter().any(|t| t.starts_with("CILINDRO") && t.ends_with("...")));
    }
}
