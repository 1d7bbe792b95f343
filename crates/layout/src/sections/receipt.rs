use super::frame::{Align, Cell, Frame, PAD};
use super::{RenderContext, SectionOutput};
use danfe_format::{format_currency_grouped, format_date, format_invoice_number, format_series, or_placeholder};
use danfe_types::{DrawCursor, FontWeight, Rect};

pub const HEIGHT: f32 = 35.0;
/// Width of the NF-e number box on the right.
const NUMBER_BOX_WIDTH: f32 = 90.0;

/// The detachable receipt stub at the top of the first page.
pub fn render(ctx: &RenderContext<'_>, cursor: DrawCursor) -> SectionOutput {
    let record = ctx.record;
    let mut frame = Frame::open(&cursor, HEIGHT);
    let b = frame.bounds();
    let stub_width = b.width - NUMBER_BOX_WIDTH;

    let statement = format!(
        "RECEBEMOS DE {} OS PRODUTOS E/OU SERVIÇOS CONSTANTES DA NOTA FISCAL ELETRÔNICA INDICADA AO LADO. \
         EMISSÃO: {} VALOR TOTAL: R$ {} DESTINATÁRIO: {}",
        or_placeholder(record.emitente.razao_social.as_deref()).to_uppercase(),
        format_date(record.data_emissao.as_deref()),
        format_currency_grouped(record.totais.valor_total_nota),
        or_placeholder(record.destinatario.razao_social.as_deref()),
    );
    frame.paragraph(Rect::new(b.x, b.y, stub_width, b.height), b.y + 2.5, b.y + 17.0, &statement, 6.0, 7.0);

    frame.row_within(
        b.x,
        stub_width,
        b.y + 17.0,
        HEIGHT - 17.0,
        &[
            Cell::new("DATA DE RECEBIMENTO", "", 0.3),
            Cell::new("IDENTIFICAÇÃO E ASSINATURA DO RECEBEDOR", "", 0.7),
        ],
    );

    let number_box = Rect::new(b.x + stub_width, b.y, NUMBER_BOX_WIDTH, HEIGHT);
    frame.rect(number_box);
    frame.aligned(number_box, b.y + 3.0, "NF-e", 10.0, FontWeight::Bold, Align::Center);
    let number = format!("Nº {}", format_invoice_number(record.numero.as_deref()));
    frame.aligned(number_box, b.y + 15.0, &number, 8.0, FontWeight::Bold, Align::Center);
    let series = format!("SÉRIE {}", format_series(record.serie.as_deref()));
    frame.text(number_box.x + PAD, b.y + 25.0, &series, 8.0, FontWeight::Bold, NUMBER_BOX_WIDTH - 2.0 * PAD);

    frame.finish(cursor, HEIGHT)
}
