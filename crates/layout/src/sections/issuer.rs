//! Issuer identification, the DANFE title and the access key with its
//! barcode. This block also opens every continuation page.

use super::frame::{Align, Frame, PAD};
use super::{RenderContext, SectionOutput};
use crate::assembler::PAGE_TOTAL_TOKEN;
use crate::symbol;
use crate::text::wrap_text;
use danfe_format::{
    format_access_key, format_invoice_number, format_postal_code, format_series, or_placeholder,
};
use danfe_symbols::verification_payload;
use danfe_types::{DrawCommand, DrawCursor, FontWeight, Rect};

pub const HEIGHT: f32 = 100.0;
/// Side of the square reserved for the QR code.
pub const QR_SIZE: f32 = 72.0;

const ISSUER_SHARE: f32 = 0.40;
const TITLE_SHARE: f32 = 0.20;

pub fn render(ctx: &RenderContext<'_>, cursor: DrawCursor) -> SectionOutput {
    let record = ctx.record;
    let mut frame = Frame::open(&cursor, HEIGHT);
    let b = frame.bounds();

    let w1 = b.width * ISSUER_SHARE;
    let w2 = b.width * TITLE_SHARE;
    let issuer = Rect::new(b.x, b.y, w1, HEIGHT);
    let title = Rect::new(b.x + w1, b.y, w2, HEIGHT);
    let key = Rect::new(b.x + w1 + w2, b.y, b.width - w1 - w2, HEIGHT);

    // Issuer
    frame.rect(issuer);
    let qr_area = Rect::new(issuer.right() - QR_SIZE - 4.0, b.y + 16.0, QR_SIZE, QR_SIZE);
    let text_width = w1 - QR_SIZE - 4.0 - 2.0 * PAD;
    let party = &record.emitente;
    frame.text(b.x + PAD, b.y + 3.0, "IDENTIFICAÇÃO DO EMITENTE", 5.5, FontWeight::Bold, w1 - 2.0 * PAD);
    let name = or_placeholder(party.razao_social.as_deref()).to_uppercase();
    for (i, line) in wrap_text(&name, text_width, 8.5, FontWeight::Bold, 2).into_iter().enumerate() {
        frame.push(DrawCommand::text(b.x + PAD, b.y + 14.0 + i as f32 * 10.0, line, 8.5, FontWeight::Bold));
    }
    let address_lines = [
        or_placeholder(party.endereco.as_deref()),
        format!(
            "{} - CEP {}",
            or_placeholder(party.bairro.as_deref()),
            format_postal_code(party.cep.as_deref())
        ),
        format!(
            "{} - {}",
            or_placeholder(party.cidade.as_deref()),
            or_placeholder(party.uf.as_deref())
        ),
        format!("FONE/FAX: {}", or_placeholder(party.telefone.as_deref())),
    ];
    for (i, line) in address_lines.iter().enumerate() {
        frame.text(b.x + PAD, b.y + 40.0 + i as f32 * 10.0, line, 6.5, FontWeight::Regular, text_width);
    }
    let payload = verification_payload(&ctx.config.verification_base_url, record.chave_acesso.as_str());
    frame.extend(symbol::qr_code(qr_area, &payload, ctx.config.qr_error_correction));

    // Title
    frame.rect(title);
    frame.aligned(title, b.y + 4.0, "DANFE", 14.0, FontWeight::Bold, Align::Center);
    frame.aligned(title, b.y + 21.0, "DOCUMENTO AUXILIAR DA", 5.5, FontWeight::Regular, Align::Center);
    frame.aligned(title, b.y + 28.0, "NOTA FISCAL ELETRÔNICA", 5.5, FontWeight::Regular, Align::Center);
    frame.text(title.x + PAD, b.y + 40.0, "0 - ENTRADA", 6.5, FontWeight::Regular, w2 - 24.0);
    frame.text(title.x + PAD, b.y + 48.0, "1 - SAÍDA", 6.5, FontWeight::Regular, w2 - 24.0);
    let checkbox = Rect::new(title.right() - PAD - 14.0, b.y + 40.0, 14.0, 14.0);
    frame.rect(checkbox);
    frame.aligned(checkbox, b.y + 42.5, record.operation_code(), 10.0, FontWeight::Bold, Align::Center);
    let number = format!("Nº {}", format_invoice_number(record.numero.as_deref()));
    frame.aligned(title, b.y + 62.0, &number, 7.5, FontWeight::Bold, Align::Center);
    let series = format!("SÉRIE {}", format_series(record.serie.as_deref()));
    frame.aligned(title, b.y + 72.0, &series, 7.5, FontWeight::Bold, Align::Center);
    let sheet = format!("FOLHA {}/{PAGE_TOTAL_TOKEN}", cursor.page_index + 1);
    frame.push(DrawCommand::text(title.x + PAD, b.y + 84.0, sheet, 7.5, FontWeight::Regular));

    // Access key
    frame.rect(key);
    let barcode_area = Rect::new(key.x + 6.0, b.y + 4.0, key.width - 12.0, 34.0);
    frame.extend(symbol::barcode(barcode_area, record.chave_acesso.as_str()));
    frame.line(key.x, b.y + 42.0, key.right(), b.y + 42.0);
    frame.text(key.x + PAD, b.y + 44.0, "CHAVE DE ACESSO", 5.5, FontWeight::Bold, key.width - 2.0 * PAD);
    let grouped = format_access_key(record.chave_acesso.as_str());
    frame.aligned(key, b.y + 53.0, &grouped, 7.0, FontWeight::Bold, Align::Center);
    frame.line(key.x, b.y + 64.0, key.right(), b.y + 64.0);
    frame.aligned(key, b.y + 70.0, "Consulta de autenticidade no portal nacional da NF-e", 5.5, FontWeight::Regular, Align::Center);
    frame.aligned(
        key,
        b.y + 78.0,
        "www.nfe.fazenda.gov.br/portal ou no site da Sefaz Autorizadora",
        5.5,
        FontWeight::Regular,
        Align::Center,
    );

    frame.finish(cursor, HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::sections::test_support::*;
    use danfe_invoice::InvoiceRecord;
    use danfe_types::SymbolKind;

    fn symbols(output: &SectionOutput) -> Vec<(&SymbolKind, &str)> {
        output
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Symbol { kind, payload, .. } => Some((kind, payload.as_str())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn embeds_barcode_and_qr() {
        let config = LayoutConfig::default();
        let record = record();
        let output = render(&RenderContext::new(&record, &config), cursor());
        check_contract(&output, cursor(), HEIGHT);

        let symbols = symbols(&output);
        assert_eq!(symbols.len(), 2);
        assert!(symbols.iter().any(|(kind, payload)| {
            matches!(kind, SymbolKind::Barcode { .. }) && *payload == KEY
        }));
        let expected = format!("{}?chave={KEY}", config.verification_base_url);
        assert!(symbols
            .iter()
            .any(|(kind, payload)| matches!(kind, SymbolKind::Qr { .. }) && *payload == expected));
    }

    #[test]
    fn qr_uses_fixed_square() {
        let config = LayoutConfig::default();
        let record = record();
        let output = render(&RenderContext::new(&record, &config), cursor());
        let qr = output
            .commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Symbol { kind: SymbolKind::Qr { .. }, .. }))
            .and_then(DrawCommand::area)
            .unwrap();
        assert_eq!((qr.width, qr.height), (QR_SIZE, QR_SIZE));
    }

    #[test]
    fn sheet_number_follows_page_index() {
        let config = LayoutConfig::default();
        let record = record();
        let on_third = cursor().on_next_page(10.0).on_next_page(10.0);
        let output = render(&RenderContext::new(&record, &config), on_third);
        let texts = check_contract(&output, on_third, HEIGHT);
        assert!(texts.contains(&format!("FOLHA 3/{PAGE_TOTAL_TOKEN}")));
    }

    #[test]
    fn missing_key_prints_zeros() {
        let config = LayoutConfig::default();
        let record = InvoiceRecord::default();
        let output = render(&RenderContext::new(&record, &config), cursor());
        let texts = check_contract(&output, cursor(), HEIGHT);
        assert!(texts.contains(&format_access_key(&"0".repeat(44))));
        assert!(texts.contains(&"1".to_string()));
    }
}
