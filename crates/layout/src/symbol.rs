//! The boundary between the symbol encoders and the layout.
//!
//! Encoding failures stop here: the reserved region gets an error glyph (its
//! outline, both diagonals and a caption) and the rest of the document is
//! drawn as usual.

use crate::text::fit_text;
use danfe_symbols::{EncodingError, ErrorCorrection, code128, qr};
use danfe_types::{DrawCommand, FontWeight, Rect, SymbolKind};
use log::warn;

const GLYPH_LABEL_SIZE: f32 = 5.0;

/// The Code 128 barcode of `raw`, sanitized to digit pairs first. The bars
/// are narrowed so a quiet zone stays blank on both sides inside `area`.
pub fn barcode(area: Rect, raw: &str) -> Vec<DrawCommand> {
    let digits = code128::sanitize(raw);
    match code128::encode_digits(&digits) {
        Ok(code) => {
            let bars = without_quiet_zone(area, code.total_modules());
            let kind = SymbolKind::Barcode {
                modules: code.modules(),
            };
            vec![DrawCommand::symbol(bars, kind, digits)]
        }
        Err(err) => symbol_or_glyph(area, Err(err), "CÓDIGO DE BARRAS INDISPONÍVEL"),
    }
}

fn without_quiet_zone(area: Rect, total_modules: usize) -> Rect {
    let span = (total_modules + 2 * code128::QUIET_ZONE_MODULES) as f32;
    let margin = area.width / span * code128::QUIET_ZONE_MODULES as f32;
    Rect::new(area.x + margin, area.y, area.width - 2.0 * margin, area.height)
}

/// The QR matrix of `payload`.
pub fn qr_code(area: Rect, payload: &str, level: ErrorCorrection) -> Vec<DrawCommand> {
    let encoded = qr::encode_matrix(payload, level)
        .map(|matrix| (SymbolKind::Qr { matrix }, payload.to_string()));
    symbol_or_glyph(area, encoded, "QR CODE INDISPONÍVEL")
}

/// A `Symbol` command for a successful encoding, the error glyph otherwise.
pub fn symbol_or_glyph(
    area: Rect,
    encoded: Result<(SymbolKind, String), EncodingError>,
    label: &str,
) -> Vec<DrawCommand> {
    match encoded {
        Ok((kind, payload)) => vec![DrawCommand::symbol(area, kind, payload)],
        Err(err) => {
            warn!("Drawing error glyph instead of symbol: {err}");
            error_glyph(area, label)
        }
    }
}

pub fn error_glyph(area: Rect, label: &str) -> Vec<DrawCommand> {
    let mut commands = vec![
        DrawCommand::rect(area),
        DrawCommand::line(area.x, area.y, area.right(), area.bottom()),
        DrawCommand::line(area.x, area.bottom(), area.right(), area.y),
    ];
    let caption = fit_text(label, area.width - 2.0, GLYPH_LABEL_SIZE, FontWeight::Bold);
    if !caption.is_empty() {
        let y = area.y + (area.height - GLYPH_LABEL_SIZE) / 2.0;
        commands.push(DrawCommand::text(area.x + 1.0, y, caption, GLYPH_LABEL_SIZE, FontWeight::Bold));
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use danfe_symbols::code128::decode;

    const KEY: &str = "35250513516247000107550010000113401146202508";

    fn area() -> Rect {
        Rect::new(300.0, 50.0, 200.0, 34.0)
    }

    #[test]
    fn barcode_carries_decodable_modules() {
        let commands = barcode(area(), KEY);
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            DrawCommand::Symbol {
                kind: SymbolKind::Barcode { modules },
                payload,
                ..
            } => {
                assert_eq!(payload, KEY);
                assert_eq!(decode(modules).unwrap(), KEY);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn barcode_leaves_quiet_zone_on_both_sides() {
        let code = code128::encode_digits(KEY).unwrap();
        let commands = barcode(area(), KEY);
        let bars = commands[0].area().unwrap();
        let module_width = bars.width / code.total_modules() as f32;
        let quiet = code128::QUIET_ZONE_MODULES as f32 * module_width;
        assert!(area().contains(&bars));
        assert!(bars.x - area().x >= quiet - 1e-3);
        assert!(area().right() - bars.right() >= quiet - 1e-3);
    }

    #[test]
    fn failed_encoding_draws_glyph_in_region() {
        let commands = symbol_or_glyph(area(), Err(EncodingError::OddLength(3)), "INDISPONÍVEL");
        assert_eq!(commands[0], DrawCommand::rect(area()));
        assert_eq!(commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count(), 2);
        assert!(commands.iter().any(|c| c.as_text() == Some("INDISPONÍVEL")));
        for command in &commands {
            if let Some(r) = command.area() {
                assert!(area().contains(&r));
            }
        }
    }

    #[test]
    fn oversized_qr_payload_falls_back() {
        let payload = "9".repeat(8000);
        let commands = qr_code(Rect::new(0.0, 0.0, 72.0, 72.0), &payload, ErrorCorrection::H);
        assert!(commands.iter().all(|c| !matches!(c, DrawCommand::Symbol { .. })));
        assert!(commands.len() >= 3);
    }
}
