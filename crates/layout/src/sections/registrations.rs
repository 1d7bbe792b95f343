use super::frame::{Cell, Frame};
use super::{RenderContext, SectionOutput};
use danfe_format::{format_party_document, or_placeholder};
use danfe_types::DrawCursor;

pub const HEIGHT: f32 = 25.0;

/// State and municipal registrations of the issuer.
pub fn render(ctx: &RenderContext<'_>, cursor: DrawCursor) -> SectionOutput {
    let party = &ctx.record.emitente;
    let mut frame = Frame::open(&cursor, HEIGHT);
    frame.row(
        cursor.y,
        HEIGHT,
        &[
            Cell::new(
                "INSCRIÇÃO ESTADUAL",
                or_placeholder(party.inscricao_estadual.as_deref()),
                1.0,
            ),
            Cell::new(
                "INSCRIÇÃO MUNICIPAL",
                or_placeholder(party.inscricao_municipal.as_deref()),
                1.0,
            ),
            Cell::new(
                "INSCRIÇÃO ESTADUAL DO SUBST. TRIBUT.",
                or_placeholder(party.inscricao_estadual_st.as_deref()),
                1.0,
            ),
            Cell::new(
                "CNPJ / CPF",
                format_party_document(party.documento_fiscal.as_deref()),
                1.0,
            ),
        ],
    );
    frame.finish(cursor, HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::sections::test_support::*;

    #[test]
    fn masks_issuer_cnpj() {
        let config = LayoutConfig::default();
        let record = record();
        let output = render(&RenderContext::new(&record, &config), cursor());
        let texts = check_contract(&output, cursor(), HEIGHT);
        assert!(texts.contains(&"13.516.247/0001-07".to_string()));
        assert!(texts.contains(&"123456789".to_string()));
        assert_eq!(texts.iter().filter(|t| *t == "N/I").count(), 2);
    }
}
