use super::frame::{Cell, Frame, TITLE_HEIGHT};
use super::{RenderContext, SectionOutput};
use danfe_format::{format_date, format_party_document, format_postal_code, format_time, or_placeholder};
use danfe_types::DrawCursor;

pub const HEIGHT: f32 = 80.0;
const ROW_HEIGHT: f32 = 22.0;

pub fn render(ctx: &RenderContext<'_>, cursor: DrawCursor) -> SectionOutput {
    let record = ctx.record;
    let party = &record.destinatario;
    let mut frame = Frame::open(&cursor, HEIGHT);
    frame.title("DESTINATÁRIO / REMETENTE");

    let top = cursor.y + TITLE_HEIGHT;
    frame.row(
        top,
        ROW_HEIGHT,
        &[
            Cell::new("NOME / RAZÃO SOCIAL", or_placeholder(party.razao_social.as_deref()), 0.55),
            Cell::new("CNPJ / CPF", format_party_document(party.documento_fiscal.as_deref()), 0.25),
            Cell::new("DATA DA EMISSÃO", format_date(record.data_emissao.as_deref()), 0.20),
        ],
    );
    frame.row(
        top + ROW_HEIGHT,
        ROW_HEIGHT,
        &[
            Cell::new("ENDEREÇO", or_placeholder(party.endereco.as_deref()), 0.45),
            Cell::new("BAIRRO / DISTRITO", or_placeholder(party.bairro.as_deref()), 0.20),
            Cell::new("CEP", format_postal_code(party.cep.as_deref()), 0.15),
            Cell::new("DATA DA SAÍDA/ENTRADA", format_date(record.data_saida.as_deref()), 0.20),
        ],
    );
    frame.row(
        top + 2.0 * ROW_HEIGHT,
        ROW_HEIGHT,
        &[
            Cell::new("MUNICÍPIO", or_placeholder(party.cidade.as_deref()), 0.35),
            Cell::new("UF", or_placeholder(party.uf.as_deref()), 0.06),
            Cell::new("FONE / FAX", or_placeholder(party.telefone.as_deref()), 0.19),
            Cell::new("INSCRIÇÃO ESTADUAL", or_placeholder(party.inscricao_estadual.as_deref()), 0.20),
            Cell::new("HORA DA SAÍDA/ENTRADA", format_time(record.hora_saida.as_deref()), 0.20),
        ],
    );
    frame.finish(cursor, HEIGHT)
}
