use super::frame::{Cell, Frame, TITLE_HEIGHT};
use super::{RenderContext, SectionOutput};
use danfe_format::{PLACEHOLDER, format_decimal, format_party_document, non_blank, or_placeholder};
use danfe_invoice::{Transporter, Volumes};
use danfe_types::DrawCursor;

pub const HEIGHT: f32 = 72.0;
const ROW_HEIGHT: f32 = 20.0;

/// Printed label of a freight responsibility code.
pub fn freight_label(code: Option<&str>) -> String {
    let Some(code) = non_blank(code) else {
        return PLACEHOLDER.to_string();
    };
    let label = match code {
        "0" => "0-Por conta do Rem",
        "1" => "1-Por conta do Dest",
        "2" => "2-Por conta de Terceiros",
        "3" => "3-Próprio Rem",
        "4" => "4-Próprio Dest",
        "9" => "9-Sem Frete",
        other => return other.to_string(),
    };
    label.to_string()
}

pub fn render(ctx: &RenderContext<'_>, cursor: DrawCursor) -> SectionOutput {
    let empty_carrier = Transporter::default();
    let empty_volumes = Volumes::default();
    let carrier = ctx.record.transportador.as_ref().unwrap_or(&empty_carrier);
    let volumes = ctx.record.volumes.as_ref().unwrap_or(&empty_volumes);
    let text = |value: &Option<String>| or_placeholder(value.as_deref());

    let mut frame = Frame::open(&cursor, HEIGHT);
    frame.title("TRANSPORTADOR / VOLUMES TRANSPORTADOS");
    let top = cursor.y + TITLE_HEIGHT;
    frame.row(
        top,
        ROW_HEIGHT,
        &[
            Cell::new("NOME / RAZÃO SOCIAL", text(&carrier.razao_social), 0.34),
            Cell::new("FRETE", freight_label(carrier.modalidade_frete.as_deref()), 0.16),
            Cell::new("CÓDIGO ANTT", text(&carrier.codigo_antt), 0.12),
            Cell::new("PLACA DO VEÍCULO", text(&carrier.placa_veiculo), 0.12),
            Cell::new("UF", text(&carrier.uf_veiculo), 0.06),
            Cell::new("CNPJ / CPF", format_party_document(carrier.documento_fiscal.as_deref()), 0.20),
        ],
    );
    frame.row(
        top + ROW_HEIGHT,
        ROW_HEIGHT,
        &[
            Cell::new("ENDEREÇO", text(&carrier.endereco), 0.44),
            Cell::new("MUNICÍPIO", text(&carrier.cidade), 0.30),
            Cell::new("UF", text(&carrier.uf), 0.06),
            Cell::new("INSCRIÇÃO ESTADUAL", text(&carrier.inscricao_estadual), 0.20),
        ],
    );
    frame.row(
        top + 2.0 * ROW_HEIGHT,
        ROW_HEIGHT,
        &[
            Cell::amount("QUANTIDADE", format_decimal(volumes.quantidade, 0), 0.12),
            Cell::new("ESPÉCIE", text(&volumes.especie), 0.16),
            Cell::new("MARCA", text(&volumes.marca), 0.16),
            Cell::new("NUMERAÇÃO", text(&volumes.numeracao), 0.16),
            Cell::amount("PESO BRUTO", format_decimal(volumes.peso_bruto, 3), 0.20),
            Cell::amount("PESO LÍQUIDO", format_decimal(volumes.peso_liquido, 3), 0.20),
        ],
    );
    frame.finish(cursor, HEIGHT)
}
