use crate::access_key::KeyStatus;
use crate::record::{InvoiceRecord, Party};
use danfe_format::{digits_only, non_blank};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapKind {
    Missing,
    Malformed,
    /// A placeholder or a derived value is printed instead.
    Substituted,
}

impl fmt::Display for GapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GapKind::Missing => "missing",
            GapKind::Malformed => "malformed",
            GapKind::Substituted => "substituted",
        };
        f.write_str(text)
    }
}

/// A missing or unusable field. Never fatal: the document renders with a
/// placeholder and the gap is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Data gap in '{field}': {kind}")]
pub struct DataGap {
    pub field: String,
    pub kind: GapKind,
}

impl DataGap {
    fn new(field: impl Into<String>, kind: GapKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

fn check_text(gaps: &mut Vec<DataGap>, field: &str, value: Option<&str>) {
    if non_blank(value).is_none() {
        gaps.push(DataGap::new(field, GapKind::Missing));
    }
}

fn check_party(gaps: &mut Vec<DataGap>, prefix: &str, party: &Party) {
    check_text(gaps, &format!("{prefix}.razaoSocial"), party.razao_social.as_deref());
    match non_blank(party.documento_fiscal.as_deref()) {
        None => gaps.push(DataGap::new(
            format!("{prefix}.documentoFiscal"),
            GapKind::Missing,
        )),
        Some(doc) if !matches!(digits_only(doc).len(), 11 | 14) => gaps.push(DataGap::new(
            format!("{prefix}.documentoFiscal"),
            GapKind::Malformed,
        )),
        Some(_) => {}
    }
    let cep = non_blank(party.cep.as_deref()).map(digits_only);
    if cep.is_some_and(|digits| digits.len() != 8) {
        gaps.push(DataGap::new(format!("{prefix}.cep"), GapKind::Malformed));
    }
}

impl InvoiceRecord {
    /// Lists the fields that will be printed as placeholders or derived
    /// values, in document order.
    pub fn data_gaps(&self) -> Vec<DataGap> {
        let mut gaps = Vec::new();

        check_text(&mut gaps, "numero", self.numero.as_deref());
        match self.chave_acesso.status() {
            KeyStatus::Valid => {}
            KeyStatus::Missing => gaps.push(DataGap::new("chaveAcesso", GapKind::Missing)),
            KeyStatus::Malformed => {
                gaps.push(DataGap::new("chaveAcesso", GapKind::Substituted))
            }
        }
        check_text(&mut gaps, "dataEmissao", self.data_emissao.as_deref());
        check_text(
            &mut gaps,
            "protocoloAutorizacao",
            self.protocolo_autorizacao.as_deref(),
        );
        check_party(&mut gaps, "emitente", &self.emitente);
        check_party(&mut gaps, "destinatario", &self.destinatario);

        if self.totais.valor_total_nota.is_none() {
            gaps.push(DataGap::new("totais.valorTotalNota", GapKind::Missing));
        }
        if self.totais.valor_total_produtos.is_none() && !self.produtos.is_empty() {
            gaps.push(DataGap::new(
                "totais.valorTotalProdutos",
                GapKind::Substituted,
            ));
        }
        for (i, item) in self.produtos.iter().enumerate() {
            if item.valor_total.is_none() {
                gaps.push(DataGap::new(
                    format!("produtos[{i}].valorTotal"),
                    GapKind::Substituted,
                ));
            }
        }
        gaps
    }
}
