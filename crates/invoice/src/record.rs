use crate::access_key::AccessKey;
use crate::lenient;
use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// The electronic invoice rendered into one DANFE.
///
/// Loaded once and read-only for the rest of the render. Every field is
/// optional on input; placeholders are substituted when the document is
/// drawn, never here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceRecord {
    #[serde(alias = "numeroNF", deserialize_with = "lenient::text")]
    pub numero: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub serie: Option<String>,
    pub chave_acesso: AccessKey,
    pub data_emissao: Option<String>,
    pub data_saida: Option<String>,
    pub hora_saida: Option<String>,
    /// `0` for entrada, `1` for saída.
    #[serde(deserialize_with = "lenient::text")]
    pub tipo_operacao: Option<String>,
    pub natureza_operacao: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub protocolo_autorizacao: Option<String>,
    pub data_autorizacao: Option<String>,

    #[serde(deserialize_with = "lenient::null_as_default")]
    pub emitente: Party,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub destinatario: Party,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub totais: Totals,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub produtos: Vec<LineItem>,
    pub transportador: Option<Transporter>,
    pub volumes: Option<Volumes>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub duplicatas: Vec<Duplicate>,

    pub informacoes_complementares: Option<String>,
    pub informacoes_fisco: Option<String>,
}

/// Issuer or recipient of the invoice.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Party {
    pub razao_social: Option<String>,
    /// CNPJ (14 digits) or CPF (11 digits).
    #[serde(alias = "cnpj", alias = "cpf", deserialize_with = "lenient::text")]
    pub documento_fiscal: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub inscricao_estadual: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub inscricao_municipal: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub inscricao_estadual_st: Option<String>,
    pub endereco: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub cep: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub telefone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Totals {
    #[serde(deserialize_with = "lenient::amount")]
    pub base_calculo_icms: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_icms: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub base_calculo_icms_st: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_icms_st: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_importacao: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_total_produtos: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_frete: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_seguro: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_desconto: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub outras_despesas: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_total_ipi: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_total_tributos: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_total_nota: Option<Decimal>,
}

/// One invoiced product.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItem {
    #[serde(deserialize_with = "lenient::text")]
    pub codigo: Option<String>,
    pub descricao: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub ncm: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub cst: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub cfop: Option<String>,
    pub unidade: Option<String>,
    #[serde(deserialize_with = "lenient::amount")]
    pub quantidade: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_unitario: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_total: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub base_calculo_icms: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_icms: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor_ipi: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub aliquota_icms: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub aliquota_ipi: Option<Decimal>,
}

impl LineItem {
    /// The stated line total, or quantity times unit price when absent.
    /// A missing operand counts as zero.
    pub fn line_total(&self) -> Decimal {
        self.valor_total.unwrap_or_else(|| {
            let quantity = self.quantidade.unwrap_or_default();
            let unit = self.valor_unitario.unwrap_or_default();
            quantity.checked_mul(unit).unwrap_or_default()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transporter {
    pub razao_social: Option<String>,
    #[serde(alias = "cnpj", deserialize_with = "lenient::text")]
    pub documento_fiscal: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub inscricao_estadual: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub codigo_antt: Option<String>,
    pub placa_veiculo: Option<String>,
    pub uf_veiculo: Option<String>,
    /// Freight responsibility code (`0` issuer, `1` recipient, `9` none...).
    #[serde(deserialize_with = "lenient::text")]
    pub modalidade_frete: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Volumes {
    #[serde(deserialize_with = "lenient::amount")]
    pub quantidade: Option<Decimal>,
    pub especie: Option<String>,
    pub marca: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub numeracao: Option<String>,
    #[serde(deserialize_with = "lenient::amount")]
    pub peso_bruto: Option<Decimal>,
    #[serde(deserialize_with = "lenient::amount")]
    pub peso_liquido: Option<Decimal>,
}

/// One installment of the payment schedule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Duplicate {
    #[serde(deserialize_with = "lenient::text")]
    pub numero: Option<String>,
    pub vencimento: Option<String>,
    #[serde(deserialize_with = "lenient::amount")]
    pub valor: Option<Decimal>,
}

impl InvoiceRecord {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let record: Self = serde_json::from_str(json)?;
        debug!(
            "Loaded invoice {:?} with {} line item(s)",
            record.numero,
            record.produtos.len()
        );
        Ok(record)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let record: Self = serde_json::from_reader(reader)?;
        debug!(
            "Loaded invoice {:?} with {} line item(s)",
            record.numero,
            record.produtos.len()
        );
        Ok(record)
    }

    /// `"0"` for an incoming invoice, `"1"` (the default) otherwise.
    pub fn operation_code(&self) -> &'static str {
        match self.tipo_operacao.as_deref().map(str::trim) {
            Some("0") => "0",
            _ => "1",
        }
    }

    /// The stated products total, or the sum of the line totals when absent.
    pub fn products_total(&self) -> Decimal {
        self.totais.valor_total_produtos.unwrap_or_else(|| {
            self.produtos
                .iter()
                .map(LineItem::line_total)
                .try_fold(Decimal::ZERO, Decimal::checked_add)
                .unwrap_or_default()
        })
    }
}
