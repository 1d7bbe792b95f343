use danfe::InvoiceRecord;
use serde_json::{Value, json};

pub const ACCESS_KEY: &str = "35250513516247000107550010000113401146202508";

/// A complete record in the shape invoice importers produce: numbers as
/// strings, integers where text is expected.
pub fn sample_json() -> Value {
    json!({
        "numero": 1134,
        "serie": "1",
        "chaveAcesso": ACCESS_KEY,
        "dataEmissao": "2025-05-20",
        "dataSaida": "2025-05-20",
        "horaSaida": "14:30:00",
        "tipoOperacao": 1,
        "naturezaOperacao": "VENDA DE MERCADORIA",
        "protocoloAutorizacao": "135250001234567",
        "dataAutorizacao": "2025-05-20T10:15:00-03:00",
        "emitente": {
            "razaoSocial": "Acme Componentes Ltda",
            "cnpj": "13516247000107",
            "inscricaoEstadual": "123456789110",
            "endereco": "Av. Paulista, 1000",
            "bairro": "Bela Vista",
            "cidade": "Sao Paulo",
            "uf": "SP",
            "cep": "01310100",
            "telefone": "1133334444"
        },
        "destinatario": {
            "razaoSocial": "Oficina Exemplo ME",
            "cpf": "12345678901",
            "endereco": "Rua das Flores, 12",
            "cidade": "Campinas",
            "uf": "SP",
            "cep": "13010-000"
        },
        "totais": {
            "valorTotalProdutos": "100.00",
            "valorTotalNota": 100
        },
        "produtos": [
            {
                "codigo": "00362",
                "descricao": "CILINDRO MESTRE",
                "ncm": "87083090",
                "cfop": 5102,
                "unidade": "UN",
                "quantidade": 1,
                "valorUnitario": "100.00"
            }
        ],
        "transportador": { "razaoSocial": "Transportes Rapidos", "modalidadeFrete": 0 },
        "duplicatas": [ { "numero": "001", "vencimento": "2025-06-20", "valor": 100 } ],
        "informacoesComplementares": "Pedido 4471."
    })
}

pub fn sample_record() -> InvoiceRecord {
    InvoiceRecord::from_json(&sample_json().to_string()).expect("fixture is valid JSON")
}

/// `sample_record` with `n` items coded `SKU-0001`, `SKU-0002`...
pub fn record_with_items(n: usize) -> InvoiceRecord {
    let mut json = sample_json();
    json["produtos"] = (1..=n)
        .map(|i| {
            json!({
                "codigo": item_code(i),
                "descricao": format!("PECA {i}"),
                "quantidade": 1,
                "valorUnitario": "10.00"
            })
        })
        .collect::<Vec<Value>>()
        .into();
    json["totais"] = json!({ "valorTotalNota": n * 10 });
    InvoiceRecord::from_json(&json.to_string()).expect("fixture is valid JSON")
}

pub fn item_code(i: usize) -> String {
    format!("SKU-{i:04}")
}
