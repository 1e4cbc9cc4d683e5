// src/common/i18n.rs

use std::collections::HashMap;

// Idioma usado quando o cliente pede um que não conhecemos.
pub const IDIOMA_PADRAO: &str = "pt";

const MENSAGENS_PT: &[(&str, &str)] = &[
    ("erro.validacao", "Um ou mais campos são inválidos."),
    ("erro.corpo_invalido", "O corpo da requisição não é um JSON válido para este recurso."),
    ("erro.id_invalido", "ID inválido"),
    ("erro.produto_nao_encontrado", "Produto não encontrado"),
    ("erro.preco_venda_nao_positivo", "O preço de venda deve ser maior que zero"),
    ("erro.interno", "Ocorreu um erro inesperado."),
    // Mensagens por campo ("<campo>.<código>")
    ("nome.obrigatorio", "O nome do produto é obrigatório"),
    ("marca.obrigatorio", "A marca é obrigatória"),
    ("referencia.obrigatorio", "A referência é obrigatória"),
    ("custoCompra.obrigatorio", "O custo de compra é obrigatório"),
    ("custoCompra.minimo", "O custo deve ser maior que zero"),
    ("precoVenda.obrigatorio", "O preço de venda é obrigatório"),
    ("precoVenda.minimo", "O preço deve ser maior que zero"),
    // Genéricas, quando não há uma específica do campo
    ("obrigatorio", "Campo obrigatório"),
    ("minimo", "O valor mínimo é 0,01"),
    ("maximo", "O valor máximo é 99999999,99"),
    ("casas_decimais", "Use no máximo duas casas decimais"),
];

const MENSAGENS_EN: &[(&str, &str)] = &[
    ("erro.validacao", "One or more fields are invalid."),
    ("erro.corpo_invalido", "The request body is not valid JSON for this resource."),
    ("erro.id_invalido", "Invalid ID"),
    ("erro.produto_nao_encontrado", "Product not found"),
    ("erro.preco_venda_nao_positivo", "The sale price must be greater than zero"),
    ("erro.interno", "An unexpected error occurred."),
    ("nome.obrigatorio", "The product name is required"),
    ("marca.obrigatorio", "The brand is required"),
    ("referencia.obrigatorio", "The reference code is required"),
    ("custoCompra.obrigatorio", "The purchase cost is required"),
    ("custoCompra.minimo", "The cost must be greater than zero"),
    ("precoVenda.obrigatorio", "The sale price is required"),
    ("precoVenda.minimo", "The price must be greater than zero"),
    ("obrigatorio", "Required field"),
    ("minimo", "The minimum value is 0.01"),
    ("maximo", "The maximum value is 99999999.99"),
    ("casas_decimais", "Use at most two decimal places"),
];

/// Tabelas de mensagens por idioma, carregadas uma vez e compartilhadas pelo `AppState`.
#[derive(Debug, Clone)]
pub struct I18nStore {
    mensagens: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl Default for I18nStore {
    fn default() -> Self {
        let mut mensagens = HashMap::new();
        mensagens.insert("pt", MENSAGENS_PT.iter().copied().collect());
        mensagens.insert("en", MENSAGENS_EN.iter().copied().collect());
        Self { mensagens }
    }
}

impl I18nStore {
    fn buscar(&self, lang: &str, chave: &str) -> Option<&'static str> {
        self.mensagens
            .get(lang)
            .and_then(|tabela| tabela.get(chave))
            .or_else(|| self.mensagens.get(IDIOMA_PADRAO).and_then(|t| t.get(chave)))
            .copied()
    }

    /// Traduz uma chave; idioma desconhecido cai no português, chave desconhecida volta como está.
    pub fn traduzir(&self, lang: &str, chave: &str) -> String {
        self.buscar(lang, chave).unwrap_or(chave).to_string()
    }

    /// Mensagem de validação: tenta `<campo>.<código>`, depois só `<código>`.
    pub fn traduzir_campo(&self, lang: &str, campo: &str, codigo: &str) -> String {
        self.buscar(lang, &format!("{campo}.{codigo}"))
            .or_else(|| self.buscar(lang, codigo))
            .unwrap_or(codigo)
            .to_string()
    }
}
