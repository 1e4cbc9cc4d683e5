// src/models/calculo.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::formatacao::{formatar_moeda, formatar_percentual};
use crate::models::produto::Produto;

// Como o resultado deve ser exibido: prejuízo não é erro, só aparece diferente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Situacao {
    Lucro,
    Empate,
    Prejuizo,
}

/// Decomposição de custos de um produto. Valores exatos, sem arredondamento intermediário.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultadoCalculo {
    #[schema(example = 3.00)]
    pub impostos: Decimal,
    #[schema(example = 10.00)]
    pub taxas_marketplace: Decimal,
    #[schema(example = 0.30)]
    pub custo_material: Decimal,
    #[schema(example = 1.00)]
    pub custo_ads: Decimal,
    #[schema(example = 24.30)]
    pub total_custos: Decimal,
    #[schema(example = 5.70)]
    pub lucro_liquido: Decimal,
    #[schema(example = 19.00)]
    pub margem_lucro: Decimal,
}

impl ResultadoCalculo {
    pub fn situacao(&self) -> Situacao {
        if self.lucro_liquido.is_zero() {
            Situacao::Empate
        } else if self.lucro_liquido.is_sign_negative() {
            Situacao::Prejuizo
        } else {
            Situacao::Lucro
        }
    }

    pub fn formatado(&self) -> ResultadoFormatado {
        ResultadoFormatado {
            impostos: formatar_moeda(self.impostos),
            taxas_marketplace: formatar_moeda(self.taxas_marketplace),
            custo_material: formatar_moeda(self.custo_material),
            custo_ads: formatar_moeda(self.custo_ads),
            total_custos: formatar_moeda(self.total_custos),
            lucro_liquido: formatar_moeda(self.lucro_liquido),
            margem_lucro: formatar_percentual(self.margem_lucro),
        }
    }
}

// Mesmos campos, já prontos para a tela ("R$ 10,50", "19,00%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultadoFormatado {
    #[schema(example = "R$ 3,00")]
    pub impostos: String,
    pub taxas_marketplace: String,
    pub custo_material: String,
    pub custo_ads: String,
    pub total_custos: String,
    #[schema(example = "R$ 5,70")]
    pub lucro_liquido: String,
    #[schema(example = "19,00%")]
    pub margem_lucro: String,
}

// --- Resposta das rotas de cálculo ---
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculoResponse {
    pub situacao: Situacao,
    pub valores: ResultadoCalculo,
    pub formatado: ResultadoFormatado,
}

impl From<ResultadoCalculo> for CalculoResponse {
    fn from(resultado: ResultadoCalculo) -> Self {
        Self {
            situacao: resultado.situacao(),
            formatado: resultado.formatado(),
            valores: resultado,
        }
    }
}

// Produto do inventário junto com o cálculo refeito na hora
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoComCalculo {
    pub produto: Produto,
    pub calculo: CalculoResponse,
}
