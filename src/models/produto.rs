// src/models/produto.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- Produto salvo no inventário ---
// Só os dados de entrada são persistidos; o cálculo é sempre refeito.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Capinha de celular")]
    pub nome: String,

    #[schema(example = "Genérica")]
    pub marca: String,

    #[schema(example = "CAP-001")]
    pub referencia: String,

    #[schema(example = 10.00)]
    pub custo_compra: Decimal,

    #[schema(example = 30.00)]
    pub preco_venda: Decimal,

    pub data_cadastro: DateTime<Utc>,
}

// --- Dados já validados para inserção ---
// Construído pelo handler a partir do payload; o repositório confia nele.
#[derive(Debug, Clone, PartialEq)]
pub struct NovoProduto {
    pub nome: String,
    pub marca: String,
    pub referencia: String,
    pub custo_compra: Decimal,
    pub preco_venda: Decimal,
}
