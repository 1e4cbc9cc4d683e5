// src/services/calculadora.rs

//! Cálculo de custos, lucro líquido e margem de um produto vendido no marketplace.
//!
//! Toda a aritmética é feita em `Decimal`: a soma dos cinco custos não acumula erro
//! de ponto flutuante e duas chamadas com a mesma entrada devolvem o mesmo resultado.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::calculo::ResultadoCalculo;

// Valor em centésimos (ex: 10 -> 0.10), utilizável em `const`.
const fn centesimos(valor: u32) -> Decimal {
    Decimal::from_parts(valor, 0, 0, false, 2)
}

/// Imposto sobre o preço de venda (10%).
pub const TAXA_IMPOSTO: Decimal = centesimos(10);
/// Comissão percentual do marketplace (20%).
pub const TAXA_MARKETPLACE_PERCENTUAL: Decimal = centesimos(20);
/// Tarifa fixa por venda cobrada pelo marketplace.
pub const TAXA_MARKETPLACE_FIXA: Decimal = centesimos(400);
/// Embalagem e material de envio, por unidade.
pub const CUSTO_MATERIAL: Decimal = centesimos(30);
/// Anúncios, por unidade.
pub const CUSTO_ADS: Decimal = centesimos(100);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculoError {
    // A margem divide pelo preço de venda
    #[error("O preço de venda deve ser maior que zero")]
    PrecoVendaNaoPositivo,
}

/// Calcula a decomposição de custos para um custo de compra e um preço de venda.
///
/// Lucro negativo é um resultado válido (`Situacao::Prejuizo`), não um erro.
pub fn calcular(custo_compra: Decimal, preco_venda: Decimal) -> Result<ResultadoCalculo, CalculoError> {
    if preco_venda <= Decimal::ZERO {
        return Err(CalculoError::PrecoVendaNaoPositivo);
    }

    let impostos = preco_venda * TAXA_IMPOSTO;
    let taxas_marketplace = preco_venda * TAXA_MARKETPLACE_PERCENTUAL + TAXA_MARKETPLACE_FIXA;
    let total_custos = custo_compra + impostos + taxas_marketplace + CUSTO_MATERIAL + CUSTO_ADS;
    let lucro_liquido = preco_venda - total_custos;
    let margem_lucro = lucro_liquido / preco_venda * Decimal::ONE_HUNDRED;

    Ok(ResultadoCalculo {
        impostos,
        taxas_marketplace,
        custo_material: CUSTO_MATERIAL,
        custo_ads: CUSTO_ADS,
        total_custos,
        lucro_liquido,
        margem_lucro,
    })
}
