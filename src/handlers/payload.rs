// src/handlers/payload.rs

use axum::{extract::rejection::JsonRejection, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{common::error::AppError, models::produto::NovoProduto};
use std::str::FromStr;

// NUMERIC(10, 2): de 0,01 até 99.999.999,99
const VALOR_MINIMO: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
const VALOR_MAXIMO: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

// ---
// Validação Customizada
// ---
fn validate_preenchido(valor: &String) -> Result<(), ValidationError> {
    if valor.trim().is_empty() {
        return Err(ValidationError::new("obrigatorio"));
    }
    Ok(())
}

fn validate_valor_monetario(valor: &Decimal) -> Result<(), ValidationError> {
    if *valor < VALOR_MINIMO {
        let mut err = ValidationError::new("minimo");
        err.add_param("min".into(), &VALOR_MINIMO);
        return Err(err);
    }
    if *valor > VALOR_MAXIMO {
        let mut err = ValidationError::new("maximo");
        err.add_param("max".into(), &VALOR_MAXIMO);
        return Err(err);
    }
    if valor.normalize().scale() > 2 {
        return Err(ValidationError::new("casas_decimais"));
    }
    Ok(())
}

// Valores monetários só como número JSON. O `serde-float` do Decimal aceitaria "30.00" também.
fn deserialize_valor_monetario<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(numero) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let texto = numero.to_string();
    Decimal::from_str(&texto)
        .or_else(|_| Decimal::from_scientific(&texto))
        .map(Some)
        .map_err(serde::de::Error::custom)
}

// ---
// Payload: Produto (formulário da calculadora e inclusão no inventário)
// ---
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoPayload {
    #[validate(custom(function = "validate_preenchido"))]
    #[serde(default)]
    #[schema(example = "Capinha de celular")]
    pub nome: String,

    #[validate(custom(function = "validate_preenchido"))]
    #[serde(default)]
    #[schema(example = "Genérica")]
    pub marca: String,

    #[validate(custom(function = "validate_preenchido"))]
    #[serde(default)]
    #[schema(example = "CAP-001")]
    pub referencia: String,

    #[validate(required(code = "obrigatorio"), custom(function = "validate_valor_monetario"))]
    #[serde(default, deserialize_with = "deserialize_valor_monetario")]
    #[schema(value_type = Option<f64>, example = 10.00)]
    pub custo_compra: Option<Decimal>,

    #[validate(required(code = "obrigatorio"), custom(function = "validate_valor_monetario"))]
    #[serde(default, deserialize_with = "deserialize_valor_monetario")]
    #[schema(value_type = Option<f64>, example = 30.00)]
    pub preco_venda: Option<Decimal>,
}

impl ProdutoPayload {
    /// Valida e converte para o formato aceito pelo inventário (textos sem espaços nas pontas).
    pub fn into_novo_produto(self) -> Result<NovoProduto, AppError> {
        self.validate()?;

        let (Some(custo_compra), Some(preco_venda)) = (self.custo_compra, self.preco_venda) else {
            return Err(anyhow::anyhow!("payload validado sem valores monetários").into());
        };

        Ok(NovoProduto {
            nome: self.nome.trim().to_string(),
            marca: self.marca.trim().to_string(),
            referencia: self.referencia.trim().to_string(),
            custo_compra: custo_compra.round_dp(2),
            preco_venda: preco_venda.round_dp(2),
        })
    }
}

// JSON malformado vira 400 com o nosso formato de erro, não a rejeição padrão do axum.
pub fn extrair_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(valor)| valor)
        .map_err(|rejection| AppError::InvalidBody(rejection.body_text()))
}

// IDs chegam como texto para que um valor não numérico vire o nosso 400, não o do axum.
pub fn parse_id(id: &str) -> Result<i32, AppError> {
    id.trim()
        .parse::<i32>()
        .map_err(|_| AppError::InvalidId(id.to_string()))
}
