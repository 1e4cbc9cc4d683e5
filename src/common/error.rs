// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;
use crate::services::calculadora::CalculoError;

// Erros internos da aplicação. Viram `ApiError` (já traduzido) na borda HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Corpo que nem chega a ser um payload (JSON malformado, tipo errado, etc.)
    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(String),

    #[error("ID inválido: {0}")]
    InvalidId(String),

    #[error("Produto não encontrado: {0}")]
    ProdutoNaoEncontrado(i32),

    #[error("Erro de cálculo: {0}")]
    CalculoError(#[from] CalculoError),

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

// Erro pronto para o cliente: status + corpo JSON no idioma pedido.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

// O validator devolve o nome do campo em Rust; o cliente conhece o nome em camelCase.
fn camel_case(campo: &str) -> String {
    let mut saida = String::with_capacity(campo.len());
    let mut maiuscula = false;
    for c in campo.chars() {
        if c == '_' {
            maiuscula = true;
        } else if maiuscula {
            saida.extend(c.to_uppercase());
            maiuscula = false;
        } else {
            saida.push(c);
        }
    }
    saida
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();

        let (status, chave) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details: HashMap<String, Vec<String>> = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let campo = camel_case(&field);
                    let messages = field_errors
                        .iter()
                        .map(|e| i18n.traduzir_campo(lang, &campo, &e.code))
                        .collect();
                    details.insert(campo, messages);
                }
                return ApiError {
                    status: StatusCode::BAD_REQUEST,
                    body: json!({
                        "error": i18n.traduzir(lang, "erro.validacao"),
                        "details": details,
                    }),
                };
            }
            AppError::InvalidBody(motivo) => {
                return ApiError {
                    status: StatusCode::BAD_REQUEST,
                    body: json!({
                        "error": i18n.traduzir(lang, "erro.corpo_invalido"),
                        "details": motivo,
                    }),
                };
            }
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, "erro.id_invalido"),
            AppError::ProdutoNaoEncontrado(_) => (StatusCode::NOT_FOUND, "erro.produto_nao_encontrado"),
            AppError::CalculoError(CalculoError::PrecoVendaNaoPositivo) => {
                (StatusCode::BAD_REQUEST, "erro.preco_venda_nao_positivo")
            }

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O detalhe fica no log; o cliente recebe só a mensagem genérica.
            e => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "erro.interno")
            }
        };

        ApiError {
            status,
            body: json!({ "error": i18n.traduzir(lang, chave) }),
        }
    }
}
