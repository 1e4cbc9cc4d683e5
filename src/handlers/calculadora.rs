// src/handlers/calculadora.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::payload::{extrair_json, ProdutoPayload},
    middleware::i18n::Locale,
    models::calculo::CalculoResponse,
    services::calculadora,
};

// POST /api/calculadora
// Só calcula; salvar no inventário é uma ação separada (POST /api/produtos).
#[utoipa::path(
    post,
    path = "/api/calculadora",
    tag = "Calculadora",
    request_body = ProdutoPayload,
    responses(
        (status = 200, description = "Custos, lucro líquido e margem do produto", body = CalculoResponse),
        (status = 400, description = "Um ou mais campos são inválidos")
    )
)]
pub async fn calcular(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<ProdutoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {

    let resultado = extrair_json(payload)
        .and_then(ProdutoPayload::into_novo_produto)
        .and_then(|produto| {
            calculadora::calcular(produto.custo_compra, produto.preco_venda).map_err(AppError::from)
        })
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(CalculoResponse::from(resultado))))
}
