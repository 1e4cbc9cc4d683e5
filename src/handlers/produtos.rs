// src/handlers/produtos.rs

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::ApiError,
    config::AppState,
    handlers::payload::{extrair_json, parse_id, ProdutoPayload},
    middleware::i18n::Locale,
    models::{
        calculo::{CalculoResponse, ProdutoComCalculo},
        produto::Produto,
    },
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListarParams {
    /// Inclui custos, lucro e margem de cada produto na listagem
    pub com_calculo: Option<bool>,
}

// GET /api/produtos
#[utoipa::path(
    get,
    path = "/api/produtos",
    tag = "Produtos",
    params(ListarParams),
    responses(
        (status = 200, description = "Produtos do inventário, em ordem de cadastro. Com `comCalculo=true` cada item vem como `ProdutoComCalculo`", body = Vec<Produto>),
        (status = 500, description = "Erro ao buscar produtos")
    )
)]
pub async fn listar_produtos(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<ListarParams>,
) -> Result<impl IntoResponse, ApiError> {

    if params.com_calculo.unwrap_or(false) {
        let produtos: Vec<ProdutoComCalculo> = app_state
            .produto_service
            .listar_com_calculo()
            .await
            .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?
            .into_iter()
            .map(|(produto, resultado)| ProdutoComCalculo {
                produto,
                calculo: CalculoResponse::from(resultado),
            })
            .collect();

        return Ok((StatusCode::OK, Json(produtos)).into_response());
    }

    let produtos = app_state
        .produto_service
        .listar()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(produtos)).into_response())
}

// GET /api/produtos/{id}
#[utoipa::path(
    get,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = Produto),
        (status = 400, description = "ID inválido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn buscar_produto(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let id = parse_id(&id).map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let produto = app_state
        .produto_service
        .buscar(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(produto)))
}

// POST /api/produtos
#[utoipa::path(
    post,
    path = "/api/produtos",
    tag = "Produtos",
    request_body = ProdutoPayload,
    responses(
        (status = 201, description = "Produto salvo no inventário", body = Produto),
        (status = 400, description = "Um ou mais campos são inválidos")
    )
)]
pub async fn criar_produto(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<ProdutoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {

    let novo = extrair_json(payload)
        .and_then(ProdutoPayload::into_novo_produto)
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let produto = app_state
        .produto_service
        .salvar(novo)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(produto)))
}

// DELETE /api/produtos/{id}
#[utoipa::path(
    delete,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Produto excluído"),
        (status = 400, description = "ID inválido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn excluir_produto(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let id = parse_id(&id).map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .produto_service
        .excluir(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// GET /api/produtos/{id}/calculo
#[utoipa::path(
    get,
    path = "/api/produtos/{id}/calculo",
    tag = "Produtos",
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto com custos, lucro e margem recalculados", body = ProdutoComCalculo),
        (status = 400, description = "ID inválido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn calcular_produto(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let id = parse_id(&id).map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let (produto, resultado) = app_state
        .produto_service
        .calcular_produto(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let resposta = ProdutoComCalculo {
        produto,
        calculo: CalculoResponse::from(resultado),
    };

    Ok((StatusCode::OK, Json(resposta)))
}
