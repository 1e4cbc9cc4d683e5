// src/handlers/test_utils.rs

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header,
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{config::AppState, db::ProdutoStore, services::ProdutoService};

pub fn estado_teste(store: impl ProdutoStore + 'static) -> AppState {
    AppState::from_service(ProdutoService::new(Arc::new(store)))
}

// Passa o corpo pelo mesmo extrator que o axum usaria na rota
pub async fn requisicao_json<T: DeserializeOwned>(corpo: &str) -> Result<Json<T>, JsonRejection> {
    let req = Request::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(corpo.to_string()))
        .unwrap();
    Json::<T>::from_request(req, &()).await
}

pub async fn corpo_json(resposta: Response) -> Value {
    let bytes = to_bytes(resposta.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
