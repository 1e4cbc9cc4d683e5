//src/main.rs

use axum::{
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::{AppState, Config};
use crate::docs::ApiDoc;

fn router(app_state: AppState) -> Router {
    let produto_routes = Router::new()
        .route("/api/produtos"
               ,get(handlers::produtos::listar_produtos)
               .post(handlers::produtos::criar_produto)
        )
        .route("/api/produtos/{id}"
               ,get(handlers::produtos::buscar_produto)
               .delete(handlers::produtos::excluir_produto)
        )
        .route("/api/produtos/{id}/calculo"
               ,get(handlers::produtos::calcular_produto)
        );

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/api/calculadora", post(handlers::calculadora::calcular))
        .merge(produto_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // Se a configuração ou o banco falharem, a aplicação não deve iniciar.
    let app_config = Config::from_env()?;
    let db_pool = config::connect(&app_config).await?;

    sqlx::migrate!()
        .run(&db_pool)
        .await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = router(AppState::new(db_pool));

    let listener = TcpListener::bind(&app_config.server_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
