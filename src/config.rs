// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{common::i18n::I18nStore, db::ProdutoRepository, services::ProdutoService};

const SERVER_ADDR_PADRAO: &str = "0.0.0.0:3000";
const MAX_CONNECTIONS_PADRAO: u32 = 5;

// Configuração lida do ambiente (e do .env, se existir)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| SERVER_ADDR_PADRAO.to_string());
        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(valor) => valor
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS inválido: {valor}"))?,
            Err(_) => MAX_CONNECTIONS_PADRAO,
        };

        Ok(Self { database_url, server_addr, max_connections })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub produto_service: ProdutoService,
    pub i18n_store: Arc<I18nStore>,
}

impl AppState {
    // Monta o gráfico de dependências em cima de uma pool já conectada
    pub fn new(db_pool: PgPool) -> Self {
        let produto_repo = ProdutoRepository::new(db_pool);
        Self::from_service(ProdutoService::new(Arc::new(produto_repo)))
    }

    pub fn from_service(produto_service: ProdutoService) -> Self {
        Self {
            produto_service,
            i18n_store: Arc::new(I18nStore::default()),
        }
    }
}

pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    // Conecta ao banco de dados, usando '?' para propagar erros
    let db_pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await
        .context("Falha ao conectar ao banco de dados")?;

    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
    Ok(db_pool)
}
