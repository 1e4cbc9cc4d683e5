// src/db/produto_repo.rs

use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::produto::{NovoProduto, Produto},
};

// Contrato do inventário: só inclui, lista e exclui. Não existe atualização.
#[async_trait]
pub trait ProdutoStore: Send + Sync {
    /// Todos os produtos, do mais antigo para o mais novo.
    async fn listar(&self) -> Result<Vec<Produto>, AppError>;

    async fn buscar(&self, id: i32) -> Result<Option<Produto>, AppError>;

    /// Atribui o próximo id (maior existente + 1, ou 1) e a data de cadastro.
    async fn salvar(&self, produto: NovoProduto) -> Result<Produto, AppError>;

    /// `false` quando nenhum produto tem esse id.
    async fn excluir(&self, id: i32) -> Result<bool, AppError>;
}

// O repositório de produtos, responsável por todas as interações com a tabela 'produtos'
#[derive(Clone)]
pub struct ProdutoRepository {
    pool: PgPool,
}

impl ProdutoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn inserir<'e, E>(executor: E, produto: &NovoProduto) -> Result<Produto, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let novo = sqlx::query_as::<_, Produto>(
            "INSERT INTO produtos (id, nome, marca, referencia, custo_compra, preco_venda)
             SELECT COALESCE(MAX(id), 0) + 1, $1, $2, $3, $4, $5 FROM produtos
             RETURNING *",
        )
            .bind(&produto.nome)
            .bind(&produto.marca)
            .bind(&produto.referencia)
            .bind(produto.custo_compra)
            .bind(produto.preco_venda)
            .fetch_one(executor)
            .await?;
        Ok(novo)
    }
}

#[async_trait]
impl ProdutoStore for ProdutoRepository {
    async fn listar(&self) -> Result<Vec<Produto>, AppError> {
        let produtos = sqlx::query_as::<_, Produto>(
            "SELECT * FROM produtos ORDER BY data_cadastro ASC, id ASC",
        )
            .fetch_all(&self.pool)
            .await?;
        Ok(produtos)
    }

    async fn buscar(&self, id: i32) -> Result<Option<Produto>, AppError> {
        let produto = sqlx::query_as::<_, Produto>("SELECT * FROM produtos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(produto)
    }

    async fn salvar(&self, produto: NovoProduto) -> Result<Produto, AppError> {
        let mut tx = self.pool.begin().await?;

        // O MAX(id) + 1 só é seguro com a tabela travada para outras inclusões
        sqlx::query("LOCK TABLE produtos IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let novo = Self::inserir(&mut *tx, &produto).await?;

        tx.commit().await?;
        Ok(novo)
    }

    async fn excluir(&self, id: i32) -> Result<bool, AppError> {
        let removido = sqlx::query_scalar::<_, i32>("DELETE FROM produtos WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(removido.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sqlx::postgres::PgPoolOptions;
    use std::str::FromStr;
    use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
    use testcontainers_modules::postgres::Postgres;

    // Sem Docker disponível o teste é pulado, não reprovado.
    async fn repositorio() -> Option<(ContainerAsync<Postgres>, ProdutoRepository)> {
        let container = match Postgres::default().with_tag("18").start().await {
            Ok(container) => container,
            Err(e) => {
                eprintln!("Postgres em container indisponível, pulando teste: {e}");
                return None;
            }
        };

        let host = container.get_host().await.unwrap();
        let port = container.get_host_port_ipv4(5432).await.unwrap();
        let url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("Falha ao conectar no Postgres");
        sqlx::migrate!().run(&pool).await.expect("Falha ao executar migrações");

        Some((container, ProdutoRepository::new(pool)))
    }

    fn novo(referencia: &str) -> NovoProduto {
        NovoProduto {
            nome: "Fone Bluetooth".to_string(),
            marca: "Marca X".to_string(),
            referencia: referencia.to_string(),
            custo_compra: Decimal::from_str("10.00").unwrap(),
            preco_venda: Decimal::from_str("30.00").unwrap(),
        }
    }

    fn ids(produtos: &[Produto]) -> Vec<i32> {
        produtos.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn test_ids_sequenciais_e_maior_mais_um_apos_exclusao() {
        let Some((_container, repo)) = repositorio().await else { return };

        for (esperado, referencia) in [(1, "A"), (2, "B"), (3, "C")] {
            assert_eq!(repo.salvar(novo(referencia)).await.unwrap().id, esperado);
        }

        // Excluir um id do meio não abre buraco para o próximo
        assert!(repo.excluir(2).await.unwrap());
        assert_eq!(repo.salvar(novo("D")).await.unwrap().id, 4);

        // Excluir o maior faz o id dele ser reutilizado
        assert!(repo.excluir(4).await.unwrap());
        assert_eq!(repo.salvar(novo("E")).await.unwrap().id, 4);
    }

    #[tokio::test]
    async fn test_listar_em_ordem_de_cadastro() {
        let Some((_container, repo)) = repositorio().await else { return };
        assert!(repo.listar().await.unwrap().is_empty());

        for referencia in ["A", "B", "C"] {
            repo.salvar(novo(referencia)).await.unwrap();
        }

        let produtos = repo.listar().await.unwrap();
        assert_eq!(ids(&produtos), [1, 2, 3]);
        assert!(produtos.windows(2).all(|par| par[0].data_cadastro <= par[1].data_cadastro));
        assert_eq!(produtos[0].referencia, "A");
        assert_eq!(produtos[0].custo_compra, Decimal::from_str("10.00").unwrap());
    }

    #[tokio::test]
    async fn test_excluir_inexistente_retorna_false() {
        let Some((_container, repo)) = repositorio().await else { return };
        repo.salvar(novo("A")).await.unwrap();

        assert!(!repo.excluir(99).await.unwrap());
        assert!(!repo.excluir(-1).await.unwrap());
        assert_eq!(ids(&repo.listar().await.unwrap()), [1]);
    }

    #[tokio::test]
    async fn test_buscar() {
        let Some((_container, repo)) = repositorio().await else { return };
        let salvo = repo.salvar(novo("A")).await.unwrap();

        assert_eq!(repo.buscar(salvo.id).await.unwrap(), Some(salvo));
        assert_eq!(repo.buscar(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_salvar_concorrente_nao_repete_id() {
        let Some((_container, repo)) = repositorio().await else { return };

        let tarefas: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.salvar(novo(&format!("R-{i}"))).await })
            })
            .collect();

        let mut salvos = Vec::new();
        for tarefa in tarefas {
            salvos.push(tarefa.await.unwrap().unwrap().id);
        }
        salvos.sort();
        assert_eq!(salvos, (1..=8).collect::<Vec<_>>());
    }
}
