// src/db/memoria.rs

// Inventário em memória, usado só pelos testes no lugar do Postgres.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::{
    common::error::AppError,
    db::ProdutoStore,
    models::produto::{NovoProduto, Produto},
};

#[derive(Default)]
pub struct MemoriaProdutoStore {
    produtos: Mutex<Vec<Produto>>,
}

#[async_trait]
impl ProdutoStore for MemoriaProdutoStore {
    async fn listar(&self) -> Result<Vec<Produto>, AppError> {
        let mut produtos = self.produtos.lock().unwrap().clone();
        produtos.sort_by_key(|p| (p.data_cadastro, p.id));
        Ok(produtos)
    }

    async fn buscar(&self, id: i32) -> Result<Option<Produto>, AppError> {
        let produtos = self.produtos.lock().unwrap();
        Ok(produtos.iter().find(|p| p.id == id).cloned())
    }

    async fn salvar(&self, produto: NovoProduto) -> Result<Produto, AppError> {
        let mut produtos = self.produtos.lock().unwrap();
        let id = produtos.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        // Garante ordem estrita mesmo quando o relógio não avança entre duas inclusões
        let agora = Utc::now();
        let data_cadastro = match produtos.iter().map(|p| p.data_cadastro).max() {
            Some(ultima) if ultima >= agora => ultima + Duration::microseconds(1),
            _ => agora,
        };

        let novo = Produto {
            id,
            nome: produto.nome,
            marca: produto.marca,
            referencia: produto.referencia,
            custo_compra: produto.custo_compra,
            preco_venda: produto.preco_venda,
            data_cadastro,
        };
        produtos.push(novo.clone());
        Ok(novo)
    }

    async fn excluir(&self, id: i32) -> Result<bool, AppError> {
        let mut produtos = self.produtos.lock().unwrap();
        let antes = produtos.len();
        produtos.retain(|p| p.id != id);
        Ok(produtos.len() < antes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn novo(nome: &str) -> NovoProduto {
        NovoProduto {
            nome: nome.to_string(),
            marca: "Marca".to_string(),
            referencia: "REF-1".to_string(),
            custo_compra: Decimal::new(1000, 2),
            preco_venda: Decimal::new(3000, 2),
        }
    }

    #[tokio::test]
    async fn test_ids_sequenciais_comecam_em_um() {
        let store = MemoriaProdutoStore::default();
        assert_eq!(store.salvar(novo("a")).await.unwrap().id, 1);
        assert_eq!(store.salvar(novo("b")).await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_id_usa_maior_existente_mais_um() {
        let store = MemoriaProdutoStore::default();
        store.salvar(novo("a")).await.unwrap();
        store.salvar(novo("b")).await.unwrap();
        store.salvar(novo("c")).await.unwrap();

        assert!(store.excluir(2).await.unwrap());
        assert_eq!(store.salvar(novo("d")).await.unwrap().id, 4);

        assert!(store.excluir(4).await.unwrap());
        // Depois de excluir o maior, o id volta a ser reaproveitado
        assert_eq!(store.salvar(novo("e")).await.unwrap().id, 4);
    }

    #[tokio::test]
    async fn test_listar_em_ordem_de_cadastro() {
        let store = MemoriaProdutoStore::default();
        for nome in ["a", "b", "c"] {
            store.salvar(novo(nome)).await.unwrap();
        }
        let nomes: Vec<_> = store.listar().await.unwrap().into_iter().map(|p| p.nome).collect();
        assert_eq!(nomes, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_excluir_inexistente_nao_altera() {
        let store = MemoriaProdutoStore::default();
        store.salvar(novo("a")).await.unwrap();

        assert!(!store.excluir(99).await.unwrap());
        assert_eq!(store.listar().await.unwrap().len(), 1);
    }
}
