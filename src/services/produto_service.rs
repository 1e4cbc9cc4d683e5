// src/services/produto_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::ProdutoStore,
    models::{
        calculo::ResultadoCalculo,
        produto::{NovoProduto, Produto},
    },
    services::calculadora,
};

#[derive(Clone)]
pub struct ProdutoService {
    store: Arc<dyn ProdutoStore>,
}

impl ProdutoService {
    pub fn new(store: Arc<dyn ProdutoStore>) -> Self {
        Self { store }
    }

    pub async fn listar(&self) -> Result<Vec<Produto>, AppError> {
        self.store.listar().await
    }

    pub async fn buscar(&self, id: i32) -> Result<Produto, AppError> {
        self.store
            .buscar(id)
            .await?
            .ok_or(AppError::ProdutoNaoEncontrado(id))
    }

    pub async fn salvar(&self, produto: NovoProduto) -> Result<Produto, AppError> {
        // Garante que o que vai para o inventário também é calculável
        calculadora::calcular(produto.custo_compra, produto.preco_venda)?;

        let salvo = self.store.salvar(produto).await?;
        tracing::info!(id = salvo.id, referencia = %salvo.referencia, "Produto salvo no inventário");
        Ok(salvo)
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        if !self.store.excluir(id).await? {
            return Err(AppError::ProdutoNaoEncontrado(id));
        }
        tracing::info!(id, "Produto excluído do inventário");
        Ok(())
    }

    /// Listagem com o cálculo de cada produto, na mesma ordem de `listar`.
    pub async fn listar_com_calculo(&self) -> Result<Vec<(Produto, ResultadoCalculo)>, AppError> {
        self.listar()
            .await?
            .into_iter()
            .map(|produto| {
                calculadora::calcular(produto.custo_compra, produto.preco_venda)
                    .map(|resultado| (produto, resultado))
                    .map_err(AppError::from)
            })
            .collect()
    }

    // Os custos nunca são gravados: sempre recalculados a partir do produto salvo.
    pub async fn calcular_produto(&self, id: i32) -> Result<(Produto, ResultadoCalculo), AppError> {
        let produto = self.buscar(id).await?;
        let resultado = calculadora::calcular(produto.custo_compra, produto.preco_venda)?;
        Ok((produto, resultado))
    }
}
