pub mod produto_repo;
pub use produto_repo::{ProdutoRepository, ProdutoStore};

#[cfg(test)]
pub mod memoria;
#[cfg(test)]
pub use memoria::MemoriaProdutoStore;
