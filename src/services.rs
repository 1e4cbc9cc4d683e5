pub mod calculadora;
pub mod produto_service;
pub use produto_service::ProdutoService;
