pub mod calculo;
pub mod produto;
