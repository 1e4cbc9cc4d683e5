pub mod calculadora;
pub mod payload;
pub mod produtos;

#[cfg(test)]
pub mod test_utils;
