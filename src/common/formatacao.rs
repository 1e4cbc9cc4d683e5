// src/common/formatacao.rs

use rust_decimal::{Decimal, RoundingStrategy};

// Arredonda para centavos (meio para longe do zero) e troca o ponto por vírgula.
fn duas_casas(valor: Decimal) -> String {
    let mut arredondado = valor.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if arredondado.is_zero() {
        // Evita "-0,00" quando um valor negativo minúsculo arredonda para zero
        arredondado = Decimal::ZERO;
    }
    format!("{:.2}", arredondado).replace('.', ",")
}

/// Formata um valor no padrão de moeda brasileiro (ex: `R$ 10,50`, `R$ -17,50`).
pub fn formatar_moeda(valor: Decimal) -> String {
    format!("R$ {}", duas_casas(valor))
}

/// Formata um percentual com duas casas (ex: `19,00%`).
pub fn formatar_percentual(valor: Decimal) -> String {
    format!("{}%", duas_casas(valor))
}
