// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculadora de Custos e Precificação",
        description = "Lucro líquido e margem de produtos vendidos em marketplace, com inventário de produtos salvos."
    ),
    paths(
        // --- Produtos (inventário) ---
        handlers::produtos::listar_produtos,
        handlers::produtos::buscar_produto,
        handlers::produtos::criar_produto,
        handlers::produtos::excluir_produto,
        handlers::produtos::calcular_produto,

        // --- Calculadora ---
        handlers::calculadora::calcular,
    ),
    components(
        schemas(
            models::produto::Produto,
            handlers::payload::ProdutoPayload,

            models::calculo::Situacao,
            models::calculo::ResultadoCalculo,
            models::calculo::ResultadoFormatado,
            models::calculo::CalculoResponse,
            models::calculo::ProdutoComCalculo,
        )
    ),
    tags(
        (name = "Produtos", description = "Inventário de produtos salvos"),
        (name = "Calculadora", description = "Cálculo de custos sem salvar")
    )
)]
pub struct ApiDoc;
