// src/models/service.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Serviço oferecido pela clínica (banho, consulta, vacina...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ServicePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Banho e Tosa")]
    pub name: String,

    #[schema(example = "Banho completo com tosa higiênica")]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "O preço não pode ser negativo."))]
    #[schema(example = 80.0)]
    pub price: f64,
}
