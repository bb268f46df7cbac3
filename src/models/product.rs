// src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Ração Premium 10kg")]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "O preço não pode ser negativo."))]
    #[schema(example = 149.9)]
    pub price: f64,

    #[serde(default)]
    #[validate(range(min = 0, message = "O estoque não pode ser negativo."))]
    #[schema(example = 12)]
    pub stock: i64,
}
