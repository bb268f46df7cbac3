// src/models/tutor.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Dono/responsável pelos pets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tutor {
    pub id: i64,
    pub name: String,
    pub contact: Option<String>,
    pub address: Option<String>,
}

// Registro completo usado em POST e PUT (PUT sobrescreve tudo)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TutorPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Maria")]
    pub name: String,

    #[schema(example = "81-1234")]
    pub contact: Option<String>,

    #[schema(example = "Rua A")]
    pub address: Option<String>,
}
