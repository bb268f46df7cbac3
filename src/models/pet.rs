// src/models/pet.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub color: Option<String>,

    // Pode ficar nulo enquanto o tutor não é conhecido.
    // Depois de apagar o tutor, continua apontando para o id antigo.
    pub tutor_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PetPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Rex")]
    pub name: String,

    #[schema(example = "Dog")]
    pub species: Option<String>,

    #[schema(example = "Vira-lata")]
    pub breed: Option<String>,

    #[validate(range(min = 0, message = "A idade não pode ser negativa."))]
    #[schema(example = 3)]
    pub age: Option<i64>,

    #[schema(example = "Macho")]
    pub gender: Option<String>,

    #[schema(example = "Caramelo")]
    pub color: Option<String>,

    #[schema(example = 1)]
    pub tutor_id: Option<i64>,
}
