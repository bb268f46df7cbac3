pub mod appointment;
pub mod auth;
pub mod pet;
pub mod product;
pub mod service;
pub mod tutor;

use serde::Serialize;
use utoipa::ToSchema;

// Resposta padrão de PUT/DELETE
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Tutor atualizado com sucesso")]
    pub message: String,
}
