use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

// Taxonomia única de erros da API. Toda falha vira `{ "error": ... }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] ValidationErrors),

    // Corpo JSON malformado, campo obrigatório ausente ou tipo errado
    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Parâmetro de rota inválido: {0}")]
    InvalidPath(#[from] PathRejection),

    #[error("{0} não encontrado")]
    NotFound(&'static str),

    // Referência para uma entidade relacionada que não existe
    #[error("{0}")]
    ForeignKeyViolation(String),

    #[error("Nome de usuário já existe")]
    UsernameAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    // Falha do armazenamento (disco, corrupção, conexão)
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// Erro de validação para um único campo, no mesmo formato do `validator`.
    pub fn invalid_field(field: &'static str, code: &'static str, message: &'static str) -> Self {
        let mut error = ValidationError::new(code);
        error.message = Some(message.into());

        let mut errors = ValidationErrors::new();
        errors.add(field, error);
        AppError::ValidationError(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            // Sem Content-Type JSON continua 415; o resto é corpo inválido (400)
            AppError::InvalidBody(JsonRejection::MissingJsonContentType(rejection)) => {
                (rejection.status(), rejection.body_text())
            }
            AppError::InvalidBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            AppError::InvalidPath(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            AppError::NotFound(entity) => (StatusCode::NOT_FOUND, format!("{entity} não encontrado")),
            AppError::ForeignKeyViolation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::UsernameAlreadyExists => (
                StatusCode::CONFLICT,
                "Este nome de usuário já está em uso.".to_string(),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Usuário ou senha inválidos.".to_string(),
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),

            // Todo o resto (banco, bcrypt, jwt, anyhow) vira 500.
            // O detalhe vai para o log, o cliente recebe uma mensagem genérica.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        let cases = [
            (AppError::NotFound("Tutor"), StatusCode::NOT_FOUND),
            (
                AppError::ForeignKeyViolation("Tutor informado não existe.".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::invalid_field("pet_id", "not_found", "Pet não encontrado"),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::UsernameAlreadyExists, StatusCode::CONFLICT),
            (AppError::InvalidToken, StatusCode::UNAUTHORIZED),
            (
                AppError::DatabaseError(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn invalid_field_keeps_field_and_message() {
        let AppError::ValidationError(errors) =
            AppError::invalid_field("pet_id", "not_found", "Pet não encontrado")
        else {
            panic!("esperava ValidationError");
        };
        let field_errors = errors.field_errors();
        let pet_errors = field_errors.get("pet_id").expect("campo pet_id");
        assert_eq!(pet_errors[0].code, "not_found");
        assert_eq!(pet_errors[0].message.as_deref(), Some("Pet não encontrado"));
    }
}
