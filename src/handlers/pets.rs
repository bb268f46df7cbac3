// src/handlers/pets.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath},
    },
    config::AppState,
    models::{
        pet::{Pet, PetPayload},
        MessageResponse,
    },
};

// GET /pets
#[utoipa::path(
    get,
    path = "/pets",
    tag = "Pets",
    responses(
        (status = 200, description = "Envelope { pets: [...] }", body = Vec<Pet>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_pets(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pets = app_state.pet_service.list(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(json!({ "pets": pets }))))
}

// GET /pets/tutor/{id}
#[utoipa::path(
    get,
    path = "/pets/tutor/{id}",
    tag = "Pets",
    params(("id" = i64, Path, description = "ID do tutor")),
    responses(
        (status = 200, description = "Pets do tutor, envelope { pets: [...] }", body = Vec<Pet>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_pets_by_tutor(
    State(app_state): State<AppState>,
    AppPath(tutor_id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let pets = app_state
        .pet_service
        .list_by_tutor(&app_state.db_pool, tutor_id)
        .await?;
    Ok((StatusCode::OK, Json(json!({ "pets": pets }))))
}

// GET /pets/{id}
#[utoipa::path(
    get,
    path = "/pets/{id}",
    tag = "Pets",
    params(("id" = i64, Path, description = "ID do pet")),
    responses(
        (status = 200, description = "Envelope { pet: {...} }", body = Pet),
        (status = 404, description = "Pet não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_pet(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let pet = app_state.pet_service.find_by_id(&app_state.db_pool, id).await?;
    Ok((StatusCode::OK, Json(json!({ "pet": pet }))))
}

// POST /pets
#[utoipa::path(
    post,
    path = "/pets",
    tag = "Pets",
    request_body = PetPayload,
    responses(
        (status = 201, description = "Envelope { message, pet }", body = Pet),
        (status = 400, description = "Dados inválidos ou tutor inexistente")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_pet(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<PetPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let pet = app_state.pet_service.create(&app_state.db_pool, &payload).await?;
    tracing::info!("🐾 Pet {} criado (tutor {:?})", pet.id, pet.tutor_id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Pet criado com sucesso", "pet": pet })),
    ))
}

// PUT /pets/{id}
#[utoipa::path(
    put,
    path = "/pets/{id}",
    tag = "Pets",
    params(("id" = i64, Path, description = "ID do pet")),
    request_body = PetPayload,
    responses(
        (status = 200, description = "Pet atualizado", body = MessageResponse),
        (status = 400, description = "Dados inválidos ou tutor inexistente"),
        (status = 404, description = "Pet não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_pet(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<PetPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    app_state.pet_service.update(&app_state.db_pool, id, &payload).await?;
    tracing::info!("🐾 Pet {} atualizado", id);

    Ok(Json(MessageResponse { message: "Pet atualizado com sucesso".into() }))
}

// DELETE /pets/{id}
#[utoipa::path(
    delete,
    path = "/pets/{id}",
    tag = "Pets",
    params(("id" = i64, Path, description = "ID do pet")),
    responses(
        (status = 200, description = "Pet deletado", body = MessageResponse),
        (status = 404, description = "Pet não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_pet(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.pet_service.delete(&app_state.db_pool, id).await?;
    tracing::info!("🐾 Pet {} deletado", id);

    Ok(Json(MessageResponse { message: "Pet deletado com sucesso".into() }))
}
