// src/handlers/tutors.rs

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
        tutor::{Tutor, TutorPayload},
        MessageResponse,
    },
};

// GET /tutors
#[utoipa::path(
    get,
    path = "/tutors",
    tag = "Tutors",
    responses(
        (status = 200, description = "Envelope { tutors: [...] }", body = Vec<Tutor>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tutors(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let tutors = app_state.tutor_repo.list(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(json!({ "tutors": tutors }))))
}

// GET /tutors/{id}
#[utoipa::path(
    get,
    path = "/tutors/{id}",
    tag = "Tutors",
    params(("id" = i64, Path, description = "ID do tutor")),
    responses(
        (status = 200, description = "Envelope { tutor: {...} }", body = Tutor),
        (status = 404, description = "Tutor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_tutor(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let tutor = app_state.tutor_repo.find_by_id(&app_state.db_pool, id).await?;
    Ok((StatusCode::OK, Json(json!({ "tutor": tutor }))))
}

// POST /tutors
#[utoipa::path(
    post,
    path = "/tutors",
    tag = "Tutors",
    request_body = TutorPayload,
    responses(
        (status = 201, description = "Envelope { message, tutor }", body = Tutor),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_tutor(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<TutorPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let tutor = app_state.tutor_repo.create(&app_state.db_pool, &payload).await?;
    tracing::info!("🧑 Tutor {} criado", tutor.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Tutor criado com sucesso", "tutor": tutor })),
    ))
}

// PUT /tutors/{id}
#[utoipa::path(
    put,
    path = "/tutors/{id}",
    tag = "Tutors",
    params(("id" = i64, Path, description = "ID do tutor")),
    request_body = TutorPayload,
    responses(
        (status = 200, description = "Tutor atualizado", body = MessageResponse),
        (status = 404, description = "Tutor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_tutor(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<TutorPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    app_state.tutor_repo.update(&app_state.db_pool, id, &payload).await?;
    tracing::info!("🧑 Tutor {} atualizado", id);

    Ok(Json(MessageResponse { message: "Tutor atualizado com sucesso".into() }))
}

// DELETE /tutors/{id}
// Pets e agendamentos do tutor continuam existindo
#[utoipa::path(
    delete,
    path = "/tutors/{id}",
    tag = "Tutors",
    params(("id" = i64, Path, description = "ID do tutor")),
    responses(
        (status = 200, description = "Tutor deletado", body = MessageResponse),
        (status = 404, description = "Tutor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_tutor(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.tutor_repo.delete(&app_state.db_pool, id).await?;
    tracing::info!("🧑 Tutor {} deletado", id);

    Ok(Json(MessageResponse { message: "Tutor deletado com sucesso".into() }))
}
