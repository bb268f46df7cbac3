// src/handlers/services.rs

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
        service::{Service, ServicePayload},
        MessageResponse,
    },
};

// GET /services
#[utoipa::path(
    get,
    path = "/services",
    tag = "Services",
    responses(
        (status = 200, description = "Envelope { services: [...] }", body = Vec<Service>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_services(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let services = app_state.service_repo.list(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(json!({ "services": services }))))
}

// GET /services/{id}
#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = "Services",
    params(("id" = i64, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Envelope { service: {...} }", body = Service),
        (status = 404, description = "Serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_service(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = app_state.service_repo.find_by_id(&app_state.db_pool, id).await?;
    Ok((StatusCode::OK, Json(json!({ "service": service }))))
}

// POST /services
#[utoipa::path(
    post,
    path = "/services",
    tag = "Services",
    request_body = ServicePayload,
    responses(
        (status = 201, description = "Envelope { message, service }", body = Service),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let service = app_state.service_repo.create(&app_state.db_pool, &payload).await?;
    tracing::info!("🩺 Serviço {} criado", service.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Serviço criado com sucesso", "service": service })),
    ))
}

// PUT /services/{id}
#[utoipa::path(
    put,
    path = "/services/{id}",
    tag = "Services",
    params(("id" = i64, Path, description = "ID do serviço")),
    request_body = ServicePayload,
    responses(
        (status = 200, description = "Serviço atualizado", body = MessageResponse),
        (status = 404, description = "Serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_service(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<ServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    app_state.service_repo.update(&app_state.db_pool, id, &payload).await?;
    tracing::info!("🩺 Serviço {} atualizado", id);

    Ok(Json(MessageResponse { message: "Serviço atualizado com sucesso".into() }))
}

// DELETE /services/{id}
#[utoipa::path(
    delete,
    path = "/services/{id}",
    tag = "Services",
    params(("id" = i64, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Serviço deletado", body = MessageResponse),
        (status = 404, description = "Serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_service(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.service_repo.delete(&app_state.db_pool, id).await?;
    tracing::info!("🩺 Serviço {} deletado", id);

    Ok(Json(MessageResponse { message: "Serviço deletado com sucesso".into() }))
}
