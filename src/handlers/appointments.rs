// src/handlers/appointments.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath},
    },
    config::AppState,
    models::{
        appointment::{Appointment, AppointmentDetail, AppointmentPayload},
        MessageResponse,
    },
};

// GET /appointments
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "Appointments",
    responses(
        (status = 200, description = "Envelope { appointments: [...] } com nomes de tutor, pet e serviço", body = Vec<AppointmentDetail>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_appointments(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let appointments = app_state.appointment_service.list(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(json!({ "appointments": appointments }))))
}

// GET /appointments/{id}
#[utoipa::path(
    get,
    path = "/appointments/{id}",
    tag = "Appointments",
    params(("id" = i64, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Envelope { appointment: {...} }", body = Appointment),
        (status = 404, description = "Agendamento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_appointment(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = app_state
        .appointment_service
        .find_by_id(&app_state.db_pool, id)
        .await?;
    Ok((StatusCode::OK, Json(json!({ "appointment": appointment }))))
}

// POST /appointments
// O tutor é preenchido a partir do pet; qualquer tutor_id no corpo é ignorado.
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "Appointments",
    request_body = AppointmentPayload,
    responses(
        (status = 201, description = "Envelope { message, appointment } com tutor_id derivado do pet", body = Appointment),
        (status = 400, description = "Pet não encontrado, serviço inexistente ou dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<AppointmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = app_state
        .appointment_service
        .create(&app_state.db_pool, &payload)
        .await?;
    tracing::info!(
        "📅 Agendamento {} criado (pet {}, tutor {:?})",
        appointment.id,
        appointment.pet_id,
        appointment.tutor_id
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Agendamento criado", "appointment": appointment })),
    ))
}

// PUT /appointments/{id}
#[utoipa::path(
    put,
    path = "/appointments/{id}",
    tag = "Appointments",
    params(("id" = i64, Path, description = "ID do agendamento")),
    request_body = AppointmentPayload,
    responses(
        (status = 200, description = "Agendamento atualizado", body = MessageResponse),
        (status = 400, description = "Pet não encontrado, serviço inexistente ou dados inválidos"),
        (status = 404, description = "Agendamento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_appointment(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<AppointmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .appointment_service
        .update(&app_state.db_pool, id, &payload)
        .await?;
    tracing::info!("📅 Agendamento {} atualizado ({:?})", id, payload.status);

    Ok(Json(MessageResponse { message: "Agendamento atualizado".into() }))
}

// DELETE /appointments/{id}
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    tag = "Appointments",
    params(("id" = i64, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Agendamento deletado", body = MessageResponse),
        (status = 404, description = "Agendamento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_appointment(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .appointment_service
        .delete(&app_state.db_pool, id)
        .await?;
    tracing::info!("📅 Agendamento {} deletado", id);

    Ok(Json(MessageResponse { message: "Agendamento deletado".into() }))
}
