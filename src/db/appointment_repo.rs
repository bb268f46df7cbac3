// src/db/appointment_repo.rs

use sqlx::{Executor, Sqlite};

use crate::{
    common::error::AppError,
    models::appointment::{Appointment, AppointmentDetail, AppointmentPayload},
};

// Repositório "burro": recebe o tutor já derivado pelo AppointmentService.
#[derive(Clone, Default)]
pub struct AppointmentRepository;

impl AppointmentRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, tutor_id, pet_id, service_id, date, status
            FROM appointments
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::NotFound("Agendamento"))
    }

    /// Listagem do painel: agendamento + nomes de tutor, pet e serviço.
    pub async fn list_detailed<'e, E>(&self, executor: E) -> Result<Vec<AppointmentDetail>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let appointments = sqlx::query_as::<_, AppointmentDetail>(
            r#"
            SELECT
                a.id AS id, a.tutor_id AS tutor_id, a.pet_id AS pet_id,
                a.service_id AS service_id, a.date AS date, a.status AS status,
                t.name AS tutor_name,
                p.name AS pet_name,
                s.name AS service_name
            FROM appointments a
            LEFT JOIN tutors t ON t.id = a.tutor_id
            LEFT JOIN pets p ON p.id = a.pet_id
            LEFT JOIN services s ON s.id = a.service_id
            ORDER BY a.id
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(appointments)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &AppointmentPayload,
        tutor_id: Option<i64>,
    ) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (tutor_id, pet_id, service_id, date, status)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, tutor_id, pet_id, service_id, date, status
            "#,
        )
        .bind(tutor_id)
        .bind(payload.pet_id)
        .bind(payload.service_id)
        .bind(payload.date)
        .bind(payload.status)
        .fetch_one(executor)
        .await?;

        Ok(appointment)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        payload: &AppointmentPayload,
        tutor_id: Option<i64>,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            UPDATE appointments
            SET tutor_id = ?, pet_id = ?, service_id = ?, date = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(tutor_id)
        .bind(payload.pet_id)
        .bind(payload.service_id)
        .bind(payload.date)
        .bind(payload.status)
        .bind(id)
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Agendamento"));
        }
        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Agendamento"));
        }
        Ok(())
    }
}
