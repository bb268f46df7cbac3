// src/db/service_repo.rs

use sqlx::{Executor, Sqlite};

use crate::{
    common::error::AppError,
    models::service::{Service, ServicePayload},
};

#[derive(Clone, Default)]
pub struct ServiceRepository;

impl ServiceRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Service, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Service>(
            "SELECT id, name, description, price FROM services WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::NotFound("Serviço"))
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Service>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let services = sqlx::query_as::<_, Service>(
            "SELECT id, name, description, price FROM services ORDER BY id",
        )
        .fetch_all(executor)
        .await?;

        Ok(services)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &ServicePayload,
    ) -> Result<Service, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (name, description, price)
            VALUES (?, ?, ?)
            RETURNING id, name, description, price
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .fetch_one(executor)
        .await?;

        Ok(service)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        payload: &ServicePayload,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "UPDATE services SET name = ?, description = ?, price = ? WHERE id = ?",
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(id)
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Serviço"));
        }
        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Serviço"));
        }
        Ok(())
    }
}
