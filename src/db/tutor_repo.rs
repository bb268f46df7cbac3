// src/db/tutor_repo.rs

use sqlx::{Executor, Sqlite};

use crate::{
    common::error::AppError,
    models::tutor::{Tutor, TutorPayload},
};

#[derive(Clone, Default)]
pub struct TutorRepository;

impl TutorRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Tutor, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Tutor>("SELECT id, name, contact, address FROM tutors WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound("Tutor"))
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Tutor>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let tutors = sqlx::query_as::<_, Tutor>(
            "SELECT id, name, contact, address FROM tutors ORDER BY id",
        )
        .fetch_all(executor)
        .await?;

        Ok(tutors)
    }

    pub async fn create<'e, E>(&self, executor: E, payload: &TutorPayload) -> Result<Tutor, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let tutor = sqlx::query_as::<_, Tutor>(
            r#"
            INSERT INTO tutors (name, contact, address)
            VALUES (?, ?, ?)
            RETURNING id, name, contact, address
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.contact)
        .bind(&payload.address)
        .fetch_one(executor)
        .await?;

        Ok(tutor)
    }

    // Sobrescreve o registro inteiro: campos ausentes viram NULL
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        payload: &TutorPayload,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE tutors SET name = ?, contact = ?, address = ? WHERE id = ?")
            .bind(&payload.name)
            .bind(&payload.contact)
            .bind(&payload.address)
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tutor"));
        }
        Ok(())
    }

    // Não mexe nos pets nem nos agendamentos que apontam para este tutor
    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tutors WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tutor"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;

    fn maria() -> TutorPayload {
        TutorPayload {
            name: "Maria".into(),
            contact: Some("81-1234".into()),
            address: Some("Rua A".into()),
        }
    }

    #[tokio::test]
    async fn created_tutor_round_trips_by_id() {
        let pool = memory_pool().await.unwrap();
        let repo = TutorRepository::new();

        let created = repo.create(&pool, &maria()).await.unwrap();
        let found = repo.find_by_id(&pool, created.id).await.unwrap();

        assert_eq!(found, created);
        assert_eq!(found.contact.as_deref(), Some("81-1234"));
        assert_eq!(found.address.as_deref(), Some("Rua A"));
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let pool = memory_pool().await.unwrap();
        let tutors = TutorRepository::new().list(&pool).await.unwrap();
        assert!(tutors.is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_absent_fields_with_null() {
        let pool = memory_pool().await.unwrap();
        let repo = TutorRepository::new();
        let created = repo.create(&pool, &maria()).await.unwrap();

        let replacement = TutorPayload {
            name: "Maria Souza".into(),
            contact: None,
            address: None,
        };
        repo.update(&pool, created.id, &replacement).await.unwrap();

        let found = repo.find_by_id(&pool, created.id).await.unwrap();
        assert_eq!(found.name, "Maria Souza");
        assert_eq!(found.contact, None);
        assert_eq!(found.address, None);
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let pool = memory_pool().await.unwrap();
        let repo = TutorRepository::new();

        assert!(matches!(repo.find_by_id(&pool, 42).await, Err(AppError::NotFound("Tutor"))));
        assert!(matches!(repo.update(&pool, 42, &maria()).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete(&pool, 42).await, Err(AppError::NotFound(_))));
    }
}
