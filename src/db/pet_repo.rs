// src/db/pet_repo.rs

use sqlx::{Executor, Sqlite};

use crate::{
    common::error::AppError,
    models::pet::{Pet, PetPayload},
};

const PET_COLUMNS: &str = "id, name, species, breed, age, gender, color, tutor_id";

#[derive(Clone, Default)]
pub struct PetRepository;

impl PetRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Pet, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!("SELECT {PET_COLUMNS} FROM pets WHERE id = ?");
        sqlx::query_as::<_, Pet>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound("Pet"))
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Pet>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!("SELECT {PET_COLUMNS} FROM pets ORDER BY id");
        let pets = sqlx::query_as::<_, Pet>(&sql).fetch_all(executor).await?;
        Ok(pets)
    }

    /// Pets de um tutor. Tutor inexistente devolve lista vazia.
    pub async fn list_by_tutor<'e, E>(&self, executor: E, tutor_id: i64) -> Result<Vec<Pet>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!("SELECT {PET_COLUMNS} FROM pets WHERE tutor_id = ? ORDER BY id");
        let pets = sqlx::query_as::<_, Pet>(&sql)
            .bind(tutor_id)
            .fetch_all(executor)
            .await?;
        Ok(pets)
    }

    pub async fn create<'e, E>(&self, executor: E, payload: &PetPayload) -> Result<Pet, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!(
            r#"
            INSERT INTO pets (name, species, breed, age, gender, color, tutor_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {PET_COLUMNS}
            "#
        );
        let pet = sqlx::query_as::<_, Pet>(&sql)
            .bind(&payload.name)
            .bind(&payload.species)
            .bind(&payload.breed)
            .bind(payload.age)
            .bind(&payload.gender)
            .bind(&payload.color)
            .bind(payload.tutor_id)
            .fetch_one(executor)
            .await?;

        Ok(pet)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        payload: &PetPayload,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            UPDATE pets
            SET name = ?, species = ?, breed = ?, age = ?, gender = ?, color = ?, tutor_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.species)
        .bind(&payload.breed)
        .bind(payload.age)
        .bind(&payload.gender)
        .bind(&payload.color)
        .bind(payload.tutor_id)
        .bind(id)
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Pet"));
        }
        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Pet"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;

    fn pet(name: &str, tutor_id: Option<i64>) -> PetPayload {
        PetPayload {
            name: name.into(),
            species: Some("Dog".into()),
            breed: None,
            age: Some(3),
            gender: None,
            color: None,
            tutor_id,
        }
    }

    #[tokio::test]
    async fn lists_only_the_pets_of_a_tutor() {
        let pool = memory_pool().await.unwrap();
        let repo = PetRepository::new();

        let rex = repo.create(&pool, &pet("Rex", Some(1))).await.unwrap();
        repo.create(&pool, &pet("Mia", Some(2))).await.unwrap();
        repo.create(&pool, &pet("Sem dono", None)).await.unwrap();

        let pets = repo.list_by_tutor(&pool, 1).await.unwrap();
        assert_eq!(pets, vec![rex]);
        assert_eq!(repo.list(&pool).await.unwrap().len(), 3);
        assert!(repo.list_by_tutor(&pool, 99).await.unwrap().is_empty());
    }

    // O banco não confere FKs; quem barra tutor inexistente é o PetService
    #[tokio::test]
    async fn store_accepts_a_dangling_tutor_reference() {
        let pool = memory_pool().await.unwrap();
        let repo = PetRepository::new();

        let orphan = repo.create(&pool, &pet("Rex", Some(404))).await.unwrap();
        assert_eq!(orphan.tutor_id, Some(404));

        repo.update(&pool, orphan.id, &pet("Rex", Some(405))).await.unwrap();
        let found = repo.find_by_id(&pool, orphan.id).await.unwrap();
        assert_eq!(found.tutor_id, Some(405));
    }

    #[tokio::test]
    async fn update_replaces_the_whole_record() {
        let pool = memory_pool().await.unwrap();
        let repo = PetRepository::new();
        let rex = repo.create(&pool, &pet("Rex", Some(1))).await.unwrap();

        repo.update(&pool, rex.id, &PetPayload { species: None, ..pet("Rex", None) })
            .await
            .unwrap();

        let found = repo.find_by_id(&pool, rex.id).await.unwrap();
        assert_eq!(found.species, None);
        assert_eq!(found.tutor_id, None);
        assert_eq!(found.age, Some(3));
    }
}
