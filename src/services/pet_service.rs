// src/services/pet_service.rs

use sqlx::{SqliteConnection, SqlitePool};

use crate::{
    common::error::AppError,
    db::{self, PetRepository, TutorRepository},
    models::pet::{Pet, PetPayload},
};

#[derive(Clone)]
pub struct PetService {
    repo: PetRepository,
    tutor_repo: TutorRepository,
}

impl PetService {
    pub fn new(repo: PetRepository, tutor_repo: TutorRepository) -> Self {
        Self { repo, tutor_repo }
    }

    pub async fn find_by_id(&self, pool: &SqlitePool, id: i64) -> Result<Pet, AppError> {
        self.repo.find_by_id(pool, id).await
    }

    pub async fn list(&self, pool: &SqlitePool) -> Result<Vec<Pet>, AppError> {
        self.repo.list(pool).await
    }

    pub async fn list_by_tutor(&self, pool: &SqlitePool, tutor_id: i64) -> Result<Vec<Pet>, AppError> {
        self.repo.list_by_tutor(pool, tutor_id).await
    }

    pub async fn create(&self, pool: &SqlitePool, payload: &PetPayload) -> Result<Pet, AppError> {
        let mut tx = db::begin_write(pool).await?;

        self.ensure_tutor_exists(&mut tx, payload.tutor_id).await?;
        let pet = self.repo.create(&mut *tx, payload).await?;

        tx.commit().await?;
        Ok(pet)
    }

    pub async fn update(&self, pool: &SqlitePool, id: i64, payload: &PetPayload) -> Result<(), AppError> {
        let mut tx = db::begin_write(pool).await?;

        self.ensure_tutor_exists(&mut tx, payload.tutor_id).await?;
        self.repo.update(&mut *tx, id, payload).await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        self.repo.delete(pool, id).await
    }

    // Pet sem tutor é permitido; tutor informado precisa existir
    async fn ensure_tutor_exists(
        &self,
        conn: &mut SqliteConnection,
        tutor_id: Option<i64>,
    ) -> Result<(), AppError> {
        let Some(tutor_id) = tutor_id else {
            return Ok(());
        };

        match self.tutor_repo.find_by_id(&mut *conn, tutor_id).await {
            Ok(_) => Ok(()),
            Err(AppError::NotFound(_)) => Err(AppError::ForeignKeyViolation(format!(
                "Tutor {tutor_id} não existe."
            ))),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::memory_pool, models::tutor::TutorPayload};

    fn rex(tutor_id: Option<i64>) -> PetPayload {
        PetPayload {
            name: "Rex".into(),
            species: Some("Dog".into()),
            breed: None,
            age: None,
            gender: None,
            color: None,
            tutor_id,
        }
    }

    fn service() -> PetService {
        PetService::new(PetRepository::new(), TutorRepository::new())
    }

    #[tokio::test]
    async fn unknown_tutor_is_a_foreign_key_error_and_nothing_is_written() {
        let pool = memory_pool().await.unwrap();
        let pets = service();

        let result = pets.create(&pool, &rex(Some(404))).await;

        assert!(matches!(result, Err(AppError::ForeignKeyViolation(_))));
        assert!(pets.list(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn pet_without_tutor_is_accepted() {
        let pool = memory_pool().await.unwrap();
        let pet = service().create(&pool, &rex(None)).await.unwrap();
        assert_eq!(pet.tutor_id, None);
    }

    #[tokio::test]
    async fn deleting_the_tutor_leaves_the_pet_dangling() {
        let pool = memory_pool().await.unwrap();
        let tutors = TutorRepository::new();
        let pets = service();

        let maria = tutors
            .create(
                &pool,
                &TutorPayload {
                    name: "Maria".into(),
                    contact: None,
                    address: None,
                },
            )
            .await
            .unwrap();
        let pet = pets.create(&pool, &rex(Some(maria.id))).await.unwrap();

        tutors.delete(&pool, maria.id).await.unwrap();

        let found = pets.find_by_id(&pool, pet.id).await.unwrap();
        assert_eq!(found.tutor_id, Some(maria.id));
        assert!(matches!(
            tutors.find_by_id(&pool, maria.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_checks_the_new_tutor() {
        let pool = memory_pool().await.unwrap();
        let pets = service();
        let pet = pets.create(&pool, &rex(None)).await.unwrap();

        let result = pets.update(&pool, pet.id, &rex(Some(7))).await;
        assert!(matches!(result, Err(AppError::ForeignKeyViolation(_))));
    }

    // Vários "confere tutor e grava" ao mesmo tempo num banco em arquivo:
    // todos esperam o lock de escrita, nenhum falha com SQLITE_BUSY.
    #[tokio::test]
    async fn concurrent_creates_wait_for_the_write_lock() {
        let path = std::env::temp_dir().join(format!("petclinic-pets-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let pool = db::connect(&format!("sqlite://{}", path.display()), 8)
            .await
            .unwrap();
        db::run_migrations(&pool).await.unwrap();

        let maria = TutorRepository::new()
            .create(
                &pool,
                &TutorPayload {
                    name: "Maria".into(),
                    contact: None,
                    address: None,
                },
            )
            .await
            .unwrap();

        let pets = service();
        let mut writes = tokio::task::JoinSet::new();
        for _ in 0..8 {
            let pool = pool.clone();
            let pets = pets.clone();
            let payload = rex(Some(maria.id));
            writes.spawn(async move { pets.create(&pool, &payload).await });
        }
        while let Some(result) = writes.join_next().await {
            assert_eq!(result.unwrap().unwrap().tutor_id, Some(maria.id));
        }
        assert_eq!(pets.list(&pool).await.unwrap().len(), 8);

        pool.close().await;
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
        }
    }
}
