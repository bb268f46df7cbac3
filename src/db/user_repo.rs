use sqlx::SqlitePool;

use crate::{common::error::AppError, models::auth::User};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Busca um usuário pelo nome de usuário (login)
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    // Busca um usuário pelo seu ID (validação do token)
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    // Cria um novo usuário no banco de dados
    pub async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES (?, ?)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Converte erro de violação de chave única em um erro mais amigável
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::UsernameAlreadyExists;
                }
            }
            AppError::DatabaseError(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;

    #[tokio::test]
    async fn username_is_unique() {
        let repo = UserRepository::new(memory_pool().await.unwrap());

        let created = repo.create_user("recepcao", "hash").await.unwrap();
        let found = repo.find_by_username("recepcao").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);

        let duplicate = repo.create_user("recepcao", "outro-hash").await;
        assert!(matches!(duplicate, Err(AppError::UsernameAlreadyExists)));
    }
}
