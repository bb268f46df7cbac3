// src/db/product_repo.rs

use sqlx::{Executor, Sqlite};

use crate::{
    common::error::AppError,
    models::product::{Product, ProductPayload},
};

#[derive(Clone, Default)]
pub struct ProductRepository;

impl ProductRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, stock FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::NotFound("Produto"))
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, stock FROM products ORDER BY id",
        )
        .fetch_all(executor)
        .await?;

        Ok(products)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &ProductPayload,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, stock)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, description, price, stock
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(payload.stock)
        .fetch_one(executor)
        .await?;

        Ok(product)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        payload: &ProductPayload,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "UPDATE products SET name = ?, description = ?, price = ?, stock = ? WHERE id = ?",
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(payload.stock)
        .bind(id)
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Produto"));
        }
        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Produto"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;

    #[tokio::test]
    async fn stock_is_persisted_and_overwritten() {
        let pool = memory_pool().await.unwrap();
        let repo = ProductRepository::new();

        let kibble = ProductPayload {
            name: "Ração".into(),
            description: None,
            price: 149.9,
            stock: 12,
        };
        let created = repo.create(&pool, &kibble).await.unwrap();
        assert_eq!(created.stock, 12);

        repo.update(&pool, created.id, &ProductPayload { stock: 0, ..kibble })
            .await
            .unwrap();

        let found = repo.find_by_id(&pool, created.id).await.unwrap();
        assert_eq!(found.stock, 0);
        assert_eq!(found.name, "Ração");
    }

    #[tokio::test]
    async fn deleting_twice_reports_not_found() {
        let pool = memory_pool().await.unwrap();
        let repo = ProductRepository::new();
        let created = repo
            .create(
                &pool,
                &ProductPayload {
                    name: "Coleira".into(),
                    description: None,
                    price: 30.0,
                    stock: 1,
                },
            )
            .await
            .unwrap();

        repo.delete(&pool, created.id).await.unwrap();
        assert!(matches!(
            repo.delete(&pool, created.id).await,
            Err(AppError::NotFound("Produto"))
        ));
    }
}
