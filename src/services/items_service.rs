use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemPayload};

/// Repository for the `items` table. Every operation is a single
/// parameterized statement; mutations re-read the stored row via
/// `RETURNING` so the response reflects what the database actually holds.
#[derive(Clone)]
pub struct ItemsService {
    pool: PgPool,
}

impl ItemsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Item>> {
        let items: Vec<Item> =
            sqlx::query_as("SELECT id, name, quantity, description FROM items")
                .fetch_all(&self.pool)
                .await?;
        Ok(items)
    }

    pub async fn create(&self, payload: ItemPayload) -> AppResult<Item> {
        let (name, quantity, description) = payload.validate()?;

        let item: Item = sqlx::query_as(
            "INSERT INTO items (name, quantity, description) VALUES ($1, $2, $3) \
             RETURNING id, name, quantity, description",
        )
        .bind(&name)
        .bind(quantity)
        .bind(description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    /// Full overwrite of the three mutable fields; last writer wins.
    pub async fn update(&self, id: i64, payload: ItemPayload) -> AppResult<Item> {
        let (name, quantity, description) = payload.validate()?;

        let item: Option<Item> = sqlx::query_as(
            "UPDATE items SET name = $1, quantity = $2, description = $3 WHERE id = $4 \
             RETURNING id, name, quantity, description",
        )
        .bind(&name)
        .bind(quantity)
        .bind(description.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        item.ok_or_else(|| AppError::NotFound("Item not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let rows_affected = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NotFound("Item not found".to_string()));
        }

        Ok(())
    }
}
