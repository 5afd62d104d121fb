use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::{Department, DepartmentPayload};

/// Repository for the write-mostly `departments` table.
#[derive(Clone)]
pub struct DepartmentsService {
    pool: PgPool,
}

impl DepartmentsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Department>> {
        let departments: Vec<Department> = sqlx::query_as(
            "SELECT id, abbreviation, name, description, status FROM departments",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(departments)
    }

    pub async fn create(&self, payload: DepartmentPayload) -> AppResult<Department> {
        let department: Department = sqlx::query_as(
            "INSERT INTO departments (abbreviation, name, description, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, abbreviation, name, description, status",
        )
        .bind(&payload.abbreviation)
        .bind(&payload.name)
        .bind(payload.description.as_deref())
        .bind(payload.status.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(department)
    }
}
