use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::json;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppResult;
use crate::models::{Department, DepartmentPayload, Item, ItemPayload};
use crate::services::{DepartmentsService, ItemsService};

#[derive(Clone)]
pub struct AppState {
    pub items: ItemsService,
    pub departments: DepartmentsService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            items: ItemsService::new(pool.clone()),
            departments: DepartmentsService::new(pool),
        }
    }
}

/// Method routing per path; an unmapped method gets a 405 with an `Allow`
/// header from the method router. The CORS layer answers preflight
/// `OPTIONS` requests and stamps allow-origin on every response.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
        .route("/departments", get(list_departments).post(create_department))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    Ok(Json(state.items.list().await?))
}

async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemPayload>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = state.items.create(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ItemPayload>,
) -> AppResult<Json<Item>> {
    Ok(Json(state.items.update(id, payload).await?))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    state.items.delete(id).await?;
    Ok(Json(json!({ "success": true })))
}

async fn list_departments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Department>>> {
    Ok(Json(state.departments.list().await?))
}

async fn create_department(
    State(state): State<AppState>,
    Json(payload): Json<DepartmentPayload>,
) -> AppResult<(StatusCode, Json<Department>)> {
    let department = state.departments.create(payload).await?;
    Ok((StatusCode::CREATED, Json(department)))
}
