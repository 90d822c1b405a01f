//! Category handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use tally_core::Category;

/// Request body for creating a category
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// GET /api/categories - List all categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.ledger.list_categories()?;
    Ok(Json(categories))
}

/// POST /api/categories - Create a new category
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let category = state.ledger.create_category(&req.name)?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// DELETE /api/categories/:id - Delete a category and everything it owns
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.ledger.delete_category(id)?;
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
