//! Budget handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::parse_amount;
use crate::{AppError, AppState};
use tally_core::Budget;

/// Request body for setting or replacing a budget
#[derive(Debug, Deserialize)]
pub struct UpsertBudgetRequest {
    pub category_id: i64,
    /// Human decimal limit; converted to minor units at this boundary
    pub limit: String,
}

/// GET /api/budgets - List all budgets
pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Budget>>, AppError> {
    let budgets = state.ledger.list_budgets()?;
    Ok(Json(budgets))
}

/// POST /api/budgets - Set or replace the budget for a category
pub async fn upsert_budget(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpsertBudgetRequest>,
) -> Result<(StatusCode, Json<Budget>), AppError> {
    let limit_minor = parse_amount(&req.limit)?;
    let budget = state.ledger.upsert_budget(req.category_id, limit_minor)?;
    Ok((StatusCode::CREATED, Json(budget)))
}
