//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{TimeZone, Utc};
use serde::Deserialize;

use super::{parse_amount, parse_date, parse_from_param, parse_to_param};
use crate::{AppError, AppState, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use tally_core::Transaction;

/// Request body for creating or fully replacing a transaction
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub category_id: i64,
    /// Human decimal amount; converted to minor units at this boundary
    pub amount: String,
    /// Occurrence date, YYYY-MM-DD
    pub occurred_at: String,
    #[serde(default)]
    pub note: String,
}

impl TransactionRequest {
    fn parsed(&self) -> Result<(i64, chrono::DateTime<Utc>), AppError> {
        let amount_minor = parse_amount(&self.amount)?;
        let date = parse_date(&self.occurred_at)?;
        let occurred_at =
            Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).expect("noon is valid"));
        Ok((amount_minor, occurred_at))
    }
}

/// Query parameters for listing transactions
#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub category_id: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/transactions - Record a transaction
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let (amount_minor, occurred_at) = req.parsed()?;
    let tx = state
        .ledger
        .add_transaction(req.category_id, amount_minor, occurred_at, &req.note)?;
    Ok((StatusCode::CREATED, Json(tx)))
}

/// PUT /api/transactions/:id - Fully replace a transaction
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<TransactionRequest>,
) -> Result<Json<Transaction>, AppError> {
    let (amount_minor, occurred_at) = req.parsed()?;
    let tx = state.ledger.update_transaction(
        id,
        req.category_id,
        amount_minor,
        occurred_at,
        &req.note,
    )?;
    Ok(Json(tx))
}

/// GET /api/transactions - List transactions by range, category, and page
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let from = parse_from_param(query.from.as_deref())?;
    let to = parse_to_param(query.to.as_deref())?;

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if limit <= 0 || limit > MAX_PAGE_LIMIT {
        return Err(AppError::bad_request(&format!(
            "limit must be between 1 and {}",
            MAX_PAGE_LIMIT
        )));
    }
    let offset = query.offset.unwrap_or(0);
    if offset < 0 {
        return Err(AppError::bad_request("offset must not be negative"));
    }

    let transactions =
        state
            .ledger
            .list_transactions(from, to, query.category_id, limit, offset)?;
    Ok(Json(transactions))
}
