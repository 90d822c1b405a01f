//! Summary and budget alert handlers
//!
//! These endpoints translate minor-unit aggregates into decimal amounts for
//! display; expense is shown as a positive magnitude.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{parse_from_param, parse_to_param};
use crate::{AppError, AppState};
use tally_core::money;

/// Shared query parameters: an optional YYYY-MM-DD date range
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Per-category aggregate with decimal amounts
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub category_id: i64,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
    pub count: i64,
}

/// Budget exceedance with decimal amounts
#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub category_id: i64,
    pub category_name: String,
    pub limit: f64,
    pub spent: f64,
    pub exceeded_by: f64,
}

/// GET /api/summary - Per-category aggregates over a date range
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<SummaryResponse>>, AppError> {
    let from = parse_from_param(query.from.as_deref())?;
    let to = parse_to_param(query.to.as_deref())?;

    let summary = state.ledger.summary(from, to)?;

    let response = summary
        .into_iter()
        .map(|s| SummaryResponse {
            category_id: s.category_id,
            income: money::to_major_units(s.income_minor),
            expense: money::to_major_units(-s.expense_minor),
            net: money::to_major_units(s.net_minor),
            count: s.count,
        })
        .collect();

    Ok(Json(response))
}

/// GET /api/alerts - Budget exceedances over a date range
pub async fn list_alerts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<AlertResponse>>, AppError> {
    let from = parse_from_param(query.from.as_deref())?;
    let to = parse_to_param(query.to.as_deref())?;

    let alerts = state.ledger.exceeded_budgets(from, to)?;

    let response = alerts
        .into_iter()
        .map(|a| AlertResponse {
            category_id: a.category_id,
            category_name: a.category_name,
            limit: money::to_major_units(a.limit_minor),
            spent: money::to_major_units(a.spent_minor),
            exceeded_by: money::to_major_units(a.exceeded_by_minor),
        })
        .collect();

    Ok(Json(response))
}
