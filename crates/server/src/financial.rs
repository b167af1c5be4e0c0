//! Expense and revenue API endpoints

use api_types::{
    financial::{ExpenseNew, ExpenseUpdate, RevenueNew, RevenueUpdate},
    query::RecordQuery,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{
    ExpensePatch, FinancialSummary, NewExpense, NewRevenue, RecordFilter, RevenuePatch, util,
};

use crate::{ServerError, server::ServerState};

fn filter_from(query: &RecordQuery) -> Result<RecordFilter, ServerError> {
    Ok(RecordFilter::parse(
        query.cattle_id,
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )?)
}

pub async fn create_expense(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<engine::expenses::Model>), ServerError> {
    let new = NewExpense {
        date_recorded: util::parse_opt_date("date_recorded", payload.date_recorded.as_deref())?,
        category: payload.category,
        description: payload.description,
        amount: payload.amount,
        supplier: payload.supplier,
        receipt_number: payload.receipt_number,
        notes: payload.notes,
    };
    let created = state.engine.create_expense(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_expenses(
    State(state): State<ServerState>,
    Query(query): Query<RecordQuery>,
) -> Result<Json<Vec<engine::expenses::Model>>, ServerError> {
    let filter = filter_from(&query)?;
    Ok(Json(state.engine.list_expenses(&filter).await?))
}

pub async fn get_expense(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<engine::expenses::Model>, ServerError> {
    Ok(Json(state.engine.expense(id).await?))
}

pub async fn update_expense(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<ExpenseUpdate>,
) -> Result<Json<engine::expenses::Model>, ServerError> {
    let patch = ExpensePatch {
        category: payload.category,
        description: payload.description,
        amount: payload.amount,
        supplier: payload.supplier,
        receipt_number: payload.receipt_number,
        notes: payload.notes,
    };
    Ok(Json(state.engine.update_expense(id, patch).await?))
}

pub async fn remove_expense(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_expense(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_revenue(
    State(state): State<ServerState>,
    Json(payload): Json<RevenueNew>,
) -> Result<(StatusCode, Json<engine::revenue::Model>), ServerError> {
    let new = NewRevenue {
        date_recorded: util::parse_opt_date("date_recorded", payload.date_recorded.as_deref())?,
        source: payload.source,
        description: payload.description,
        amount: payload.amount,
        notes: payload.notes,
    };
    let created = state.engine.create_revenue(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_revenue(
    State(state): State<ServerState>,
    Query(query): Query<RecordQuery>,
) -> Result<Json<Vec<engine::revenue::Model>>, ServerError> {
    let filter = filter_from(&query)?;
    Ok(Json(state.engine.list_revenue(&filter).await?))
}

pub async fn get_revenue(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<engine::revenue::Model>, ServerError> {
    Ok(Json(state.engine.revenue(id).await?))
}

pub async fn update_revenue(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<RevenueUpdate>,
) -> Result<Json<engine::revenue::Model>, ServerError> {
    let patch = RevenuePatch {
        source: payload.source,
        description: payload.description,
        amount: payload.amount,
        notes: payload.notes,
    };
    Ok(Json(state.engine.update_revenue(id, patch).await?))
}

pub async fn remove_revenue(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_revenue(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Net income over an optional date window.
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<RecordQuery>,
) -> Result<Json<FinancialSummary>, ServerError> {
    let filter = filter_from(&query)?;
    Ok(Json(state.engine.financial_summary(&filter).await?))
}
