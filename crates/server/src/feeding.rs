//! Feeding record API endpoints

use api_types::{
    feeding::{FeedingNew, FeedingUpdate},
    query::RecordQuery,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{FeedingPatch, NewFeedingRecord, RecordFilter, util};

use crate::{ServerError, server::ServerState};

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FeedingNew>,
) -> Result<(StatusCode, Json<engine::feeding::Model>), ServerError> {
    let new = NewFeedingRecord {
        cattle_id: payload.cattle_id,
        date_recorded: util::parse_opt_date("date_recorded", payload.date_recorded.as_deref())?,
        feed_type: payload.feed_type,
        quantity_kg: payload.quantity_kg,
        cost_per_unit: payload.cost_per_unit,
        total_cost: payload.total_cost,
        supplier: payload.supplier,
        notes: payload.notes,
    };
    let created = state.engine.create_feeding_record(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RecordQuery>,
) -> Result<Json<Vec<engine::feeding::Model>>, ServerError> {
    let filter = RecordFilter::parse(
        query.cattle_id,
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )?;
    Ok(Json(state.engine.list_feeding_records(&filter).await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<engine::feeding::Model>, ServerError> {
    Ok(Json(state.engine.feeding_record(id).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<FeedingUpdate>,
) -> Result<Json<engine::feeding::Model>, ServerError> {
    let patch = FeedingPatch {
        feed_type: payload.feed_type,
        quantity_kg: payload.quantity_kg,
        cost_per_unit: payload.cost_per_unit,
        total_cost: payload.total_cost,
        supplier: payload.supplier,
        notes: payload.notes,
    };
    Ok(Json(state.engine.update_feeding_record(id, patch).await?))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_feeding_record(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
