//! Milk production API endpoints

use api_types::{
    milk::{MilkRecordNew, MilkRecordUpdate, MilkSummaryEntry},
    query::{PeriodQuery, RecordQuery},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{MilkRecordPatch, NewMilkRecord, RecordFilter, util};

use crate::{ServerError, server::ServerState};

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MilkRecordNew>,
) -> Result<(StatusCode, Json<engine::milk_production::Model>), ServerError> {
    let new = NewMilkRecord {
        cattle_id: payload.cattle_id,
        date_recorded: util::parse_opt_date("date_recorded", payload.date_recorded.as_deref())?,
        quantity_liters: payload.quantity_liters,
        quality_score: payload.quality_score,
        notes: payload.notes,
    };
    let created = state.engine.create_milk_record(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RecordQuery>,
) -> Result<Json<Vec<engine::milk_production::Model>>, ServerError> {
    let filter = RecordFilter::parse(
        query.cattle_id,
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )?;
    Ok(Json(state.engine.list_milk_records(&filter).await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<engine::milk_production::Model>, ServerError> {
    Ok(Json(state.engine.milk_record(id).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<MilkRecordUpdate>,
) -> Result<Json<engine::milk_production::Model>, ServerError> {
    let patch = MilkRecordPatch {
        quantity_liters: payload.quantity_liters,
        quality_score: payload.quality_score,
        notes: payload.notes,
    };
    Ok(Json(state.engine.update_milk_record(id, patch).await?))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_milk_record(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Per-cattle production over the last `days` days (default 30).
///
/// An empty window is an empty list, not an error; only the analytics
/// chart routes report missing data as 404.
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<MilkSummaryEntry>>, ServerError> {
    let days = query.days.unwrap_or(30);
    let filter = RecordFilter::last_days(days, query.cattle_id);

    let summaries = state.engine.milk_production_by_cattle(&filter).await?;
    let entries = summaries
        .into_iter()
        .map(|s| MilkSummaryEntry {
            cattle_id: s.cattle_id,
            cattle_name: s.cattle_name,
            tag_number: s.tag_number,
            total_liters: s.total_liters,
            average_daily_liters: s.average_daily_liters,
            record_count: s.record_count,
            period_days: days,
        })
        .collect();
    Ok(Json(entries))
}
