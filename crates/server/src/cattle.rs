//! Cattle registry API endpoints

use api_types::cattle::{CattleNew, CattleUpdate};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{CattlePatch, CattleStatus, Gender, NewCattle, util};

use crate::{ServerError, server::ServerState};

fn to_new_cattle(payload: CattleNew) -> Result<NewCattle, ServerError> {
    Ok(NewCattle {
        tag_number: payload.tag_number,
        name: payload.name,
        breed: payload.breed,
        date_of_birth: util::parse_date("date_of_birth", &payload.date_of_birth)?,
        gender: Gender::try_from(payload.gender.as_str())?,
        weight: payload.weight,
        health_status: payload.health_status,
        location: payload.location,
        purchase_date: util::parse_opt_date("purchase_date", payload.purchase_date.as_deref())?,
        purchase_price: payload.purchase_price,
        current_status: payload
            .current_status
            .as_deref()
            .map(CattleStatus::try_from)
            .transpose()?,
        notes: payload.notes,
    })
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CattleNew>,
) -> Result<(StatusCode, Json<engine::cattle::Model>), ServerError> {
    let created = state.engine.create_cattle(to_new_cattle(payload)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<engine::cattle::Model>>, ServerError> {
    Ok(Json(state.engine.list_cattle().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<engine::cattle::Model>, ServerError> {
    Ok(Json(state.engine.cattle(id).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<CattleUpdate>,
) -> Result<Json<engine::cattle::Model>, ServerError> {
    let patch = CattlePatch {
        name: payload.name,
        breed: payload.breed,
        weight: payload.weight,
        health_status: payload.health_status,
        location: payload.location,
        current_status: payload
            .current_status
            .as_deref()
            .map(CattleStatus::try_from)
            .transpose()?,
        notes: payload.notes,
    };
    Ok(Json(state.engine.update_cattle(id, patch).await?))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_cattle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
