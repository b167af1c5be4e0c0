//! The module contains the representation of a feeding record.
//!
//! `total_cost` is supplied by the caller, never derived from
//! `quantity_kg * cost_per_unit` by the store.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "feeding")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cattle_id: i32,
    pub date_recorded: Date,
    pub feed_type: String,
    pub quantity_kg: f64,
    pub cost_per_unit: Option<f64>,
    pub total_cost: Option<f64>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cattle::Entity",
        from = "Column::CattleId",
        to = "super::cattle::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Cattle,
}

impl Related<super::cattle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cattle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields for a new feeding record. `date_recorded` defaults to today.
#[derive(Clone, Debug)]
pub struct NewFeedingRecord {
    pub cattle_id: i32,
    pub date_recorded: Option<NaiveDate>,
    pub feed_type: String,
    pub quantity_kg: f64,
    pub cost_per_unit: Option<f64>,
    pub total_cost: Option<f64>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
}

/// Partial update. The cattle reference and the recorded date are fixed.
#[derive(Clone, Debug, Default)]
pub struct FeedingPatch {
    pub feed_type: Option<String>,
    pub quantity_kg: Option<f64>,
    pub cost_per_unit: Option<f64>,
    pub total_cost: Option<f64>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
}
