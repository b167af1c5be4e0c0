//! The module contains the representation of a milk production record.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "milk_production")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cattle_id: i32,
    pub date_recorded: Date,
    pub quantity_liters: f64,
    pub quality_score: Option<f64>,
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

/// Fields for a new milk record. `date_recorded` defaults to today.
#[derive(Clone, Debug)]
pub struct NewMilkRecord {
    pub cattle_id: i32,
    pub date_recorded: Option<NaiveDate>,
    pub quantity_liters: f64,
    pub quality_score: Option<f64>,
    pub notes: Option<String>,
}

/// Partial update. The cattle reference and the recorded date are fixed.
#[derive(Clone, Debug, Default)]
pub struct MilkRecordPatch {
    pub quantity_liters: Option<f64>,
    pub quality_score: Option<f64>,
    pub notes: Option<String>,
}
