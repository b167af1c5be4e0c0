//! The module contains the representation of a revenue record.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "revenue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_recorded: Date,
    pub source: String,
    pub description: String,
    pub amount: f64,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields for a new revenue record. `date_recorded` defaults to today.
#[derive(Clone, Debug)]
pub struct NewRevenue {
    pub date_recorded: Option<NaiveDate>,
    pub source: String,
    pub description: String,
    pub amount: f64,
    pub notes: Option<String>,
}

/// Partial update. The recorded date is fixed at creation.
#[derive(Clone, Debug, Default)]
pub struct RevenuePatch {
    pub source: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub notes: Option<String>,
}
