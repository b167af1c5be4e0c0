//! The module contains the representation of a farm expense.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_recorded: Date,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub supplier: Option<String>,
    pub receipt_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields for a new expense. `date_recorded` defaults to today.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub date_recorded: Option<NaiveDate>,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub supplier: Option<String>,
    pub receipt_number: Option<String>,
    pub notes: Option<String>,
}

/// Partial update. The recorded date is fixed at creation.
#[derive(Clone, Debug, Default)]
pub struct ExpensePatch {
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub supplier: Option<String>,
    pub receipt_number: Option<String>,
    pub notes: Option<String>,
}
