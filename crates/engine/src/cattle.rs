//! The module contains the representation of a head of cattle.
//!
//! A cattle row owns its milk production and feeding records: deleting the
//! cattle removes the dependent rows in the same database transaction.

use chrono::{Datelike, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Biological sex of the animal, stored as its canonical string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl TryFrom<&str> for Gender {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            other => Err(EngineError::Validation(format!(
                "invalid gender: {other} (expected Male or Female)"
            ))),
        }
    }
}

/// Lifecycle status of the animal on the farm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CattleStatus {
    #[default]
    Active,
    Sold,
    Deceased,
    Quarantined,
}

impl CattleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Sold => "Sold",
            Self::Deceased => "Deceased",
            Self::Quarantined => "Quarantined",
        }
    }
}

impl TryFrom<&str> for CattleStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Active" => Ok(Self::Active),
            "Sold" => Ok(Self::Sold),
            "Deceased" => Ok(Self::Deceased),
            "Quarantined" => Ok(Self::Quarantined),
            other => Err(EngineError::Validation(format!(
                "invalid current_status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "cattle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub tag_number: String,
    pub name: String,
    pub breed: String,
    pub date_of_birth: Date,
    pub gender: String,
    pub weight: Option<f64>,
    pub health_status: String,
    pub location: Option<String>,
    pub purchase_date: Option<Date>,
    pub purchase_price: Option<f64>,
    pub current_status: String,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl Model {
    /// Age in whole calendar months at `today`.
    pub fn age_in_months(&self, today: NaiveDate) -> i32 {
        let years = today.year() - self.date_of_birth.year();
        years * 12 + today.month() as i32 - self.date_of_birth.month() as i32
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::milk_production::Entity")]
    MilkRecords,
    #[sea_orm(has_many = "super::feeding::Entity")]
    FeedingRecords,
}

impl Related<super::milk_production::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MilkRecords.def()
    }
}

impl Related<super::feeding::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeedingRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields required to register a new head of cattle.
#[derive(Clone, Debug)]
pub struct NewCattle {
    pub tag_number: String,
    pub name: String,
    pub breed: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub weight: Option<f64>,
    pub health_status: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub current_status: Option<CattleStatus>,
    pub notes: Option<String>,
}

/// Partial update. Only the listed descriptive fields are mutable; identity
/// and tag number are fixed at creation.
#[derive(Clone, Debug, Default)]
pub struct CattlePatch {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub weight: Option<f64>,
    pub health_status: Option<String>,
    pub location: Option<String>,
    pub current_status: Option<CattleStatus>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_round_trips() {
        assert_eq!(Gender::try_from("Female").unwrap(), Gender::Female);
        assert!(Gender::try_from("female").is_err());
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(CattleStatus::default(), CattleStatus::Active);
        assert_eq!(CattleStatus::try_from("Quarantined").unwrap().as_str(), "Quarantined");
    }

    #[test]
    fn age_counts_whole_months() {
        let model = Model {
            id: 1,
            tag_number: "GB0001".to_string(),
            name: "Bella".to_string(),
            breed: "Holstein".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2020, 3, 15).unwrap(),
            gender: Gender::Female.as_str().to_string(),
            weight: None,
            health_status: "Healthy".to_string(),
            location: None,
            purchase_date: None,
            purchase_price: None,
            current_status: CattleStatus::Active.as_str().to_string(),
            notes: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(model.age_in_months(today), 50);
    }
}
