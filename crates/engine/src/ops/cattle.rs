//! Cattle registry operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, EntityTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

use crate::{
    Engine, ResultEngine,
    cattle::{self, CattlePatch, NewCattle},
    error::EngineError,
    feeding, milk_production, util,
};

impl Engine {
    /// Registers a new head of cattle.
    ///
    /// The tag number must be unique: the store checks before inserting and
    /// additionally maps a unique-index violation from the insert itself, so
    /// two concurrent creates with one tag yield exactly one conflict.
    pub async fn create_cattle(&self, new: NewCattle) -> ResultEngine<cattle::Model> {
        util::require_non_empty("tag_number", &new.tag_number)?;
        util::require_non_empty("name", &new.name)?;
        util::require_non_empty("breed", &new.breed)?;

        let taken = cattle::Entity::find()
            .filter(cattle::Column::TagNumber.eq(new.tag_number.as_str()))
            .one(&self.database)
            .await?
            .is_some();
        if taken {
            return Err(EngineError::ExistingKey(new.tag_number));
        }

        let now = Utc::now();
        let model = cattle::ActiveModel {
            id: NotSet,
            tag_number: Set(new.tag_number.clone()),
            name: Set(new.name),
            breed: Set(new.breed),
            date_of_birth: Set(new.date_of_birth),
            gender: Set(new.gender.as_str().to_string()),
            weight: Set(new.weight),
            health_status: Set(new.health_status.unwrap_or_else(|| "Healthy".to_string())),
            location: Set(new.location),
            purchase_date: Set(new.purchase_date),
            purchase_price: Set(new.purchase_price),
            current_status: Set(new.current_status.unwrap_or_default().as_str().to_string()),
            notes: Set(new.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match model.insert(&self.database).await {
            Ok(created) => Ok(created),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(EngineError::ExistingKey(new.tag_number))
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Return one head of cattle by id.
    pub async fn cattle(&self, id: i32) -> ResultEngine<cattle::Model> {
        cattle::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("cattle {id}")))
    }

    /// Return the whole herd, ascending by id.
    pub async fn list_cattle(&self) -> ResultEngine<Vec<cattle::Model>> {
        Ok(cattle::Entity::find()
            .order_by_asc(cattle::Column::Id)
            .all(&self.database)
            .await?)
    }

    /// Applies the present patch fields and touches `updated_at`.
    pub async fn update_cattle(&self, id: i32, patch: CattlePatch) -> ResultEngine<cattle::Model> {
        let model = self.cattle(id).await?;
        let mut active: cattle::ActiveModel = model.into();

        if let Some(name) = patch.name {
            util::require_non_empty("name", &name)?;
            active.name = Set(name);
        }
        if let Some(breed) = patch.breed {
            util::require_non_empty("breed", &breed)?;
            active.breed = Set(breed);
        }
        if let Some(weight) = patch.weight {
            active.weight = Set(Some(weight));
        }
        if let Some(health_status) = patch.health_status {
            active.health_status = Set(health_status);
        }
        if let Some(location) = patch.location {
            active.location = Set(Some(location));
        }
        if let Some(status) = patch.current_status {
            active.current_status = Set(status.as_str().to_string());
        }
        if let Some(notes) = patch.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(&self.database).await?)
    }

    /// Deletes a head of cattle and its dependent records.
    ///
    /// The cascade is explicit: milk and feeding rows go first, then the
    /// cattle row, all inside one transaction.
    pub async fn delete_cattle(&self, id: i32) -> ResultEngine<()> {
        let db_tx = self.database.begin().await?;

        let exists = cattle::Entity::find_by_id(id).one(&db_tx).await?.is_some();
        if !exists {
            return Err(EngineError::KeyNotFound(format!("cattle {id}")));
        }

        milk_production::Entity::delete_many()
            .filter(milk_production::Column::CattleId.eq(id))
            .exec(&db_tx)
            .await?;
        feeding::Entity::delete_many()
            .filter(feeding::Column::CattleId.eq(id))
            .exec(&db_tx)
            .await?;
        cattle::Entity::delete_by_id(id).exec(&db_tx).await?;

        db_tx.commit().await?;
        Ok(())
    }
}
