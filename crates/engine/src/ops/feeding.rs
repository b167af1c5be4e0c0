//! Feeding record operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    EntityTrait, QueryOrder,
};

use crate::{
    Engine, ResultEngine,
    error::EngineError,
    feeding::{self, FeedingPatch, NewFeedingRecord},
    filter::RecordFilter,
    util,
};

impl Engine {
    /// Records a feeding. The referenced cattle must exist. `total_cost` is
    /// stored as supplied, never recomputed.
    pub async fn create_feeding_record(
        &self,
        new: NewFeedingRecord,
    ) -> ResultEngine<feeding::Model> {
        util::require_non_empty("feed_type", &new.feed_type)?;
        util::require_positive("quantity_kg", new.quantity_kg)?;
        self.cattle(new.cattle_id).await?;

        let now = Utc::now();
        let model = feeding::ActiveModel {
            id: NotSet,
            cattle_id: Set(new.cattle_id),
            date_recorded: Set(new.date_recorded.unwrap_or_else(|| Utc::now().date_naive())),
            feed_type: Set(new.feed_type),
            quantity_kg: Set(new.quantity_kg),
            cost_per_unit: Set(new.cost_per_unit),
            total_cost: Set(new.total_cost),
            supplier: Set(new.supplier),
            notes: Set(new.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&self.database).await?)
    }

    pub async fn feeding_record(&self, id: i32) -> ResultEngine<feeding::Model> {
        feeding::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("feeding record {id}")))
    }

    /// Lists feeding records matching the filter, newest first.
    pub async fn list_feeding_records(
        &self,
        filter: &RecordFilter,
    ) -> ResultEngine<Vec<feeding::Model>> {
        let select = filter.apply(
            feeding::Entity::find(),
            Some(feeding::Column::CattleId),
            feeding::Column::DateRecorded,
        );
        Ok(select
            .order_by_desc(feeding::Column::DateRecorded)
            .all(&self.database)
            .await?)
    }

    pub async fn update_feeding_record(
        &self,
        id: i32,
        patch: FeedingPatch,
    ) -> ResultEngine<feeding::Model> {
        let model = self.feeding_record(id).await?;
        let mut active: feeding::ActiveModel = model.into();

        if let Some(feed_type) = patch.feed_type {
            util::require_non_empty("feed_type", &feed_type)?;
            active.feed_type = Set(feed_type);
        }
        if let Some(quantity) = patch.quantity_kg {
            util::require_positive("quantity_kg", quantity)?;
            active.quantity_kg = Set(quantity);
        }
        if let Some(cost) = patch.cost_per_unit {
            active.cost_per_unit = Set(Some(cost));
        }
        if let Some(total) = patch.total_cost {
            active.total_cost = Set(Some(total));
        }
        if let Some(supplier) = patch.supplier {
            active.supplier = Set(Some(supplier));
        }
        if let Some(notes) = patch.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(&self.database).await?)
    }

    pub async fn delete_feeding_record(&self, id: i32) -> ResultEngine<()> {
        let result = feeding::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!("feeding record {id}")));
        }
        Ok(())
    }
}
