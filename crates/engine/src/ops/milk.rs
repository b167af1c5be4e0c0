//! Milk production record operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    EntityTrait, QueryOrder,
};

use crate::{
    Engine, ResultEngine,
    error::EngineError,
    filter::RecordFilter,
    milk_production::{self, MilkRecordPatch, NewMilkRecord},
    util,
};

impl Engine {
    /// Records a milking. The referenced cattle must exist.
    pub async fn create_milk_record(
        &self,
        new: NewMilkRecord,
    ) -> ResultEngine<milk_production::Model> {
        util::require_positive("quantity_liters", new.quantity_liters)?;
        self.cattle(new.cattle_id).await?;

        let now = Utc::now();
        let model = milk_production::ActiveModel {
            id: NotSet,
            cattle_id: Set(new.cattle_id),
            date_recorded: Set(new.date_recorded.unwrap_or_else(|| Utc::now().date_naive())),
            quantity_liters: Set(new.quantity_liters),
            quality_score: Set(new.quality_score),
            notes: Set(new.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&self.database).await?)
    }

    pub async fn milk_record(&self, id: i32) -> ResultEngine<milk_production::Model> {
        milk_production::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("milk record {id}")))
    }

    /// Lists milk records matching the filter, newest first.
    pub async fn list_milk_records(
        &self,
        filter: &RecordFilter,
    ) -> ResultEngine<Vec<milk_production::Model>> {
        let select = filter.apply(
            milk_production::Entity::find(),
            Some(milk_production::Column::CattleId),
            milk_production::Column::DateRecorded,
        );
        Ok(select
            .order_by_desc(milk_production::Column::DateRecorded)
            .all(&self.database)
            .await?)
    }

    pub async fn update_milk_record(
        &self,
        id: i32,
        patch: MilkRecordPatch,
    ) -> ResultEngine<milk_production::Model> {
        let model = self.milk_record(id).await?;
        let mut active: milk_production::ActiveModel = model.into();

        if let Some(quantity) = patch.quantity_liters {
            util::require_positive("quantity_liters", quantity)?;
            active.quantity_liters = Set(quantity);
        }
        if let Some(score) = patch.quality_score {
            active.quality_score = Set(Some(score));
        }
        if let Some(notes) = patch.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(&self.database).await?)
    }

    pub async fn delete_milk_record(&self, id: i32) -> ResultEngine<()> {
        let result = milk_production::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!("milk record {id}")));
        }
        Ok(())
    }
}
