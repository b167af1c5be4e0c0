//! Reporting operations: fetch a filtered snapshot, reduce it in memory.
//!
//! Each of these is a thin pairing of a store query with one of the pure
//! aggregations in [`crate::aggregate`].

use sea_orm::EntityTrait;

use crate::{
    Engine, ResultEngine, aggregate,
    aggregate::{CategoryTotal, CattleProductionSummary, DailyTotal, FeedTypeTotal},
    cattle, expenses, feeding,
    filter::RecordFilter,
    milk_production, revenue,
};

impl Engine {
    /// Liters per day over the filtered window, ascending by date.
    pub async fn milk_production_by_date(
        &self,
        filter: &RecordFilter,
    ) -> ResultEngine<Vec<DailyTotal>> {
        let records = filter
            .apply(
                milk_production::Entity::find(),
                Some(milk_production::Column::CattleId),
                milk_production::Column::DateRecorded,
            )
            .all(&self.database)
            .await?;
        Ok(aggregate::milk_by_date(&records))
    }

    /// Per-cattle production totals over the filtered window, joined with
    /// the herd register for display names and tags.
    pub async fn milk_production_by_cattle(
        &self,
        filter: &RecordFilter,
    ) -> ResultEngine<Vec<CattleProductionSummary>> {
        let records = filter
            .apply(
                milk_production::Entity::find(),
                Some(milk_production::Column::CattleId),
                milk_production::Column::DateRecorded,
            )
            .all(&self.database)
            .await?;
        let herd = cattle::Entity::find().all(&self.database).await?;
        Ok(aggregate::milk_by_cattle(&records, &herd))
    }

    /// Quantity and cost per feed type over the filtered window.
    pub async fn feeding_analysis(
        &self,
        filter: &RecordFilter,
    ) -> ResultEngine<Vec<FeedTypeTotal>> {
        let records = filter
            .apply(
                feeding::Entity::find(),
                Some(feeding::Column::CattleId),
                feeding::Column::DateRecorded,
            )
            .all(&self.database)
            .await?;
        Ok(aggregate::feeding_by_type(&records))
    }

    /// Expense totals per category over the filtered window.
    pub async fn expense_breakdown(
        &self,
        filter: &RecordFilter,
    ) -> ResultEngine<Vec<CategoryTotal>> {
        let records = filter
            .apply(expenses::Entity::find(), None, expenses::Column::DateRecorded)
            .all(&self.database)
            .await?;
        Ok(aggregate::expenses_by_category(&records))
    }

    /// Revenue totals per source over the filtered window.
    pub async fn revenue_breakdown(
        &self,
        filter: &RecordFilter,
    ) -> ResultEngine<Vec<CategoryTotal>> {
        let records = filter
            .apply(revenue::Entity::find(), None, revenue::Column::DateRecorded)
            .all(&self.database)
            .await?;
        Ok(aggregate::revenue_by_source(&records))
    }
}
