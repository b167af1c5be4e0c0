//! Expense and revenue operations, plus the period financial summary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    EntityTrait, QueryOrder,
};

use crate::{
    Engine, ResultEngine, aggregate,
    error::EngineError,
    expenses::{self, ExpensePatch, NewExpense},
    filter::RecordFilter,
    revenue::{self, NewRevenue, RevenuePatch},
    util,
};

impl Engine {
    pub async fn create_expense(&self, new: NewExpense) -> ResultEngine<expenses::Model> {
        util::require_non_empty("category", &new.category)?;
        util::require_non_empty("description", &new.description)?;
        util::require_positive("amount", new.amount)?;

        let now = Utc::now();
        let model = expenses::ActiveModel {
            id: NotSet,
            date_recorded: Set(new.date_recorded.unwrap_or_else(|| Utc::now().date_naive())),
            category: Set(new.category),
            description: Set(new.description),
            amount: Set(new.amount),
            supplier: Set(new.supplier),
            receipt_number: Set(new.receipt_number),
            notes: Set(new.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&self.database).await?)
    }

    pub async fn expense(&self, id: i32) -> ResultEngine<expenses::Model> {
        expenses::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("expense {id}")))
    }

    /// Lists expenses in the date window, newest first.
    pub async fn list_expenses(&self, filter: &RecordFilter) -> ResultEngine<Vec<expenses::Model>> {
        let select = filter.apply(
            expenses::Entity::find(),
            None,
            expenses::Column::DateRecorded,
        );
        Ok(select
            .order_by_desc(expenses::Column::DateRecorded)
            .all(&self.database)
            .await?)
    }

    pub async fn update_expense(&self, id: i32, patch: ExpensePatch) -> ResultEngine<expenses::Model> {
        let model = self.expense(id).await?;
        let mut active: expenses::ActiveModel = model.into();

        if let Some(category) = patch.category {
            util::require_non_empty("category", &category)?;
            active.category = Set(category);
        }
        if let Some(description) = patch.description {
            util::require_non_empty("description", &description)?;
            active.description = Set(description);
        }
        if let Some(amount) = patch.amount {
            util::require_positive("amount", amount)?;
            active.amount = Set(amount);
        }
        if let Some(supplier) = patch.supplier {
            active.supplier = Set(Some(supplier));
        }
        if let Some(receipt) = patch.receipt_number {
            active.receipt_number = Set(Some(receipt));
        }
        if let Some(notes) = patch.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(&self.database).await?)
    }

    pub async fn delete_expense(&self, id: i32) -> ResultEngine<()> {
        let result = expenses::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!("expense {id}")));
        }
        Ok(())
    }

    pub async fn create_revenue(&self, new: NewRevenue) -> ResultEngine<revenue::Model> {
        util::require_non_empty("source", &new.source)?;
        util::require_non_empty("description", &new.description)?;
        util::require_positive("amount", new.amount)?;

        let now = Utc::now();
        let model = revenue::ActiveModel {
            id: NotSet,
            date_recorded: Set(new.date_recorded.unwrap_or_else(|| Utc::now().date_naive())),
            source: Set(new.source),
            description: Set(new.description),
            amount: Set(new.amount),
            notes: Set(new.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&self.database).await?)
    }

    pub async fn revenue(&self, id: i32) -> ResultEngine<revenue::Model> {
        revenue::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("revenue {id}")))
    }

    /// Lists revenue records in the date window, newest first.
    pub async fn list_revenue(&self, filter: &RecordFilter) -> ResultEngine<Vec<revenue::Model>> {
        let select = filter.apply(revenue::Entity::find(), None, revenue::Column::DateRecorded);
        Ok(select
            .order_by_desc(revenue::Column::DateRecorded)
            .all(&self.database)
            .await?)
    }

    pub async fn update_revenue(&self, id: i32, patch: RevenuePatch) -> ResultEngine<revenue::Model> {
        let model = self.revenue(id).await?;
        let mut active: revenue::ActiveModel = model.into();

        if let Some(source) = patch.source {
            util::require_non_empty("source", &source)?;
            active.source = Set(source);
        }
        if let Some(description) = patch.description {
            util::require_non_empty("description", &description)?;
            active.description = Set(description);
        }
        if let Some(amount) = patch.amount {
            util::require_positive("amount", amount)?;
            active.amount = Set(amount);
        }
        if let Some(notes) = patch.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(&self.database).await?)
    }

    pub async fn delete_revenue(&self, id: i32) -> ResultEngine<()> {
        let result = revenue::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!("revenue {id}")));
        }
        Ok(())
    }

    /// Expense and revenue totals for the filtered period. Empty ranges
    /// yield zeros, never an error.
    pub async fn financial_summary(
        &self,
        filter: &RecordFilter,
    ) -> ResultEngine<aggregate::FinancialSummary> {
        let expense_rows = filter
            .apply(expenses::Entity::find(), None, expenses::Column::DateRecorded)
            .all(&self.database)
            .await?;
        let revenue_rows = filter
            .apply(revenue::Entity::find(), None, revenue::Column::DateRecorded)
            .all(&self.database)
            .await?;

        Ok(aggregate::financial_summary(
            &expense_rows,
            &revenue_rows,
            filter.start_date,
            filter.end_date,
        ))
    }
}
