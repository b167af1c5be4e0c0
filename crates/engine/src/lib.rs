//! Farm record-keeping core.
//!
//! The engine owns an explicit database handle and exposes, per entity,
//! create/get/list/update/delete plus the reporting operations that turn
//! filtered record sets into grouped summaries. Aggregations themselves are
//! pure functions in [`aggregate`]; the ops fetch a snapshot of rows and
//! reduce it in memory.

use sea_orm::DatabaseConnection;

pub use aggregate::{
    CategoryTotal, CattleProductionSummary, DailyTotal, FeedTypeTotal, FinancialSummary,
};
pub use cattle::{CattlePatch, CattleStatus, Gender, NewCattle};
pub use error::EngineError;
pub use expenses::{ExpensePatch, NewExpense};
pub use feeding::{FeedingPatch, NewFeedingRecord};
pub use filter::RecordFilter;
pub use milk_production::{MilkRecordPatch, NewMilkRecord};
pub use revenue::{NewRevenue, RevenuePatch};

pub mod aggregate;
pub mod cattle;
pub mod expenses;
pub mod feeding;
pub mod filter;
pub mod milk_production;
pub mod revenue;
pub mod util;

mod error;
mod ops;

type ResultEngine<T> = Result<T, EngineError>;

/// The record store and reporting engine.
///
/// Holds the database handle every operation runs against; there is no
/// implicit global session.
#[derive(Clone, Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}
