use serde::{Deserialize, Serialize};

pub mod query {
    use super::*;

    /// Common query-string parameters for record listings.
    ///
    /// Dates are `YYYY-MM-DD` strings; the server parses and validates them.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct RecordQuery {
        pub cattle_id: Option<i32>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    /// Query parameters for period-based summaries ("the last N days").
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PeriodQuery {
        pub cattle_id: Option<i32>,
        /// Window length in days, counted back from today. Defaults to 30.
        pub days: Option<u64>,
    }
}

pub mod cattle {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CattleNew {
        pub tag_number: String,
        pub name: String,
        pub breed: String,
        /// `YYYY-MM-DD`.
        pub date_of_birth: String,
        /// `Male` or `Female`.
        pub gender: String,
        pub weight: Option<f64>,
        pub health_status: Option<String>,
        pub location: Option<String>,
        /// `YYYY-MM-DD`.
        pub purchase_date: Option<String>,
        pub purchase_price: Option<f64>,
        /// `Active`, `Sold`, `Deceased` or `Quarantined`. Defaults to `Active`.
        pub current_status: Option<String>,
        pub notes: Option<String>,
    }

    /// Partial update: only the fields present are written.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CattleUpdate {
        pub name: Option<String>,
        pub breed: Option<String>,
        pub weight: Option<f64>,
        pub health_status: Option<String>,
        pub location: Option<String>,
        pub current_status: Option<String>,
        pub notes: Option<String>,
    }
}

pub mod milk {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MilkRecordNew {
        pub cattle_id: i32,
        /// `YYYY-MM-DD`. Defaults to today when absent.
        pub date_recorded: Option<String>,
        pub quantity_liters: f64,
        pub quality_score: Option<f64>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct MilkRecordUpdate {
        pub quantity_liters: Option<f64>,
        pub quality_score: Option<f64>,
        pub notes: Option<String>,
    }

    /// Per-cattle production summary over a period.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MilkSummaryEntry {
        pub cattle_id: i32,
        pub cattle_name: String,
        pub tag_number: String,
        pub total_liters: f64,
        pub average_daily_liters: f64,
        pub record_count: u64,
        pub period_days: u64,
    }
}

pub mod feeding {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FeedingNew {
        pub cattle_id: i32,
        /// `YYYY-MM-DD`. Defaults to today when absent.
        pub date_recorded: Option<String>,
        pub feed_type: String,
        pub quantity_kg: f64,
        pub cost_per_unit: Option<f64>,
        /// Stored as supplied, never derived from quantity and unit cost.
        pub total_cost: Option<f64>,
        pub supplier: Option<String>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct FeedingUpdate {
        pub feed_type: Option<String>,
        pub quantity_kg: Option<f64>,
        pub cost_per_unit: Option<f64>,
        pub total_cost: Option<f64>,
        pub supplier: Option<String>,
        pub notes: Option<String>,
    }
}

pub mod financial {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        /// `YYYY-MM-DD`. Defaults to today when absent.
        pub date_recorded: Option<String>,
        pub category: String,
        pub description: String,
        pub amount: f64,
        pub supplier: Option<String>,
        pub receipt_number: Option<String>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        pub category: Option<String>,
        pub description: Option<String>,
        pub amount: Option<f64>,
        pub supplier: Option<String>,
        pub receipt_number: Option<String>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RevenueNew {
        /// `YYYY-MM-DD`. Defaults to today when absent.
        pub date_recorded: Option<String>,
        pub source: String,
        pub description: String,
        pub amount: f64,
        pub notes: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct RevenueUpdate {
        pub source: Option<String>,
        pub description: Option<String>,
        pub amount: Option<f64>,
        pub notes: Option<String>,
    }
}

pub mod analytics {
    use super::*;

    /// Daily production totals, shaped as parallel arrays for charting.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TimeSeriesData {
        /// `YYYY-MM-DD`, ascending.
        pub dates: Vec<String>,
        pub quantities: Vec<f64>,
    }

    /// Per-animal comparison, parallel arrays indexed by animal.
    ///
    /// Names are rendered as `"Name (TAG)"`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CattleComparisonData {
        pub cattle_names: Vec<String>,
        pub total_production: Vec<f64>,
        pub average_daily: Vec<f64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseBreakdown {
        pub categories: Vec<String>,
        pub amounts: Vec<f64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RevenueBreakdown {
        pub sources: Vec<String>,
        pub amounts: Vec<f64>,
    }

    /// Expense and revenue breakdowns side by side. Either half may be
    /// empty; the route never 404s on this shape.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FinancialOverviewData {
        pub expenses: ExpenseBreakdown,
        pub revenue: RevenueBreakdown,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FeedAnalysisData {
        pub feed_types: Vec<String>,
        pub quantities: Vec<f64>,
        pub costs: Vec<f64>,
    }
}

pub mod health {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HealthResponse {
        pub status: String,
        /// RFC 3339 UTC timestamp of the response.
        pub timestamp: String,
    }
}
