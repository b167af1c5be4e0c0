use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{router, run, run_with_listener, spawn_with_listener};

mod analytics;
mod cattle;
mod feeding;
mod financial;
mod milk;
mod server;

pub mod types {
    pub mod query {
        pub use api_types::query::{PeriodQuery, RecordQuery};
    }

    pub mod cattle {
        pub use api_types::cattle::{CattleNew, CattleUpdate};
    }

    pub mod milk {
        pub use api_types::milk::{MilkRecordNew, MilkRecordUpdate, MilkSummaryEntry};
    }

    pub mod feeding {
        pub use api_types::feeding::{FeedingNew, FeedingUpdate};
    }

    pub mod financial {
        pub use api_types::financial::{ExpenseNew, ExpenseUpdate, RevenueNew, RevenueUpdate};
        pub use engine::FinancialSummary;
    }

    pub mod analytics {
        pub use api_types::analytics::{
            CattleComparisonData, ExpenseBreakdown, FeedAnalysisData, FinancialOverviewData,
            RevenueBreakdown, TimeSeriesData,
        };
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
    /// The requested report has no records in the window.
    NoData(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
            ServerError::NoData(err) => (StatusCode::NOT_FOUND, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_validation_maps_to_422() {
        let res = ServerError::from(EngineError::Validation("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_conflict_maps_to_409() {
        let res = ServerError::from(EngineError::ExistingKey("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn no_data_maps_to_404() {
        let res = ServerError::NoData("nothing".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
