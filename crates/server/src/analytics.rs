//! Analytics API endpoints
//!
//! These reshape the engine's grouped summaries into the parallel-array
//! form charting frontends consume.

use api_types::{
    analytics::{
        CattleComparisonData, ExpenseBreakdown, FeedAnalysisData, FinancialOverviewData,
        RevenueBreakdown, TimeSeriesData,
    },
    query::PeriodQuery,
};
use axum::{
    Json,
    extract::{Query, State},
};
use engine::{
    CategoryTotal, CattleProductionSummary, DailyTotal, FeedTypeTotal, RecordFilter,
};

use crate::{ServerError, server::ServerState};

fn no_data() -> ServerError {
    ServerError::NoData("No data found for the specified period".to_string())
}

fn period_filter(query: &PeriodQuery) -> RecordFilter {
    RecordFilter::last_days(query.days.unwrap_or(30), query.cattle_id)
}

fn to_time_series(daily: &[DailyTotal]) -> TimeSeriesData {
    TimeSeriesData {
        dates: daily
            .iter()
            .map(|d| d.date.format("%Y-%m-%d").to_string())
            .collect(),
        quantities: daily.iter().map(|d| d.total_liters).collect(),
    }
}

fn to_comparison(summaries: &[CattleProductionSummary]) -> CattleComparisonData {
    CattleComparisonData {
        cattle_names: summaries
            .iter()
            .map(|s| format!("{} ({})", s.cattle_name, s.tag_number))
            .collect(),
        total_production: summaries.iter().map(|s| s.total_liters).collect(),
        average_daily: summaries.iter().map(|s| s.average_daily_liters).collect(),
    }
}

fn to_expense_breakdown(totals: &[CategoryTotal]) -> ExpenseBreakdown {
    ExpenseBreakdown {
        categories: totals.iter().map(|t| t.label.clone()).collect(),
        amounts: totals.iter().map(|t| t.amount).collect(),
    }
}

fn to_revenue_breakdown(totals: &[CategoryTotal]) -> RevenueBreakdown {
    RevenueBreakdown {
        sources: totals.iter().map(|t| t.label.clone()).collect(),
        amounts: totals.iter().map(|t| t.amount).collect(),
    }
}

fn to_feed_analysis(groups: &[FeedTypeTotal]) -> FeedAnalysisData {
    FeedAnalysisData {
        feed_types: groups.iter().map(|g| g.feed_type.clone()).collect(),
        quantities: groups.iter().map(|g| g.total_quantity_kg).collect(),
        costs: groups.iter().map(|g| g.total_cost).collect(),
    }
}

pub async fn milk_production(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<TimeSeriesData>, ServerError> {
    let daily = state
        .engine
        .milk_production_by_date(&period_filter(&query))
        .await?;
    if daily.is_empty() {
        return Err(no_data());
    }
    Ok(Json(to_time_series(&daily)))
}

pub async fn cattle_comparison(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<CattleComparisonData>, ServerError> {
    let summaries = state
        .engine
        .milk_production_by_cattle(&period_filter(&query))
        .await?;
    if summaries.is_empty() {
        return Err(no_data());
    }
    Ok(Json(to_comparison(&summaries)))
}

/// Expense and revenue breakdowns side by side. Unlike the other analytics
/// routes this never 404s: either half may simply come back empty.
pub async fn financial_overview(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<FinancialOverviewData>, ServerError> {
    let filter = period_filter(&query);
    let expenses = state.engine.expense_breakdown(&filter).await?;
    let revenue = state.engine.revenue_breakdown(&filter).await?;
    Ok(Json(FinancialOverviewData {
        expenses: to_expense_breakdown(&expenses),
        revenue: to_revenue_breakdown(&revenue),
    }))
}

pub async fn feeding_cost_analysis(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<FeedAnalysisData>, ServerError> {
    let groups = state
        .engine
        .feeding_analysis(&period_filter(&query))
        .await?;
    if groups.is_empty() {
        return Err(no_data());
    }
    Ok(Json(to_feed_analysis(&groups)))
}
