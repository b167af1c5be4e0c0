//! Grouped reductions over already-fetched records.
//!
//! Every function here is a pure, total computation over a snapshot of rows:
//! no I/O, no failure modes, and an empty input yields an empty output. The
//! route layer decides what an empty result means (usually a "no data"
//! response); that decision never lives here.
//!
//! Grouping goes through `BTreeMap` so the output order is deterministic:
//! ascending date for time series, ascending id for per-cattle summaries,
//! lexicographic for category-like keys.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::{cattle, expenses, feeding, milk_production, revenue};

/// Total liters produced on one calendar day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total_liters: f64,
}

/// Production totals for one head of cattle over a period.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CattleProductionSummary {
    pub cattle_id: i32,
    pub cattle_name: String,
    pub tag_number: String,
    pub total_liters: f64,
    pub average_daily_liters: f64,
    pub record_count: u64,
}

/// Sum of amounts under one free-text label (expense category or revenue
/// source).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub label: String,
    pub amount: f64,
}

/// Quantity and cost totals for one feed type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeedTypeTotal {
    pub feed_type: String,
    pub total_quantity_kg: f64,
    pub total_cost: f64,
}

/// Expense/revenue totals for a period. Missing sums are `0.0`, never
/// absent, so `net_income` is always computable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub total_expenses: f64,
    pub total_revenue: f64,
    pub net_income: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Sums `quantity_liters` per `date_recorded`, ascending by date.
pub fn milk_by_date(records: &[milk_production::Model]) -> Vec<DailyTotal> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *buckets.entry(record.date_recorded).or_insert(0.0) += record.quantity_liters;
    }

    buckets
        .into_iter()
        .map(|(date, total_liters)| DailyTotal { date, total_liters })
        .collect()
}

/// Sum, arithmetic mean and count of `quantity_liters` per cattle, joined
/// with the cattle's display name and tag number.
///
/// Records whose cattle is not in `herd` are skipped; with the store's
/// cascade delete that situation does not arise from persisted data.
pub fn milk_by_cattle(
    records: &[milk_production::Model],
    herd: &[cattle::Model],
) -> Vec<CattleProductionSummary> {
    let by_id: HashMap<i32, &cattle::Model> = herd.iter().map(|c| (c.id, c)).collect();

    let mut buckets: BTreeMap<i32, (f64, u64)> = BTreeMap::new();
    for record in records {
        let entry = buckets.entry(record.cattle_id).or_insert((0.0, 0));
        entry.0 += record.quantity_liters;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .filter_map(|(cattle_id, (total_liters, record_count))| {
            let head = by_id.get(&cattle_id)?;
            Some(CattleProductionSummary {
                cattle_id,
                cattle_name: head.name.clone(),
                tag_number: head.tag_number.clone(),
                total_liters,
                average_daily_liters: total_liters / record_count as f64,
                record_count,
            })
        })
        .collect()
}

/// Sums `amount` per expense category.
pub fn expenses_by_category(records: &[expenses::Model]) -> Vec<CategoryTotal> {
    sum_by_label(records.iter().map(|e| (e.category.as_str(), e.amount)))
}

/// Sums `amount` per revenue source.
pub fn revenue_by_source(records: &[revenue::Model]) -> Vec<CategoryTotal> {
    sum_by_label(records.iter().map(|r| (r.source.as_str(), r.amount)))
}

fn sum_by_label<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> Vec<CategoryTotal> {
    let mut buckets: BTreeMap<&str, f64> = BTreeMap::new();
    for (label, amount) in pairs {
        *buckets.entry(label).or_insert(0.0) += amount;
    }

    buckets
        .into_iter()
        .map(|(label, amount)| CategoryTotal {
            label: label.to_string(),
            amount,
        })
        .collect()
}

/// Sums `quantity_kg` and `total_cost` per feed type.
///
/// A record with no `total_cost` contributes zero to the cost sum but its
/// quantity still counts.
pub fn feeding_by_type(records: &[feeding::Model]) -> Vec<FeedTypeTotal> {
    let mut buckets: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for record in records {
        let entry = buckets.entry(record.feed_type.as_str()).or_insert((0.0, 0.0));
        entry.0 += record.quantity_kg;
        entry.1 += record.total_cost.unwrap_or(0.0);
    }

    buckets
        .into_iter()
        .map(|(feed_type, (total_quantity_kg, total_cost))| FeedTypeTotal {
            feed_type: feed_type.to_string(),
            total_quantity_kg,
            total_cost,
        })
        .collect()
}

/// Combines the two financial aggregates into net income for a period,
/// echoing the bounds that were applied.
pub fn financial_summary(
    expense_records: &[expenses::Model],
    revenue_records: &[revenue::Model],
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> FinancialSummary {
    let total_expenses: f64 = expense_records.iter().map(|e| e.amount).sum();
    let total_revenue: f64 = revenue_records.iter().map(|r| r.amount).sum();

    FinancialSummary {
        total_expenses,
        total_revenue,
        net_income: total_revenue - total_expenses,
        start_date,
        end_date,
    }
}
