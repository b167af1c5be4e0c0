use chrono::NaiveDate;
use sea_orm::Database;

use engine::{
    CattlePatch, Engine, EngineError, Gender, MilkRecordPatch, NewCattle, NewExpense,
    NewFeedingRecord, NewMilkRecord, NewRevenue, RecordFilter,
};
use migration::MigratorTrait;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn new_cattle(tag: &str, name: &str) -> NewCattle {
    NewCattle {
        tag_number: tag.to_string(),
        name: name.to_string(),
        breed: "Holstein".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2021, 4, 2).unwrap(),
        gender: Gender::Female,
        weight: Some(540.0),
        health_status: None,
        location: None,
        purchase_date: None,
        purchase_price: None,
        current_status: None,
        notes: None,
    }
}

fn milk(cattle_id: i32, date: NaiveDate, liters: f64) -> NewMilkRecord {
    NewMilkRecord {
        cattle_id,
        date_recorded: Some(date),
        quantity_liters: liters,
        quality_score: None,
        notes: None,
    }
}

fn feeding(cattle_id: i32, feed_type: &str, kg: f64, total_cost: Option<f64>) -> NewFeedingRecord {
    NewFeedingRecord {
        cattle_id,
        date_recorded: Some(day(1)),
        feed_type: feed_type.to_string(),
        quantity_kg: kg,
        cost_per_unit: None,
        total_cost,
        supplier: None,
        notes: None,
    }
}

fn expense(date: NaiveDate, category: &str, amount: f64) -> NewExpense {
    NewExpense {
        date_recorded: Some(date),
        category: category.to_string(),
        description: "test expense".to_string(),
        amount,
        supplier: None,
        receipt_number: None,
        notes: None,
    }
}

fn revenue(date: NaiveDate, source: &str, amount: f64) -> NewRevenue {
    NewRevenue {
        date_recorded: Some(date),
        source: source.to_string(),
        description: "test revenue".to_string(),
        amount,
        notes: None,
    }
}

#[tokio::test]
async fn create_cattle_assigns_identity_and_defaults() {
    let engine = engine_with_db().await;

    let created = engine.create_cattle(new_cattle("GB0001", "Bella")).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.health_status, "Healthy");
    assert_eq!(created.current_status, "Active");
    assert_eq!(created.gender, "Female");

    let fetched = engine.cattle(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_tag_number_conflicts() {
    let engine = engine_with_db().await;

    engine.create_cattle(new_cattle("GB0001", "Bella")).await.unwrap();
    let err = engine
        .create_cattle(new_cattle("GB0001", "Luna"))
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::ExistingKey("GB0001".to_string()));
}

#[tokio::test]
async fn milk_record_requires_existing_cattle() {
    let engine = engine_with_db().await;

    let err = engine.create_milk_record(milk(999, day(1), 20.0)).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn milk_record_requires_positive_quantity() {
    let engine = engine_with_db().await;
    let head = engine.create_cattle(new_cattle("GB0001", "Bella")).await.unwrap();

    let err = engine
        .create_milk_record(milk(head.id, day(1), 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn update_applies_patch_fields_only() {
    let engine = engine_with_db().await;
    let head = engine.create_cattle(new_cattle("GB0001", "Bella")).await.unwrap();

    let updated = engine
        .update_cattle(
            head.id,
            CattlePatch {
                name: Some("Bella II".to_string()),
                weight: Some(560.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Bella II");
    assert_eq!(updated.weight, Some(560.0));
    // Untouched fields survive, identity fields cannot change.
    assert_eq!(updated.tag_number, "GB0001");
    assert_eq!(updated.breed, head.breed);
    assert!(updated.updated_at >= head.updated_at);
}

#[tokio::test]
async fn update_missing_record_is_not_found() {
    let engine = engine_with_db().await;

    let err = engine
        .update_milk_record(42, MilkRecordPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn cascade_delete_removes_dependent_records() {
    let engine = engine_with_db().await;
    let head = engine.create_cattle(new_cattle("GB0001", "Bella")).await.unwrap();

    for d in 1..=3 {
        engine.create_milk_record(milk(head.id, day(d), 10.0)).await.unwrap();
    }
    engine.create_feeding_record(feeding(head.id, "Hay", 12.0, None)).await.unwrap();
    engine.create_feeding_record(feeding(head.id, "Grain", 4.0, None)).await.unwrap();

    engine.delete_cattle(head.id).await.unwrap();

    let by_cattle = RecordFilter {
        cattle_id: Some(head.id),
        ..Default::default()
    };
    assert!(engine.list_milk_records(&by_cattle).await.unwrap().is_empty());
    assert!(engine.list_feeding_records(&by_cattle).await.unwrap().is_empty());
    assert!(matches!(
        engine.cattle(head.id).await.unwrap_err(),
        EngineError::KeyNotFound(_)
    ));
}

#[tokio::test]
async fn delete_missing_cattle_is_not_found() {
    let engine = engine_with_db().await;
    let err = engine.delete_cattle(7).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn two_day_production_scenario() {
    let engine = engine_with_db().await;
    let head = engine.create_cattle(new_cattle("GB0001", "Bella")).await.unwrap();

    engine.create_milk_record(milk(head.id, day(1), 20.0)).await.unwrap();
    engine.create_milk_record(milk(head.id, day(2), 30.0)).await.unwrap();

    let window = RecordFilter {
        cattle_id: None,
        start_date: Some(day(1)),
        end_date: Some(day(2)),
    };

    let daily = engine.milk_production_by_date(&window).await.unwrap();
    assert_eq!(daily.len(), 2);
    assert_eq!((daily[0].date, daily[0].total_liters), (day(1), 20.0));
    assert_eq!((daily[1].date, daily[1].total_liters), (day(2), 30.0));

    let per_cattle = engine.milk_production_by_cattle(&window).await.unwrap();
    assert_eq!(per_cattle.len(), 1);
    assert_eq!(per_cattle[0].cattle_name, "Bella");
    assert_eq!(per_cattle[0].tag_number, "GB0001");
    assert_eq!(per_cattle[0].total_liters, 50.0);
    assert_eq!(per_cattle[0].average_daily_liters, 25.0);
    assert_eq!(per_cattle[0].record_count, 2);
}

#[tokio::test]
async fn inverted_window_matches_nothing() {
    let engine = engine_with_db().await;
    let head = engine.create_cattle(new_cattle("GB0001", "Bella")).await.unwrap();
    engine.create_milk_record(milk(head.id, day(5), 18.0)).await.unwrap();

    let inverted = RecordFilter::parse(None, Some("2024-06-30"), Some("2024-06-01")).unwrap();

    assert!(engine.list_milk_records(&inverted).await.unwrap().is_empty());
    assert!(engine.milk_production_by_date(&inverted).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_ordered_newest_first() {
    let engine = engine_with_db().await;
    let head = engine.create_cattle(new_cattle("GB0001", "Bella")).await.unwrap();
    engine.create_milk_record(milk(head.id, day(1), 10.0)).await.unwrap();
    engine.create_milk_record(milk(head.id, day(3), 12.0)).await.unwrap();
    engine.create_milk_record(milk(head.id, day(2), 11.0)).await.unwrap();

    let records = engine
        .list_milk_records(&RecordFilter::default())
        .await
        .unwrap();
    let dates: Vec<_> = records.iter().map(|r| r.date_recorded).collect();
    assert_eq!(dates, vec![day(3), day(2), day(1)]);
}

#[tokio::test]
async fn feeding_analysis_handles_missing_costs() {
    let engine = engine_with_db().await;
    let head = engine.create_cattle(new_cattle("GB0001", "Bella")).await.unwrap();
    engine.create_feeding_record(feeding(head.id, "Hay", 100.0, Some(55.0))).await.unwrap();
    engine.create_feeding_record(feeding(head.id, "Hay", 40.0, None)).await.unwrap();

    let groups = engine
        .feeding_analysis(&RecordFilter::default())
        .await
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].total_quantity_kg, 140.0);
    assert_eq!(groups[0].total_cost, 55.0);
}

#[tokio::test]
async fn financial_summary_is_zero_without_records() {
    let engine = engine_with_db().await;

    let summary = engine
        .financial_summary(&RecordFilter::default())
        .await
        .unwrap();
    assert_eq!(summary.total_expenses, 0.0);
    assert_eq!(summary.total_revenue, 0.0);
    assert_eq!(summary.net_income, 0.0);
}

#[tokio::test]
async fn financial_summary_respects_the_window() {
    let engine = engine_with_db().await;

    engine.create_expense(expense(day(5), "Feed", 300.0)).await.unwrap();
    engine.create_expense(expense(day(25), "Labor", 999.0)).await.unwrap();
    engine.create_revenue(revenue(day(10), "Milk", 800.0)).await.unwrap();

    let window = RecordFilter::parse(None, Some("2024-06-01"), Some("2024-06-15")).unwrap();
    let summary = engine.financial_summary(&window).await.unwrap();

    assert_eq!(summary.total_expenses, 300.0);
    assert_eq!(summary.total_revenue, 800.0);
    assert_eq!(summary.net_income, 500.0);
    assert_eq!(summary.start_date, Some(day(1)));
    assert_eq!(summary.end_date, Some(day(15)));
}

#[tokio::test]
async fn expense_breakdown_groups_by_category() {
    let engine = engine_with_db().await;
    engine.create_expense(expense(day(1), "Feed", 100.0)).await.unwrap();
    engine.create_expense(expense(day(2), "Feed", 50.0)).await.unwrap();
    engine.create_expense(expense(day(3), "Veterinary", 75.0)).await.unwrap();

    let groups = engine
        .expense_breakdown(&RecordFilter::default())
        .await
        .unwrap();
    assert_eq!(groups.len(), 2);
    let feed = groups.iter().find(|g| g.label == "Feed").unwrap();
    assert_eq!(feed.amount, 150.0);
}
