//! Initial schema migration - creates all tables from scratch.
//!
//! The schema for Herdbook:
//!
//! - `cattle`: the herd register, one row per animal
//! - `milk_production`: per-day milking records, owned by a cattle row
//! - `feeding`: feed given to an animal, with optional costs
//! - `expenses`: farm expenses, no cattle relation
//! - `revenue`: farm income, no cattle relation

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Cattle {
    Table,
    Id,
    TagNumber,
    Name,
    Breed,
    DateOfBirth,
    Gender,
    Weight,
    HealthStatus,
    Location,
    PurchaseDate,
    PurchasePrice,
    CurrentStatus,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum MilkProduction {
    Table,
    Id,
    CattleId,
    DateRecorded,
    QuantityLiters,
    QualityScore,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Feeding {
    Table,
    Id,
    CattleId,
    DateRecorded,
    FeedType,
    QuantityKg,
    CostPerUnit,
    TotalCost,
    Supplier,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    DateRecorded,
    Category,
    Description,
    Amount,
    Supplier,
    ReceiptNumber,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Revenue {
    Table,
    Id,
    DateRecorded,
    Source,
    Description,
    Amount,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cattle::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cattle::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Cattle::TagNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Cattle::Name).string().not_null())
                    .col(ColumnDef::new(Cattle::Breed).string().not_null())
                    .col(ColumnDef::new(Cattle::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Cattle::Gender).string().not_null())
                    .col(ColumnDef::new(Cattle::Weight).double())
                    .col(ColumnDef::new(Cattle::HealthStatus).string().not_null())
                    .col(ColumnDef::new(Cattle::Location).string())
                    .col(ColumnDef::new(Cattle::PurchaseDate).date())
                    .col(ColumnDef::new(Cattle::PurchasePrice).double())
                    .col(ColumnDef::new(Cattle::CurrentStatus).string().not_null())
                    .col(ColumnDef::new(Cattle::Notes).text())
                    .col(ColumnDef::new(Cattle::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Cattle::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MilkProduction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MilkProduction::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MilkProduction::CattleId).integer().not_null())
                    .col(
                        ColumnDef::new(MilkProduction::DateRecorded)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MilkProduction::QuantityLiters)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MilkProduction::QualityScore).double())
                    .col(ColumnDef::new(MilkProduction::Notes).text())
                    .col(
                        ColumnDef::new(MilkProduction::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MilkProduction::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-milk_production-cattle_id")
                            .from(MilkProduction::Table, MilkProduction::CattleId)
                            .to(Cattle::Table, Cattle::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-milk_production-cattle_id-date_recorded")
                    .table(MilkProduction::Table)
                    .col(MilkProduction::CattleId)
                    .col(MilkProduction::DateRecorded)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Feeding::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feeding::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Feeding::CattleId).integer().not_null())
                    .col(ColumnDef::new(Feeding::DateRecorded).date().not_null())
                    .col(ColumnDef::new(Feeding::FeedType).string().not_null())
                    .col(ColumnDef::new(Feeding::QuantityKg).double().not_null())
                    .col(ColumnDef::new(Feeding::CostPerUnit).double())
                    .col(ColumnDef::new(Feeding::TotalCost).double())
                    .col(ColumnDef::new(Feeding::Supplier).string())
                    .col(ColumnDef::new(Feeding::Notes).text())
                    .col(ColumnDef::new(Feeding::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Feeding::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-feeding-cattle_id")
                            .from(Feeding::Table, Feeding::CattleId)
                            .to(Cattle::Table, Cattle::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-feeding-cattle_id-date_recorded")
                    .table(Feeding::Table)
                    .col(Feeding::CattleId)
                    .col(Feeding::DateRecorded)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::DateRecorded).date().not_null())
                    .col(ColumnDef::new(Expenses::Category).string().not_null())
                    .col(ColumnDef::new(Expenses::Description).string().not_null())
                    .col(ColumnDef::new(Expenses::Amount).double().not_null())
                    .col(ColumnDef::new(Expenses::Supplier).string())
                    .col(ColumnDef::new(Expenses::ReceiptNumber).string())
                    .col(ColumnDef::new(Expenses::Notes).text())
                    .col(ColumnDef::new(Expenses::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Expenses::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-date_recorded")
                    .table(Expenses::Table)
                    .col(Expenses::DateRecorded)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Revenue::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Revenue::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Revenue::DateRecorded).date().not_null())
                    .col(ColumnDef::new(Revenue::Source).string().not_null())
                    .col(ColumnDef::new(Revenue::Description).string().not_null())
                    .col(ColumnDef::new(Revenue::Amount).double().not_null())
                    .col(ColumnDef::new(Revenue::Notes).text())
                    .col(ColumnDef::new(Revenue::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Revenue::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-revenue-date_recorded")
                    .table(Revenue::Table)
                    .col(Revenue::DateRecorded)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Revenue::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Feeding::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MilkProduction::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cattle::Table).to_owned())
            .await?;
        Ok(())
    }
}
