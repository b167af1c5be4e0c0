//! Record filtering.
//!
//! A [`RecordFilter`] narrows a query over any of the four time-series
//! entities by cattle and by an inclusive date window. Absent bounds mean
//! "no constraint". The cattle bound only applies to entities that carry a
//! `cattle_id` column (milk production and feeding).

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Select};

use crate::{ResultEngine, util};

/// Optional constraints shared by every record query.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RecordFilter {
    pub cattle_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl RecordFilter {
    /// Builds a filter from raw query-string values.
    ///
    /// Dates must be `YYYY-MM-DD`; a malformed value fails with a validation
    /// error naming the field. An inverted window (`end_date < start_date`)
    /// is accepted and simply matches nothing.
    pub fn parse(
        cattle_id: Option<i32>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ResultEngine<Self> {
        Ok(Self {
            cattle_id,
            start_date: util::parse_opt_date("start_date", start_date)?,
            end_date: util::parse_opt_date("end_date", end_date)?,
        })
    }

    /// "From `days` ago until today", the convenience window used by the
    /// summary and analytics endpoints.
    pub fn last_days(days: u64, cattle_id: Option<i32>) -> Self {
        Self::last_days_from(Utc::now().date_naive(), days, cattle_id)
    }

    pub fn last_days_from(today: NaiveDate, days: u64, cattle_id: Option<i32>) -> Self {
        Self {
            cattle_id,
            start_date: today.checked_sub_days(Days::new(days)),
            end_date: None,
        }
    }

    /// Attaches the filter predicates to an entity select.
    ///
    /// Entities without a cattle relation pass `None` for `cattle_col`.
    pub(crate) fn apply<E>(
        &self,
        mut select: Select<E>,
        cattle_col: Option<E::Column>,
        date_col: E::Column,
    ) -> Select<E>
    where
        E: EntityTrait,
    {
        if let (Some(col), Some(id)) = (cattle_col, self.cattle_id) {
            select = select.filter(col.eq(id));
        }
        if let Some(start) = self.start_date {
            select = select.filter(date_col.gte(start));
        }
        if let Some(end) = self.end_date {
            select = select.filter(date_col.lte(end));
        }
        select
    }
}
