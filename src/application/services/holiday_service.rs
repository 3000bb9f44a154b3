use crate::application::services::year_cache::YearCache;
use crate::domain::entities::{ClassifiedDate, DateQuery};
use crate::domain::errors::{HolidayError, HolidayResult};
use chrono::{Datelike, NaiveDate};

/// Answers day, month and year queries from the [`YearCache`].
#[derive(Clone)]
pub struct HolidayService {
    cache: YearCache,
}

impl HolidayService {
    pub fn new(cache: YearCache) -> Self {
        Self { cache }
    }

    pub async fn resolve(&self, query: DateQuery) -> HolidayResult<Vec<ClassifiedDate>> {
        match query {
            DateQuery::Year(year) => self.resolve_year(year).await,
            DateQuery::Month { year, month } => self.resolve_month(year, month).await,
            DateQuery::Day(date) => self.resolve_day(date).await,
        }
    }

    /// Always exactly one record. Dates the schedule does not mention fall back
    /// to the weekday default; a year that fails to load is an error.
    pub async fn resolve_day(&self, date: NaiveDate) -> HolidayResult<Vec<ClassifiedDate>> {
        let schedule = self.cache.get_or_load(date.year()).await?;

        let entry = schedule
            .get(date)
            .cloned()
            .unwrap_or_else(|| ClassifiedDate::implicit(date));

        Ok(vec![entry])
    }

    /// Published records of the month, ascending. Unlisted days are not filled in.
    pub async fn resolve_month(&self, year: i32, month: u32) -> HolidayResult<Vec<ClassifiedDate>> {
        if !(1..=12).contains(&month) {
            return Err(HolidayError::InvalidDate(format!(
                "month {} is out of range",
                month
            )));
        }

        let schedule = self.cache.get_or_load(year).await?;
        Ok(schedule.month(month))
    }

    /// Published records of the whole year, in month order.
    pub async fn resolve_year(&self, year: i32) -> HolidayResult<Vec<ClassifiedDate>> {
        let mut records = Vec::new();
        for month in 1..=12 {
            records.extend(self.resolve_month(year, month).await?);
        }
        Ok(records)
    }
}
