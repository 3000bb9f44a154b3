use crate::domain::entities::YearSchedule;
use crate::domain::errors::HolidayResult;
use crate::domain::ports::schedule_source::ScheduleSource;
use crate::domain::services::{classify, parse};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

type YearSlot = Arc<OnceCell<Arc<YearSchedule>>>;

/// Lazily populated store of classified years.
///
/// Every year is fetched, parsed and classified at most once for the lifetime
/// of the cache, even under concurrent callers. Concurrent callers of the same
/// year wait on a single population; other years are not blocked by it.
/// A failed population leaves nothing behind, so the next caller starts over.
/// Entries are never evicted or refreshed.
#[derive(Clone)]
pub struct YearCache {
    source: Arc<dyn ScheduleSource>,
    years: Arc<Mutex<HashMap<i32, YearSlot>>>,
}

impl YearCache {
    pub fn new(source: Arc<dyn ScheduleSource>) -> Self {
        Self {
            source,
            years: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Return the classified schedule of `year`, populating it on first use.
    pub async fn get_or_load(&self, year: i32) -> HolidayResult<Arc<YearSchedule>> {
        let slot = self.slot(year).await;

        if let Some(schedule) = slot.get() {
            metrics::counter!("holiday_cache_hits_total").increment(1);
            tracing::debug!("Holiday schedule cache hit for {}", year);
            return Ok(schedule.clone());
        }

        slot.get_or_try_init(|| self.populate(year))
            .await
            .map(Arc::clone)
    }

    /// Years whose schedule is currently cached, ascending.
    pub async fn cached_years(&self) -> Vec<i32> {
        let years = self.years.lock().await;
        let mut cached: Vec<i32> = years
            .iter()
            .filter(|(_, slot)| slot.initialized())
            .map(|(year, _)| *year)
            .collect();
        cached.sort_unstable();
        cached
    }

    pub async fn is_cached(&self, year: i32) -> bool {
        let years = self.years.lock().await;
        years.get(&year).is_some_and(|slot| slot.initialized())
    }

    async fn slot(&self, year: i32) -> YearSlot {
        let mut years = self.years.lock().await;
        years.entry(year).or_default().clone()
    }

    async fn populate(&self, year: i32) -> HolidayResult<Arc<YearSchedule>> {
        tracing::info!(
            "Loading holiday schedule for {} from {}",
            year,
            self.source.describe(year)
        );

        match self.load(year).await {
            Ok(schedule) => {
                metrics::counter!("holiday_cache_populations_total").increment(1);
                tracing::info!(
                    "Cached holiday schedule for {} ({} records)",
                    year,
                    schedule.len()
                );
                Ok(Arc::new(schedule))
            }
            Err(e) => {
                let e = e.scoped_to_year(year);
                metrics::counter!("holiday_cache_load_failures_total").increment(1);
                tracing::warn!("{}", e);
                Err(e)
            }
        }
    }

    async fn load(&self, year: i32) -> HolidayResult<YearSchedule> {
        let raw = self.source.fetch(year).await?;
        let records = parse(&raw, year)?;
        Ok(YearSchedule::new(year, classify(&records)))
    }
}
