use async_trait::async_trait;
use holiday_cn::domain::errors::{HolidayError, HolidayResult};
use holiday_cn::domain::ports::schedule_source::ScheduleSource;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory schedule source that counts fetches.
#[derive(Default)]
pub struct StaticSource {
    documents: HashMap<i32, Vec<u8>>,
    delays: HashMap<i32, Duration>,
    failures_remaining: AtomicUsize,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: i32, document: impl Into<String>) -> Self {
        self.documents.insert(year, document.into().into_bytes());
        self
    }

    /// Delay every fetch of `year` before answering.
    pub fn with_delay(mut self, year: i32, delay: Duration) -> Self {
        self.delays.insert(year, delay);
        self
    }

    /// Fail the next `count` fetches as unavailable.
    pub fn failing_first(self, count: usize) -> Self {
        self.failures_remaining.store(count, Ordering::SeqCst);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScheduleSource for StaticSource {
    async fn fetch(&self, year: i32) -> HolidayResult<Vec<u8>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&year) {
            tokio::time::sleep(*delay).await;
        }

        let failing = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(HolidayError::SourceUnavailable(
                "temporarily unreachable".to_string(),
            ));
        }

        self.documents.get(&year).cloned().ok_or_else(|| {
            HolidayError::SourceUnavailable(format!("no schedule published for {}", year))
        })
    }

    fn describe(&self, year: i32) -> String {
        format!("memory://{}", year)
    }
}
