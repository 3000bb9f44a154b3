use crate::domain::errors::HolidayResult;
use async_trait::async_trait;

/// Supplies the raw schedule document of a year.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Fetch the raw bytes of `year`'s schedule.
    ///
    /// Fails with `SourceUnavailable` when the year is not published or the
    /// source cannot be reached.
    async fn fetch(&self, year: i32) -> HolidayResult<Vec<u8>>;

    /// Where the schedule comes from, for logging.
    fn describe(&self, year: i32) -> String;
}
