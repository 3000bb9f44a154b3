use crate::domain::errors::{HolidayError, HolidayResult};
use crate::domain::ports::schedule_source::ScheduleSource;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Reads yearly schedules from `<data_dir>/<year>.json`.
#[derive(Clone)]
pub struct LocalScheduleSource {
    data_dir: PathBuf,
}

impl LocalScheduleSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, year: i32) -> PathBuf {
        self.data_dir.join(format!("{}.json", year))
    }
}

#[async_trait]
impl ScheduleSource for LocalScheduleSource {
    async fn fetch(&self, year: i32) -> HolidayResult<Vec<u8>> {
        let path = self.path_for(year);
        fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => HolidayError::SourceUnavailable(format!(
                "no schedule published for {} at {}",
                year,
                path.display()
            )),
            _ => HolidayError::SourceUnavailable(format!(
                "failed to read {}: {}",
                path.display(),
                e
            )),
        })
    }

    fn describe(&self, year: i32) -> String {
        self.path_for(year).display().to_string()
    }
}
