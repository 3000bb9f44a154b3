use crate::domain::errors::{HolidayError, HolidayResult};
use crate::domain::ports::schedule_source::ScheduleSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Downloads yearly schedules over HTTP.
///
/// The URL template carries a `{year}` placeholder, e.g.
/// `https://raw.githubusercontent.com/NateScarlet/holiday-cn/master/{year}.json`.
#[derive(Clone)]
pub struct RemoteScheduleSource {
    url_template: String,
    http_client: Client,
}

impl RemoteScheduleSource {
    /// Without a timeout a hung server blocks callers of that year indefinitely.
    pub fn new(
        url_template: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url_template: url_template.into(),
            http_client: builder.build()?,
        })
    }

    pub fn url_for(&self, year: i32) -> String {
        self.url_template.replace("{year}", &year.to_string())
    }
}

#[async_trait]
impl ScheduleSource for RemoteScheduleSource {
    async fn fetch(&self, year: i32) -> HolidayResult<Vec<u8>> {
        let url = self.url_for(year);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            let msg = if e.is_timeout() {
                format!("request to {} timed out: {}", url, e)
            } else if e.is_connect() {
                format!("connection to {} failed: {}", url, e)
            } else {
                format!("request to {} failed: {}", url, e)
            };
            HolidayError::SourceUnavailable(msg)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HolidayError::SourceUnavailable(format!(
                "no schedule published for {} ({} returned HTTP {})",
                year,
                url,
                status.as_u16()
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            HolidayError::SourceUnavailable(format!("failed to read body from {}: {}", url, e))
        })?;

        Ok(body.to_vec())
    }

    fn describe(&self, year: i32) -> String {
        self.url_for(year)
    }
}
