use crate::application::services::{HolidayService, YearCache};
use crate::config::{Config, SourceKind};
use crate::domain::ports::clock::Clock;
use crate::domain::ports::schedule_source::ScheduleSource;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::providers::{LocalScheduleSource, RemoteScheduleSource};
use crate::infrastructure::runtime::LocalClock;
use std::sync::Arc;

pub fn build_schedule_source(
    config: &Config,
) -> Result<Arc<dyn ScheduleSource>, Box<dyn std::error::Error>> {
    let source: Arc<dyn ScheduleSource> = match config.source {
        SourceKind::Remote => {
            tracing::info!("Using remote schedule source {}", config.remote_url);
            if config.fetch_timeout.is_none() {
                tracing::warn!("No fetch timeout configured; a hung source blocks its year");
            }
            Arc::new(RemoteScheduleSource::new(
                config.remote_url.clone(),
                config.fetch_timeout,
            )?)
        }
        SourceKind::Local => {
            tracing::info!(
                "Using local schedule source {}",
                config.data_dir.display()
            );
            Arc::new(LocalScheduleSource::new(config.data_dir.clone()))
        }
    };
    Ok(source)
}

pub fn build_app_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let source = build_schedule_source(config)?;
    Ok(app_state_with(source, Arc::new(LocalClock::new())))
}

/// Wire a cache and resolver around the given source and clock.
pub fn app_state_with(source: Arc<dyn ScheduleSource>, clock: Arc<dyn Clock>) -> AppState {
    let cache = YearCache::new(source);
    AppState {
        holiday_service: HolidayService::new(cache),
        clock,
    }
}
