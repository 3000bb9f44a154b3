use crate::application::services::HolidayService;
use crate::domain::ports::clock::Clock;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub holiday_service: HolidayService,
    pub clock: Arc<dyn Clock>,
}
