pub mod holiday_service;
pub mod year_cache;

pub use holiday_service::HolidayService;
pub use year_cache::YearCache;
