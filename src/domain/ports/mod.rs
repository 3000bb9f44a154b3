pub mod clock;
pub mod schedule_source;
