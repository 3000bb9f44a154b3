use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    /// Current date in the local calendar.
    fn today(&self) -> NaiveDate;
}
