use crate::domain::entities::{ClassifiedDate, DateRecord, DateType};
use std::collections::HashMap;

/// Assign a [`DateType`] to each record, in source order.
///
/// Holidays and their makeup workdays share a name. A workday is "after" its
/// holiday when the most recent record seen under that name was an off-day;
/// calendar distance plays no part.
pub fn classify(records: &[DateRecord]) -> Vec<ClassifiedDate> {
    // holiday name -> whether the last record under it was an off-day
    let mut last_situation: HashMap<&str, bool> = HashMap::new();

    records
        .iter()
        .map(|record| {
            let date_type = if record.is_off_day {
                DateType::Holiday
            } else {
                match last_situation.get(record.name.as_str()) {
                    Some(true) => DateType::WorkDayAfterHoliday,
                    Some(false) | None => DateType::WorkDayBeforeHoliday,
                }
            };
            last_situation.insert(record.name.as_str(), record.is_off_day);
            ClassifiedDate::explicit(record, date_type)
        })
        .collect()
}
