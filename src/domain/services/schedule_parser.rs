use crate::domain::entities::DateRecord;
use crate::domain::errors::HolidayError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Yearly schedule document as published by the source.
#[derive(Debug, Deserialize)]
struct ScheduleDocument {
    days: Vec<RawDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDay {
    name: String,
    date: String,
    is_off_day: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("cannot decode schedule document: {0}")]
    Decode(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("duplicate date: {0}")]
    DuplicateDate(String),
}

impl From<ParseError> for HolidayError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Decode(_) => HolidayError::MalformedSource(err.to_string()),
            ParseError::InvalidDate(_) | ParseError::DuplicateDate(_) => {
                HolidayError::InvalidDate(err.to_string())
            }
        }
    }
}

/// Decode one year's schedule into records, in source order.
///
/// Order is preserved as published: classification depends on it.
pub fn parse(raw: &[u8], year: i32) -> Result<Vec<DateRecord>, ParseError> {
    let document: ScheduleDocument =
        serde_json::from_slice(raw).map_err(|e| ParseError::Decode(e.to_string()))?;

    let mut seen = HashSet::with_capacity(document.days.len());
    let mut records = Vec::with_capacity(document.days.len());

    for day in document.days {
        let date = parse_date(&day.date)?;
        if !seen.insert(date) {
            tracing::warn!("Duplicate date {} in the {} schedule", day.date, year);
            return Err(ParseError::DuplicateDate(day.date));
        }
        records.push(DateRecord::new(date, day.name, day.is_off_day));
    }

    tracing::debug!("Parsed {} records from the {} schedule", records.len(), year);
    Ok(records)
}

fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate(value.to_string());

    let components: Vec<&str> = value.split('-').collect();
    let [year, month, day] = components.as_slice() else {
        return Err(invalid());
    };

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
