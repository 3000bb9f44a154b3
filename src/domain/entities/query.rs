use super::holiday::{ClassifiedDate, DateType};
use crate::domain::errors::{HolidayError, HolidayResult};
use chrono::NaiveDate;

/// A query in one of the three accepted forms: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateQuery {
    Year(i32),
    Month { year: i32, month: u32 },
    Day(NaiveDate),
}

impl DateQuery {
    pub fn parse(input: &str) -> HolidayResult<Self> {
        let unrecognized = || HolidayError::NotFound(format!("unrecognized date: {}", input));

        let parts: Vec<&str> = input.split('-').collect();
        if !parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(unrecognized());
        }

        let widths: Vec<usize> = parts.iter().map(|p| p.len()).collect();
        let number = |s: &str| s.parse::<u32>().map_err(|_| unrecognized());

        match widths.as_slice() {
            [4] => Ok(DateQuery::Year(number(parts[0])? as i32)),
            [4, 2] => {
                let month = number(parts[1])?;
                if !(1..=12).contains(&month) {
                    return Err(unrecognized());
                }
                Ok(DateQuery::Month {
                    year: number(parts[0])? as i32,
                    month,
                })
            }
            [4, 2, 2] => NaiveDate::from_ymd_opt(
                number(parts[0])? as i32,
                number(parts[1])?,
                number(parts[2])?,
            )
            .map(DateQuery::Day)
            .ok_or_else(unrecognized),
            _ => Err(unrecognized()),
        }
    }
}

/// Response detail level selected by the `verbose` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Low,
    Medium,
    High,
}

impl Verbosity {
    /// `"0"`, `"1"`, `"2"`; anything else is low.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("1") => Verbosity::Medium,
            Some("2") => Verbosity::High,
            _ => Verbosity::Low,
        }
    }
}

/// Shape of a query result after applying verbosity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryView {
    /// Single result at low or medium verbosity.
    Scalar(DateType),
    Records(Vec<ClassifiedDate>),
}

impl QueryView {
    pub fn project(records: Vec<ClassifiedDate>, verbosity: Verbosity) -> Self {
        if records.len() != 1 {
            return QueryView::Records(records);
        }
        match verbosity {
            Verbosity::Low => QueryView::Scalar(records[0].date_type.collapse()),
            Verbosity::Medium => QueryView::Scalar(records[0].date_type),
            Verbosity::High => QueryView::Records(records),
        }
    }
}
