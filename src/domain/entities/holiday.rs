use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A single entry of a published yearly schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRecord {
    pub date: NaiveDate,
    pub name: String,
    pub is_off_day: bool,
}

impl DateRecord {
    pub fn new(date: NaiveDate, name: impl Into<String>, is_off_day: bool) -> Self {
        Self {
            date,
            name: name.into(),
            is_off_day,
        }
    }
}

/// Semantic classification of a calendar date.
///
/// Serialized as its numeric code (`0`..=`4`), which is also what the plain-text
/// responses print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateType {
    PlainWorkDay,
    PlainOffDay,
    Holiday,
    WorkDayBeforeHoliday,
    WorkDayAfterHoliday,
}

impl DateType {
    pub fn code(self) -> u8 {
        match self {
            DateType::PlainWorkDay => 0,
            DateType::PlainOffDay => 1,
            DateType::Holiday => 2,
            DateType::WorkDayBeforeHoliday => 3,
            DateType::WorkDayAfterHoliday => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(DateType::PlainWorkDay),
            1 => Some(DateType::PlainOffDay),
            2 => Some(DateType::Holiday),
            3 => Some(DateType::WorkDayBeforeHoliday),
            4 => Some(DateType::WorkDayAfterHoliday),
            _ => None,
        }
    }

    /// Default classification for a date with no published record.
    pub fn for_weekday(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DateType::PlainOffDay,
            _ => DateType::PlainWorkDay,
        }
    }

    pub fn is_off_day(self) -> bool {
        matches!(self, DateType::Holiday | DateType::PlainOffDay)
    }

    /// Reduce to the two-valued workday/off-day view.
    pub fn collapse(self) -> Self {
        if self.is_off_day() {
            DateType::PlainOffDay
        } else {
            DateType::PlainWorkDay
        }
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for DateType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for DateType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        DateType::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown date type code {}", code)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDate {
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type")]
    pub date_type: DateType,
}

impl ClassifiedDate {
    pub fn explicit(record: &DateRecord, date_type: DateType) -> Self {
        Self {
            date: record.date,
            name: record.name.clone(),
            date_type,
        }
    }

    /// Synthesized record for a date the schedule does not mention.
    pub fn implicit(date: NaiveDate) -> Self {
        Self {
            date,
            name: String::new(),
            date_type: DateType::for_weekday(date),
        }
    }
}

/// Composite year/month/day key; orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Classified explicit records of one year. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSchedule {
    year: i32,
    days: BTreeMap<CalendarDay, ClassifiedDate>,
}

impl YearSchedule {
    /// Build the entry for `year`. Records dated in another year are dropped.
    pub fn new(year: i32, classified: impl IntoIterator<Item = ClassifiedDate>) -> Self {
        let mut days = BTreeMap::new();
        for entry in classified {
            if entry.date.year() != year {
                tracing::warn!(
                    "Skipping {} ({}) published in the {} schedule",
                    entry.date,
                    entry.name,
                    year
                );
                continue;
            }
            days.insert(CalendarDay::from(entry.date), entry);
        }
        Self { year, days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&ClassifiedDate> {
        self.days.get(&CalendarDay::from(date))
    }

    /// Explicit records of `month`, ascending by date.
    pub fn month(&self, month: u32) -> Vec<ClassifiedDate> {
        let start = CalendarDay {
            year: self.year,
            month,
            day: 0,
        };
        let end = CalendarDay {
            year: self.year,
            month,
            day: u32::MAX,
        };
        self.days.range(start..=end).map(|(_, v)| v.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedDate> {
        self.days.values()
    }
}
