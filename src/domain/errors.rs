use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolidayError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Malformed schedule: {0}")]
    MalformedSource(String),
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl HolidayError {
    /// Stable name of the error kind, independent of the message.
    pub fn kind(&self) -> &'static str {
        match self {
            HolidayError::InvalidDate(_) => "InvalidDate",
            HolidayError::MalformedSource(_) => "MalformedSource",
            HolidayError::SourceUnavailable(_) => "SourceUnavailable",
            HolidayError::NotFound(_) => "NotFound",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HolidayError::InvalidDate(msg)
            | HolidayError::MalformedSource(msg)
            | HolidayError::SourceUnavailable(msg)
            | HolidayError::NotFound(msg) => msg,
        }
    }

    /// Prefix the message with the year being loaded, keeping the kind.
    pub fn scoped_to_year(self, year: i32) -> Self {
        let wrap = |msg: String| format!("unable to load holiday data for {}: {}", year, msg);
        match self {
            HolidayError::InvalidDate(msg) => HolidayError::InvalidDate(wrap(msg)),
            HolidayError::MalformedSource(msg) => HolidayError::MalformedSource(wrap(msg)),
            HolidayError::SourceUnavailable(msg) => HolidayError::SourceUnavailable(wrap(msg)),
            HolidayError::NotFound(msg) => HolidayError::NotFound(wrap(msg)),
        }
    }
}

pub type HolidayResult<T> = Result<T, HolidayError>;
