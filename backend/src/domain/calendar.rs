//! Calendar dates attached to exercises.
//!
//! Exercise dates carry no time component. Callers supply dates as
//! `YYYY-MM-DD`, as RFC 3339 timestamps (the UTC date is kept), in the
//! rendered `Www Mmm DD YYYY` form, or in common calendar spellings such as
//! `2023/01/15`, `01/15/2023` (month first) and `January 5, 2023`. Anything
//! else is treated as "no date"; parsing never fails loudly.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const RENDERED_DATE_FORMAT: &str = "%a %b %d %Y";

/// Further plain-date spellings, tried in order after the ISO form. `%B`
/// also accepts abbreviated month names when parsing.
const CALENDAR_DATE_FORMATS: [&str; 5] = [
    RENDERED_DATE_FORMAT,
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
];

/// Calendar date of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    /// Parse a caller-supplied date, returning `None` when it is not a valid
    /// calendar date in one of the accepted forms.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::ExerciseDate;
    ///
    /// let date = ExerciseDate::parse("2023-01-01").expect("iso date");
    /// assert_eq!(date.to_string(), "Sun Jan 01 2023");
    /// assert!(ExerciseDate::parse("not-a-date").is_none());
    /// assert!(ExerciseDate::parse("2023-02-30").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        NaiveDate::parse_from_str(value, ISO_DATE_FORMAT)
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
            })
            .or_else(|| {
                CALENDAR_DATE_FORMATS
                    .iter()
                    .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
            })
            .map(Self)
    }

    /// Parse `raw` if present, falling back to today's UTC date from `clock`.
    pub fn parse_or_today(raw: Option<&str>, clock: &dyn Clock) -> Self {
        raw.and_then(Self::parse)
            .unwrap_or_else(|| Self::today(clock))
    }

    /// Today's UTC date according to `clock`.
    pub fn today(clock: &dyn Clock) -> Self {
        Self(clock.utc().date_naive())
    }

    /// Access the underlying calendar date.
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ExerciseDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

/// Renders the fixed human-readable form, e.g. `Mon Jan 02 2023`.
impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RENDERED_DATE_FORMAT))
    }
}
