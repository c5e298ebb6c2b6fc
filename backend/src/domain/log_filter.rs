//! Read-time filtering of exercise logs.
//!
//! A [`LogFilter`] narrows a borrowed log to an inclusive date window, sorts
//! the survivors by date, and optionally truncates them. Malformed filter
//! inputs are dropped rather than rejected, so a bad `from` behaves exactly
//! like an absent one.

use super::{Exercise, ExerciseDate};

/// Parsed log query filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    from: Option<ExerciseDate>,
    to: Option<ExerciseDate>,
    limit: Option<usize>,
}

impl LogFilter {
    /// Build a filter from already-parsed parts.
    pub fn new(from: Option<ExerciseDate>, to: Option<ExerciseDate>, limit: Option<usize>) -> Self {
        Self { from, to, limit }
    }

    /// Build a filter from raw query values, ignoring any that do not parse.
    ///
    /// `limit` must be a non-negative integer; anything else means "no limit".
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::LogFilter;
    ///
    /// let filter = LogFilter::from_raw(Some("2023-01-15"), Some("bogus"), Some("2"));
    /// assert!(filter.from().is_some());
    /// assert!(filter.to().is_none());
    /// assert_eq!(filter.limit(), Some(2));
    /// ```
    pub fn from_raw(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            from: from.and_then(ExerciseDate::parse),
            to: to.and_then(ExerciseDate::parse),
            limit: limit.and_then(|raw| raw.trim().parse::<usize>().ok()),
        }
    }

    /// Inclusive lower bound, if any.
    pub fn from(&self) -> Option<ExerciseDate> {
        self.from
    }

    /// Inclusive upper bound, if any.
    pub fn to(&self) -> Option<ExerciseDate> {
        self.to
    }

    /// Maximum number of entries returned, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn admits(&self, date: ExerciseDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Apply the filter to `log` without mutating it.
    ///
    /// Entries sharing a date keep their relative log order.
    pub fn apply<'a>(&self, log: &'a [Exercise]) -> Vec<&'a Exercise> {
        let mut entries: Vec<&Exercise> = log
            .iter()
            .filter(|exercise| self.admits(exercise.date()))
            .collect();
        // `sort_by_key` is stable, preserving append order for equal dates.
        entries.sort_by_key(|exercise| exercise.date());
        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }
        entries
    }
}
