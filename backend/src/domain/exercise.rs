//! Exercise entries recorded in a user's log.

use std::fmt;

use super::ExerciseDate;

/// Validation errors raised while building exercise values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseValidationError {
    /// The description was empty.
    #[error("description must not be empty")]
    EmptyDescription,
    /// The duration was not a number.
    #[error("duration must be a number")]
    DurationNotANumber,
    /// The duration was a number but not a whole, non-negative minute count.
    #[error("duration must be a whole number of minutes")]
    DurationNotWholeMinutes,
}

/// Free-text description of an exercise, stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`].
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let description = description.into();
        if description.is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

/// Exercise duration in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    /// Wrap a known-good minute count.
    pub fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Parse a duration supplied as text, e.g. from a form field.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::{DurationMinutes, ExerciseValidationError};
    ///
    /// assert_eq!(DurationMinutes::parse(" 30 ").map(|d| d.minutes()), Ok(30));
    /// assert_eq!(
    ///     DurationMinutes::parse("abc"),
    ///     Err(ExerciseValidationError::DurationNotANumber)
    /// );
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ExerciseValidationError::DurationNotANumber)?;
        Self::from_number(value)
    }

    /// Convert a numeric duration, e.g. from a JSON body.
    pub fn from_number(value: f64) -> Result<Self, ExerciseValidationError> {
        if !value.is_finite() {
            return Err(ExerciseValidationError::DurationNotANumber);
        }
        if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(ExerciseValidationError::DurationNotWholeMinutes);
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is a checked whole number within u32 range"
        )]
        let minutes = value as u32;
        Ok(Self(minutes))
    }

    /// Number of minutes.
    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single exercise entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    description: Description,
    duration: DurationMinutes,
    date: ExerciseDate,
}

impl Exercise {
    /// Build an exercise from validated parts.
    pub fn new(description: Description, duration: DurationMinutes, date: ExerciseDate) -> Self {
        Self {
            description,
            duration,
            date,
        }
    }

    /// Description as supplied.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Duration in minutes.
    pub fn duration(&self) -> DurationMinutes {
        self.duration
    }

    /// Calendar date of the exercise.
    pub fn date(&self) -> ExerciseDate {
        self.date
    }
}
