//! User data model.
//!
//! A [`User`] owns an append-only exercise log. [`UserSummary`] is the
//! projection returned by listings and creation, which never carry the log.

use std::fmt;

use uuid::Uuid;

use super::Exercise;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The username was empty or whitespace.
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Stable, store-assigned user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::UserId;
    ///
    /// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(UserId::new("not-a-uuid").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique, non-blank username.
///
/// The value is kept exactly as supplied; uniqueness is an exact match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::Username;
    ///
    /// assert!(Username::new("ada").is_ok());
    /// assert!(Username::new("   ").is_err());
    /// ```
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Identifier and username of a user, without the exercise log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    id: UserId,
    username: Username,
}

impl UserSummary {
    /// Build a summary from validated components.
    pub fn new(id: UserId, username: Username) -> Self {
        Self { id, username }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique username.
    pub fn username(&self) -> &Username {
        &self.username
    }
}

/// Application user together with its exercise log.
///
/// ## Invariants
/// - `log` is in append order; entries are never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    log: Vec<Exercise>,
}

impl User {
    /// Build a user with an existing log.
    pub fn new(id: UserId, username: Username, log: Vec<Exercise>) -> Self {
        Self { id, username, log }
    }

    /// Build a freshly registered user with an empty log and a new identifier.
    pub fn register(username: Username) -> Self {
        Self::new(UserId::random(), username, Vec::new())
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Recorded exercises in append order.
    pub fn log(&self) -> &[Exercise] {
        &self.log
    }

    /// Append an exercise to the end of the log.
    pub fn record(&mut self, exercise: Exercise) {
        self.log.push(exercise);
    }

    /// Project the user onto its identifier and username.
    pub fn summary(&self) -> UserSummary {
        UserSummary::new(self.id, self.username.clone())
    }
}

#[cfg(test)]
mod tests;
