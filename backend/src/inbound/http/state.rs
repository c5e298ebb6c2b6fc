//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    ExerciseLogCommand, ExerciseLogQuery, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{ExerciseLogService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User registration.
    pub users: Arc<dyn UsersCommand>,
    /// User listing.
    pub users_query: Arc<dyn UsersQuery>,
    /// Exercise appends.
    pub exercises: Arc<dyn ExerciseLogCommand>,
    /// Filtered log reads.
    pub exercises_query: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(
        users: Arc<dyn UsersCommand>,
        users_query: Arc<dyn UsersQuery>,
        exercises: Arc<dyn ExerciseLogCommand>,
        exercises_query: Arc<dyn ExerciseLogQuery>,
    ) -> Self {
        Self {
            users,
            users_query,
            exercises,
            exercises_query,
        }
    }

    /// Wire the domain services over a single repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use mockable::DefaultClock;
    /// use exercise_tracker::inbound::http::state::HttpState;
    /// use exercise_tracker::outbound::memory::InMemoryUserRepository;
    ///
    /// let state = HttpState::from_repository(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = state;
    /// ```
    pub fn from_repository<R>(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self
    where
        R: UserRepository + 'static,
    {
        let users = Arc::new(UserService::new(Arc::clone(&repo)));
        let exercises = Arc::new(ExerciseLogService::new(repo, clock));
        Self::new(users.clone(), users, exercises.clone(), exercises)
    }
}
