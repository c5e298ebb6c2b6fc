//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod exercise_log_command;
mod exercise_log_query;
mod user_repository;
mod users_command;
mod users_query;

pub use exercise_log_command::{
    AppendExerciseRequest, AppendExerciseResponse, ExerciseLogCommand,
};
pub use exercise_log_query::{ExerciseLogQuery, ExerciseLogView};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
