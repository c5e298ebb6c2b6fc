//! Builders selecting the repository adapter behind [`HttpState`].

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::InMemoryUserRepository;
use exercise_tracker::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Build handler state, using PostgreSQL when a pool is configured and the
/// in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    build_http_state_with_clock(config, Arc::new(DefaultClock))
}

fn build_http_state_with_clock(config: &ServerConfig, clock: Arc<dyn Clock>) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            HttpState::from_repository(Arc::new(DieselUserRepository::new(pool.clone())), clock)
        }
        None => HttpState::from_repository(Arc::new(InMemoryUserRepository::default()), clock),
    };
    web::Data::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exercise_tracker::domain::Username;
    use exercise_tracker::domain::ports::{UsersCommand, UsersQuery};

    #[actix_web::test]
    async fn in_memory_state_starts_empty_and_round_trips_users() {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("socket address"));
        let state = build_http_state(&config);

        assert!(state.users_query.list_users().await.expect("list").is_empty());

        let created = state
            .users
            .create_user(Username::new("ada").expect("username"))
            .await
            .expect("create user");
        let listed = state.users_query.list_users().await.expect("list");

        assert_eq!(listed, vec![created]);
    }
}
