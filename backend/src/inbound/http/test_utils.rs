//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryUserRepository;

/// Clock pinned to 2024-06-15T12:00:00Z.
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }
}

/// Rendered form of [`FixtureClock`]'s date.
pub const FIXTURE_TODAY: &str = "Sat Jun 15 2024";

/// HTTP state over a fresh in-memory store, plus a handle on that store.
pub fn in_memory_state() -> (web::Data<HttpState>, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::default());
    let state = HttpState::from_repository(Arc::clone(&repo), Arc::new(FixtureClock));
    (web::Data::new(state), repo)
}
