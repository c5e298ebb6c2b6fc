//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique username, stored as supplied.
        username -> Varchar,
        /// Record creation timestamp; listings order by it.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Exercise log entries. Append order is the order of `id`.
    exercises (id) {
        /// Monotonic surrogate key.
        id -> Int8,
        /// Owning user.
        user_id -> Uuid,
        description -> Text,
        duration_minutes -> Int8,
        /// Calendar date of the exercise.
        performed_on -> Date,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(exercises -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(exercises, users);
