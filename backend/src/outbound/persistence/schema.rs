//! Diesel table definitions for the PostgreSQL schema.
//!
//! Kept in step with the embedded migrations under `backend/migrations`.

diesel::table! {
    /// User records.
    ///
    /// The `id` column is a database-assigned serial primary key.
    users (id) {
        /// Primary key assigned on insert.
        id -> Int4,
        /// First name (at most 50 characters, enforced at the boundary).
        firstname -> Varchar,
        /// Last name (at most 50 characters, enforced at the boundary).
        lastname -> Varchar,
        /// Non-negative age in years.
        age -> Int4,
        /// Calendar date of birth.
        date_of_birth -> Date,
    }
}
