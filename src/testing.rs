//! Test utilities for database setup.
//!
//! Reuses the authoritative schema initialization, so unit tests never
//! duplicate table definitions.

use rusqlite::Connection;

/// Open an in-memory database with the full schema applied.
pub fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory database");
    crate::db::schema::run_migrations(&conn).expect("migrations");
    conn
}
