//! Lazy user registry keyed by the external chat identity.

use chrono::Utc;
use rusqlite::{params, Connection, Result};

/// Resolve the internal user id for a chat identity, creating the row on
/// first contact. Idempotent: exactly one row ever exists per chat_id.
pub fn resolve_or_create(conn: &Connection, chat_id: i64, first_name: &str) -> Result<i64> {
    let mut stmt = conn.prepare("SELECT id FROM users WHERE chat_id = ?1")?;
    let mut rows = stmt.query(params![chat_id])?;
    if let Some(row) = rows.next()? {
        return row.get(0);
    }

    conn.execute(
        "INSERT INTO users (chat_id, first_name, created_at) VALUES (?1, ?2, ?3)",
        params![chat_id, first_name, Utc::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}
