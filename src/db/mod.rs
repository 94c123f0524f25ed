pub mod schema;
pub mod users;
pub mod words;

use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::WordEntry;
use crate::error::TrainerError;

pub use schema::run_migrations;

pub type DbPool = Arc<Mutex<Connection>>;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
    /// Log the error at warn level and return None
    fn log_warn(self, context: &str) -> Option<T>;
    /// Log the error at warn level and return the default
    fn log_warn_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                None
            }
        }
    }

    fn log_warn_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                T::default()
            }
        }
    }
}

/// Try to acquire the database lock, returning an error if poisoned
pub fn try_lock(pool: &DbPool) -> std::result::Result<MutexGuard<'_, Connection>, TrainerError> {
  pool.lock().map_err(|_: PoisonError<_>| {
    tracing::error!("database mutex poisoned - a thread panicked while holding the lock");
    TrainerError::DbLock
  })
}

pub fn init_db(path: &Path) -> Result<DbPool> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).ok();
  }

  let conn = Connection::open(path)?;
  run_migrations(&conn)?;
  Ok(Arc::new(Mutex::new(conn)))
}

/// Seed the global word partition on first start. No-op once any global
/// words exist, so user deployments keep their own curated set.
pub fn seed_global_words(conn: &Connection) -> Result<()> {
  let count: i64 = conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
  if count > 0 {
    return Ok(());
  }

  for entry in starter_words() {
    words::insert_global_word(conn, &entry)?;
  }
  Ok(())
}

// Colors and pronouns: the classic starter set every new user trains on.
fn starter_words() -> Vec<WordEntry> {
  [
    ("red", "красный"),
    ("blue", "синий"),
    ("green", "зелёный"),
    ("yellow", "жёлтый"),
    ("black", "чёрный"),
    ("white", "белый"),
    ("I", "я"),
    ("you", "ты"),
    ("he", "он"),
    ("she", "она"),
    ("we", "мы"),
    ("they", "они"),
  ]
  .iter()
  .map(|(w, t)| WordEntry::new(w.to_string(), t.to_string()))
  .collect()
}
