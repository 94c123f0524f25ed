//! Crate error type.
//!
//! The first three variants are user-facing outcomes of normal operation and
//! map to informational chat replies; `Db` and `DbLock` abort the current
//! action only and surface as a generic failure notice.

use std::fmt;

#[derive(Debug)]
pub enum TrainerError {
    /// Fewer than four distinct translations are available for a quiz round
    InsufficientData,
    /// The quizzed word was deleted between the prompt and the answer
    StaleRound,
    /// The word is already present in the user's effective vocabulary
    DuplicateWord,
    Db(rusqlite::Error),
    DbLock,
}

impl fmt::Display for TrainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData => write!(f, "not enough words for a quiz round"),
            Self::StaleRound => write!(f, "the quizzed word no longer exists"),
            Self::DuplicateWord => write!(f, "word already exists in the effective vocabulary"),
            Self::Db(e) => write!(f, "database error: {}", e),
            Self::DbLock => write!(f, "database unavailable"),
        }
    }
}

impl std::error::Error for TrainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Db(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for TrainerError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Db(e)
    }
}

pub type Result<T> = std::result::Result<T, TrainerError>;
