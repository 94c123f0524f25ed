//! Application configuration constants.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Database Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(db) = config.database {
                if let Some(path) = db.path {
                    tracing::info!("Using database from config.toml: {}", path);
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 2: .env DATABASE_PATH
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    // Default
    let default = PathBuf::from("data/wordcard.db");
    tracing::info!("Using default database path: {}", default.display());
    default
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

// ==================== Quiz Configuration ====================

/// Number of answer buttons in a quiz round (one correct, the rest distractors)
pub const CHOICE_COUNT: usize = 4;

/// Draw cap while collecting distinct candidate translations. A vocabulary
/// with fewer than CHOICE_COUNT distinct translations can never satisfy a
/// round, so the engine gives up instead of resampling forever.
pub const MAX_CANDIDATE_DRAWS: usize = 1000;

/// Separator between the quizzed word and the candidate translation inside a
/// callback token. Not expected to occur in natural-language entries.
pub const CALLBACK_DELIMITER: char = '|';

/// Callback prefix marking a delete-word button rather than a quiz answer
pub const DELETE_PREFIX: &str = "del|";
