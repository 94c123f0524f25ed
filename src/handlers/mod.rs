//! Webhook command router.
//!
//! Every inbound action resolves the user lazily, holds the pooled
//! connection for the duration of the action only, and turns domain errors
//! into informational chat replies. Store failures abort the single action
//! and never take the process down.

mod train;
mod words;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::bot::{InboundUpdate, OutboundReply};
use crate::config;
use crate::db::{self, DbPool};
use crate::error::TrainerError;

pub(crate) const GENERIC_FAILURE: &str = "⚠️ Something went wrong. Please try again.";

pub fn router(pool: DbPool) -> Router {
  Router::new()
    .route("/webhook", post(webhook))
    .route("/health", get(health))
    .layer(TraceLayer::new_for_http())
    .with_state(pool)
}

async fn health() -> &'static str {
  "ok"
}

/// Single entry point for inbound chat updates.
pub async fn webhook(
  State(pool): State<DbPool>,
  Json(update): Json<InboundUpdate>,
) -> Json<OutboundReply> {
  let reply = dispatch(&pool, &update).unwrap_or_else(error_reply);
  Json(reply)
}

fn dispatch(pool: &DbPool, update: &InboundUpdate) -> Result<OutboundReply, TrainerError> {
  let conn = db::try_lock(pool)?;
  let user_id = db::users::resolve_or_create(&conn, update.sender.id, &update.sender.first_name)?;

  if let Some(data) = &update.callback {
    return if let Some(word) = data.strip_prefix(config::DELETE_PREFIX) {
      words::delete_selected(&conn, user_id, word)
    } else {
      train::check_answer(&conn, user_id, data)
    };
  }

  let text = update.text.as_deref().unwrap_or("").trim();
  match text {
    "/start" => Ok(start_reply(&update.sender.first_name)),
    "/help" => Ok(help_reply()),
    "/train" => train::start_round(&conn, user_id),
    "/add" => Ok(words::add_prompt()),
    "/delete" => words::delete_prompt(&conn, user_id),
    "/mywords" => words::my_words(&conn, user_id),
    _ => words::save_word(&conn, user_id, text),
  }
}

fn start_reply(first_name: &str) -> OutboundReply {
  OutboundReply::text(format!(
    "👋 Hi, {}!\n\n\
     📚 I'm a bot for learning English words.\n\n\
     Commands:\n\
     /train - practice\n\
     /add - add a word\n\
     /delete - delete a word\n\
     /mywords - my words\n\
     /help - help",
    first_name
  ))
}

fn help_reply() -> OutboundReply {
  OutboundReply::text(
    "ℹ️ Pick the correct translation out of 4 options.\n\
     Words you add are visible only to you.",
  )
}

fn error_reply(err: TrainerError) -> OutboundReply {
  let text = match err {
    TrainerError::InsufficientData => {
      "🧐 Not enough words for a quiz yet. Add more with /add."
    }
    TrainerError::StaleRound => "🤷 This word no longer exists.",
    TrainerError::DuplicateWord => "❌ This word already exists",
    TrainerError::Db(_) | TrainerError::DbLock => {
      tracing::error!("action aborted: {}", err);
      GENERIC_FAILURE
    }
  };
  OutboundReply::text(text)
}
