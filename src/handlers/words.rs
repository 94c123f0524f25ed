//! Personal word list handlers: add, delete, list.

use rusqlite::Connection;

use crate::bot::{InlineButton, OutboundReply};
use crate::config;
use crate::db::words;
use crate::db::LogOnError;
use crate::error::TrainerError;

pub(crate) fn add_prompt() -> OutboundReply {
  OutboundReply::text(
    "Enter a word and its translation separated by a space:\n\
     apple яблоко\n\n\
     Type 'back' to return to the menu",
  )
}

/// Free-text handler: anything that is not a command is treated as a
/// "word translation" pair to add.
pub(crate) fn save_word(
  conn: &Connection,
  user_id: i64,
  text: &str,
) -> Result<OutboundReply, TrainerError> {
  if text.is_empty() || text.eq_ignore_ascii_case("back") || text.eq_ignore_ascii_case("cancel") {
    return Ok(OutboundReply::text("📘 You are in the main menu"));
  }

  // Split on the first whitespace; multi-word translations stay intact
  let Some((word, translation)) = text.split_once(char::is_whitespace) else {
    return Ok(OutboundReply::text("❌ Format: word translation"));
  };
  let (word, translation) = (word.trim(), translation.trim());
  if translation.is_empty() {
    return Ok(OutboundReply::text("❌ Format: word translation"));
  }

  words::add_user_word(conn, user_id, word, translation)?;

  let count = words::user_word_count(conn, user_id).log_warn_default("Failed to count user words");
  Ok(OutboundReply::text(format!(
    "✅ Word added!\n📊 You are learning {} word{}",
    count,
    if count == 1 { "" } else { "s" }
  )))
}

/// Offer the user's personal words as delete buttons.
pub(crate) fn delete_prompt(
  conn: &Connection,
  user_id: i64,
) -> Result<OutboundReply, TrainerError> {
  let entries = words::user_words(conn, user_id)?;
  if entries.is_empty() {
    return Ok(OutboundReply::text("📭 You have no words to delete."));
  }

  let buttons = entries
    .iter()
    .map(|e| InlineButton {
      label: e.word.clone(),
      data: format!("{}{}", config::DELETE_PREFIX, e.word),
    })
    .collect();

  Ok(OutboundReply::with_buttons("Choose a word to delete:", buttons))
}

pub(crate) fn delete_selected(
  conn: &Connection,
  user_id: i64,
  word: &str,
) -> Result<OutboundReply, TrainerError> {
  let removed = words::delete_user_word(conn, user_id, word)?;
  if removed == 0 {
    // A second tap on the same button after deletion ends up here
    return Ok(OutboundReply::text("🤷 This word is no longer in your list."));
  }
  Ok(OutboundReply::text(format!("🗑 Word \"{}\" deleted.", word)))
}

pub(crate) fn my_words(conn: &Connection, user_id: i64) -> Result<OutboundReply, TrainerError> {
  let entries = words::user_words(conn, user_id)?;
  if entries.is_empty() {
    return Ok(OutboundReply::text("📭 You have no personal words."));
  }

  let mut text = String::from("📝 Your words:\n\n");
  for e in &entries {
    text.push_str(&format!("{} — {}\n", e.word, e.translation));
  }
  Ok(OutboundReply::text(text))
}
