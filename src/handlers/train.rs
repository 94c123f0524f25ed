//! Quiz handlers: the /train command and answer verification callbacks.

use rusqlite::Connection;

use crate::bot::{InlineButton, OutboundReply};
use crate::db::words;
use crate::error::TrainerError;
use crate::quiz;

/// Start one quiz round over the user's effective vocabulary.
pub(crate) fn start_round(
  conn: &Connection,
  user_id: i64,
) -> Result<OutboundReply, TrainerError> {
  let vocab = words::effective_vocabulary(conn, user_id)?;
  let round = quiz::generate_round(&vocab)?;

  let buttons = round
    .choices
    .iter()
    .map(|translation| InlineButton {
      label: translation.clone(),
      data: quiz::encode_selection(&round.word, translation),
    })
    .collect();

  Ok(OutboundReply::with_buttons(
    format!("How do you translate the word *{}*?", round.word),
    buttons,
  ))
}

/// Verify an echoed quiz answer token against the store.
pub(crate) fn check_answer(
  conn: &Connection,
  user_id: i64,
  token: &str,
) -> Result<OutboundReply, TrainerError> {
  let Some((word, submitted)) = quiz::decode_selection(token) else {
    tracing::warn!("malformed callback token: {}", token);
    return Ok(OutboundReply::text(super::GENERIC_FAILURE));
  };

  let authoritative = words::translations_for(conn, user_id, word)?;
  let result = quiz::verify(submitted, &authoritative)?;

  let text = if result.is_correct {
    format!("✅ Correct! {} = {}", word, result.canonical)
  } else {
    format!("❌ Wrong.\nThe right answer: {} = {}", word, result.canonical)
  };
  Ok(OutboundReply::text(text))
}
