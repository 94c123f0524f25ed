//! Quiz round generation and answer verification.
//!
//! A round is stateless: each answer button carries a `word|translation`
//! callback token, and verification re-derives the authoritative
//! translations from the store instead of consulting any session state.
//! Submitting the same token twice just re-evaluates the same comparison.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::config::{CALLBACK_DELIMITER, CHOICE_COUNT, MAX_CANDIDATE_DRAWS};
use crate::domain::{QuizRound, WordEntry};
use crate::error::TrainerError;

/// Build one quiz round from the user's effective vocabulary.
pub fn generate_round(vocab: &[WordEntry]) -> Result<QuizRound, TrainerError> {
  generate_round_with(vocab, &mut rand::rng())
}

/// Seedable variant of [`generate_round`].
///
/// Picks the target uniformly from the whole pool, then grows the candidate
/// set by uniform draws with replacement until it holds [`CHOICE_COUNT`]
/// distinct translation strings. Distinctness is judged on the translation
/// string only: two words sharing a translation collapse into one button.
pub fn generate_round_with<R: Rng + ?Sized>(
  vocab: &[WordEntry],
  rng: &mut R,
) -> Result<QuizRound, TrainerError> {
  if vocab.len() < CHOICE_COUNT {
    return Err(TrainerError::InsufficientData);
  }

  let target = vocab.choose(rng).ok_or(TrainerError::InsufficientData)?;

  let mut choices = vec![target.translation.clone()];
  let mut draws = 0;
  while choices.len() < CHOICE_COUNT {
    if draws >= MAX_CANDIDATE_DRAWS {
      // The pool holds fewer than CHOICE_COUNT distinct translations
      return Err(TrainerError::InsufficientData);
    }
    draws += 1;

    if let Some(entry) = vocab.choose(rng) {
      if !choices.contains(&entry.translation) {
        choices.push(entry.translation.clone());
      }
    }
  }

  choices.shuffle(rng);

  Ok(QuizRound {
    word: target.word.clone(),
    choices,
  })
}

/// Encode one button's identity: the quizzed word plus the candidate shown
/// on it. This token is the round's entire externalized state.
pub fn encode_selection(word: &str, translation: &str) -> String {
  format!("{}{}{}", word, CALLBACK_DELIMITER, translation)
}

/// Split an echoed callback token back into (word, submitted translation).
pub fn decode_selection(token: &str) -> Option<(&str, &str)> {
  token.split_once(CALLBACK_DELIMITER)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
  pub is_correct: bool,
  /// An authoritative translation for the quizzed word, shown to the user
  /// when the submitted answer was wrong.
  pub canonical: String,
}

/// Check a submitted translation against the authoritative set for a word.
///
/// The submitted value is correct if it matches any authoritative
/// translation. An empty authoritative set means the word vanished between
/// prompt and answer.
pub fn verify(
  submitted: &str,
  authoritative: &[String],
) -> Result<VerificationResult, TrainerError> {
  let canonical = authoritative
    .first()
    .cloned()
    .ok_or(TrainerError::StaleRound)?;
  let is_correct = authoritative.iter().any(|t| t == submitted);

  Ok(VerificationResult {
    canonical: if is_correct {
      submitted.to_string()
    } else {
      canonical
    },
    is_correct,
  })
}
