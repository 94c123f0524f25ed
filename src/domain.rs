use serde::{Deserialize, Serialize};

/// One word/translation pair, from either the global or a personal partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
  pub word: String,
  pub translation: String,
}

impl WordEntry {
  pub fn new(word: String, translation: String) -> Self {
    Self { word, translation }
  }
}

/// One quiz round: a word to translate plus four candidate translations,
/// already shuffled, exactly one of them correct.
///
/// Rounds are ephemeral and never persisted. The callback token on each
/// button carries everything needed to verify the answer later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
  pub word: String,
  pub choices: Vec<String>,
}
