//! Vocabulary store: the global word partition shared by all users plus the
//! per-user personal partition, read as a union at the application layer.

use chrono::Utc;
use rusqlite::{params, Connection, Result};

use crate::domain::WordEntry;
use crate::error::TrainerError;

/// Effective vocabulary for a user: global words plus their personal words.
///
/// A word present in both partitions yields both pairs; deduplication by
/// translation string is the quiz engine's concern, not the store's.
pub fn effective_vocabulary(conn: &Connection, user_id: i64) -> Result<Vec<WordEntry>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT word, translation FROM words
    UNION
    SELECT word, translation FROM user_words WHERE user_id = ?1
    "#,
    )?;

    let entries = stmt
        .query_map(params![user_id], |row| {
            Ok(WordEntry {
                word: row.get(0)?,
                translation: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(entries)
}

/// Authoritative translations for a word across both partitions, the
/// personal one scoped to the asking user. A word spelled the same in both
/// partitions with different translations yields all of them.
pub fn translations_for(conn: &Connection, user_id: i64, word: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT translation FROM words WHERE word = ?1
    UNION
    SELECT translation FROM user_words WHERE word = ?1 AND user_id = ?2
    "#,
    )?;

    let translations = stmt
        .query_map(params![word, user_id], |row| row.get(0))?
        .collect::<Result<Vec<String>>>()?;
    Ok(translations)
}

/// True if the word already appears in the user's effective vocabulary.
pub fn word_exists(conn: &Connection, user_id: i64, word: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        r#"
    SELECT 1 FROM words WHERE word = ?1
    UNION
    SELECT 1 FROM user_words WHERE word = ?1 AND user_id = ?2
    "#,
    )?;

    let mut rows = stmt.query(params![word, user_id])?;
    Ok(rows.next()?.is_some())
}

/// Add a word to the user's personal partition, rejecting words already in
/// their effective vocabulary without touching any state.
pub fn add_user_word(
    conn: &Connection,
    user_id: i64,
    word: &str,
    translation: &str,
) -> crate::error::Result<()> {
    if word_exists(conn, user_id, word)? {
        return Err(TrainerError::DuplicateWord);
    }

    conn.execute(
        "INSERT INTO user_words (user_id, word, translation, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![user_id, word, translation, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Remove a word from the user's personal partition. Returns the number of
/// rows removed; zero means the word was already gone.
pub fn delete_user_word(conn: &Connection, user_id: i64, word: &str) -> Result<usize> {
    conn.execute(
        "DELETE FROM user_words WHERE user_id = ?1 AND word = ?2",
        params![user_id, word],
    )
}

/// The user's personal words, ordered for stable display.
pub fn user_words(conn: &Connection, user_id: i64) -> Result<Vec<WordEntry>> {
    let mut stmt = conn.prepare(
        "SELECT word, translation FROM user_words WHERE user_id = ?1 ORDER BY word",
    )?;

    let entries = stmt
        .query_map(params![user_id], |row| {
            Ok(WordEntry {
                word: row.get(0)?,
                translation: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(entries)
}

pub fn user_word_count(conn: &Connection, user_id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM user_words WHERE user_id = ?1",
        params![user_id],
        |row| row.get(0),
    )
}

/// Insert into the global partition. Used by seeding only; there is no chat
/// command that writes global words.
pub fn insert_global_word(conn: &Connection, entry: &WordEntry) -> Result<()> {
    conn.execute(
        "INSERT INTO words (word, translation) VALUES (?1, ?2)",
        params![entry.word, entry.translation],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::users::resolve_or_create;
    use crate::testing::test_conn;

    fn global(conn: &Connection, word: &str, translation: &str) {
        insert_global_word(conn, &WordEntry::new(word.into(), translation.into())).unwrap();
    }

    #[test]
    fn test_effective_vocabulary_unions_both_partitions() {
        let conn = test_conn();
        let user = resolve_or_create(&conn, 1, "Alice").unwrap();
        global(&conn, "red", "красный");
        add_user_word(&conn, user, "cat", "кот").unwrap();

        let vocab = effective_vocabulary(&conn, user).unwrap();
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains(&WordEntry::new("red".into(), "красный".into())));
        assert!(vocab.contains(&WordEntry::new("cat".into(), "кот".into())));
    }

    #[test]
    fn test_effective_vocabulary_excludes_other_users_words() {
        let conn = test_conn();
        let alice = resolve_or_create(&conn, 1, "Alice").unwrap();
        let bob = resolve_or_create(&conn, 2, "Bob").unwrap();
        add_user_word(&conn, bob, "dog", "собака").unwrap();

        let vocab = effective_vocabulary(&conn, alice).unwrap();
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_effective_vocabulary_keeps_both_pairs_for_shared_spelling() {
        // Same word in both partitions with different translations: both
        // pairs appear, both translations are authoritative
        let conn = test_conn();
        let user = resolve_or_create(&conn, 1, "Alice").unwrap();
        global(&conn, "bow", "лук");
        conn.execute(
            "INSERT INTO user_words (user_id, word, translation, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![user, "bow", "поклон", Utc::now().to_rfc3339()],
        )
        .unwrap();

        let vocab = effective_vocabulary(&conn, user).unwrap();
        assert_eq!(vocab.len(), 2);

        let translations = translations_for(&conn, user, "bow").unwrap();
        assert_eq!(translations.len(), 2);
        assert!(translations.contains(&"лук".to_string()));
        assert!(translations.contains(&"поклон".to_string()));
    }

    #[test]
    fn test_translations_for_scopes_personal_partition_to_user() {
        let conn = test_conn();
        let alice = resolve_or_create(&conn, 1, "Alice").unwrap();
        let bob = resolve_or_create(&conn, 2, "Bob").unwrap();
        add_user_word(&conn, bob, "dog", "собака").unwrap();

        assert!(translations_for(&conn, alice, "dog").unwrap().is_empty());
        assert_eq!(
            translations_for(&conn, bob, "dog").unwrap(),
            vec!["собака".to_string()]
        );
    }

    #[test]
    fn test_add_user_word_rejects_duplicate_in_personal_partition() {
        let conn = test_conn();
        let user = resolve_or_create(&conn, 1, "Alice").unwrap();
        add_user_word(&conn, user, "cat", "кот").unwrap();

        let err = add_user_word(&conn, user, "cat", "кошка").unwrap_err();
        assert!(matches!(err, TrainerError::DuplicateWord));

        // Exactly one row for that word remains
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM user_words WHERE user_id = ?1 AND word = 'cat'",
                params![user],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_add_user_word_rejects_duplicate_of_global_word() {
        let conn = test_conn();
        let user = resolve_or_create(&conn, 1, "Alice").unwrap();
        global(&conn, "red", "красный");

        let err = add_user_word(&conn, user, "red", "алый").unwrap_err();
        assert!(matches!(err, TrainerError::DuplicateWord));
        assert_eq!(user_word_count(&conn, user).unwrap(), 0);
    }

    #[test]
    fn test_add_user_word_allows_same_word_for_different_users() {
        let conn = test_conn();
        let alice = resolve_or_create(&conn, 1, "Alice").unwrap();
        let bob = resolve_or_create(&conn, 2, "Bob").unwrap();

        add_user_word(&conn, alice, "cat", "кот").unwrap();
        add_user_word(&conn, bob, "cat", "кошка").unwrap();

        assert_eq!(user_word_count(&conn, alice).unwrap(), 1);
        assert_eq!(user_word_count(&conn, bob).unwrap(), 1);
    }

    #[test]
    fn test_delete_user_word_reports_removed_rows() {
        let conn = test_conn();
        let user = resolve_or_create(&conn, 1, "Alice").unwrap();
        add_user_word(&conn, user, "cat", "кот").unwrap();

        assert_eq!(delete_user_word(&conn, user, "cat").unwrap(), 1);
        assert_eq!(delete_user_word(&conn, user, "cat").unwrap(), 0);
        assert_eq!(user_word_count(&conn, user).unwrap(), 0);
    }

    #[test]
    fn test_delete_user_word_never_touches_global_partition() {
        let conn = test_conn();
        let user = resolve_or_create(&conn, 1, "Alice").unwrap();
        global(&conn, "red", "красный");

        assert_eq!(delete_user_word(&conn, user, "red").unwrap(), 0);
        assert!(word_exists(&conn, user, "red").unwrap());
    }

    #[test]
    fn test_user_words_ordered_by_word() {
        let conn = test_conn();
        let user = resolve_or_create(&conn, 1, "Alice").unwrap();
        add_user_word(&conn, user, "zebra", "зебра").unwrap();
        add_user_word(&conn, user, "apple", "яблоко").unwrap();

        let entries = user_words(&conn, user).unwrap();
        assert_eq!(entries[0].word, "apple");
        assert_eq!(entries[1].word, "zebra");
    }
}
