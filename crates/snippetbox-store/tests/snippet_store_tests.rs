mod common;

use chrono::Duration;
use common::{new_store, row_count, t0};
use snippetbox_core::{SnippetError, SnippetErrorKind};
use snippetbox_store::{SnippetStore, LATEST_LIMIT};

// ===== INSERT / GET =====

#[test]
fn test_insert_then_get_scenario() {
    let (store, clock) = new_store();

    let id = store.insert("Test", "Hello world", 7).unwrap();
    assert!(id >= 1);

    let snippet = store.get(id).unwrap();
    assert_eq!(snippet.id, id);
    assert_eq!(snippet.title, "Test");
    assert_eq!(snippet.content, "Hello world");

    clock.advance(Duration::days(7) + Duration::seconds(1));

    assert!(matches!(store.get(id), Err(SnippetError::NoRecord)));
}

#[test]
fn test_round_trip_lifetime_matches_expiry_days() {
    let (store, _clock) = new_store();

    for days in [1, 7, 365] {
        let id = store.insert("title", "content", days).unwrap();
        let snippet = store.get(id).unwrap();

        assert_eq!(snippet.created, t0());
        assert_eq!(snippet.lifetime(), Duration::days(days));
    }
}

#[test]
fn test_round_trip_preserves_text_exactly() {
    let (store, _clock) = new_store();
    let title = "  ünïcødé 日本語 🐸  ";
    let content = "line one\nline two\r\n\ttabbed <b>html</b> 'quoted'";

    let id = store.insert(title, content, 1).unwrap();
    let snippet = store.get(id).unwrap();

    assert_eq!(snippet.title, title);
    assert_eq!(snippet.content, content);
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let (store, _clock) = new_store();

    let a = store.insert("a", "a", 1).unwrap();
    let b = store.insert("b", "b", 1).unwrap();
    let c = store.insert("c", "c", 1).unwrap();

    assert!(a < b && b < c);
}

#[test]
fn test_get_missing_id_is_no_record() {
    let (store, _clock) = new_store();
    store.insert("only", "one", 1).unwrap();

    let err = store.get(9_999).unwrap_err();
    assert_eq!(err.kind(), SnippetErrorKind::NoRecord);
}

#[test]
fn test_expired_is_indistinguishable_from_missing() {
    let (store, clock) = new_store();
    let id = store.insert("brief", "gone tomorrow", 1).unwrap();

    clock.advance(Duration::days(2));

    let expired = store.get(id).unwrap_err();
    let missing = store.get(id + 1).unwrap_err();
    assert_eq!(expired.kind(), missing.kind());
    assert_eq!(expired.to_string(), missing.to_string());

    // The row is still there
    assert_eq!(row_count(&store), 1);
}

#[test]
fn test_expiry_boundary_is_exclusive() {
    let (store, clock) = new_store();
    let id = store.insert("edge", "edge", 1).unwrap();

    clock.set(t0() + Duration::days(1) - Duration::milliseconds(1));
    assert!(store.get(id).is_ok());

    clock.set(t0() + Duration::days(1));
    assert!(matches!(store.get(id), Err(SnippetError::NoRecord)));
}

#[test]
fn test_expiry_never_reverts() {
    let (store, clock) = new_store();
    let id = store.insert("x", "y", 7).unwrap();

    clock.advance(Duration::days(8));
    assert!(store.get(id).is_err());

    clock.advance(Duration::days(365));
    assert!(store.get(id).is_err());
}

// ===== LATEST =====

#[test]
fn test_latest_empty_is_ok() {
    let (store, _clock) = new_store();
    assert!(store.latest().unwrap().is_empty());
}

#[test]
fn test_latest_caps_at_limit_in_descending_id_order() {
    let (store, _clock) = new_store();
    let mut ids = Vec::new();
    for i in 0..15 {
        ids.push(store.insert(&format!("title {i}"), "body", 365).unwrap());
    }

    let latest = store.latest().unwrap();
    assert_eq!(latest.len(), LATEST_LIMIT);

    let got: Vec<i64> = latest.iter().map(|s| s.id).collect();
    let expected: Vec<i64> = ids.iter().rev().take(LATEST_LIMIT).copied().collect();
    assert_eq!(got, expected);
}

#[test]
fn test_latest_skips_expired() {
    let (store, clock) = new_store();
    let short_a = store.insert("short a", "1 day", 1).unwrap();
    let long_a = store.insert("long a", "7 days", 7).unwrap();
    let short_b = store.insert("short b", "1 day", 1).unwrap();
    let long_b = store.insert("long b", "1 year", 365).unwrap();

    assert_eq!(store.latest().unwrap().len(), 4);

    clock.advance(Duration::days(2));

    let ids: Vec<i64> = store.latest().unwrap().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![long_b, long_a]);
    assert!(!ids.contains(&short_a) && !ids.contains(&short_b));
    assert_eq!(row_count(&store), 4);
}

#[test]
fn test_latest_fills_past_expired_rows() {
    let (store, clock) = new_store();

    let mut long_lived = Vec::new();
    for _ in 0..5 {
        long_lived.push(store.insert("keep", "keep", 365).unwrap());
    }
    // Newer ids that expire first must not crowd out older live ones
    for _ in 0..10 {
        store.insert("drop", "drop", 1).unwrap();
    }

    clock.advance(Duration::days(3));

    let ids: Vec<i64> = store.latest().unwrap().iter().map(|s| s.id).collect();
    long_lived.reverse();
    assert_eq!(ids, long_lived);
}

#[test]
fn test_latest_all_expired_is_empty() {
    let (store, clock) = new_store();
    for _ in 0..3 {
        store.insert("t", "c", 1).unwrap();
    }

    clock.advance(Duration::days(1));

    assert!(store.latest().unwrap().is_empty());
}

// ===== STORAGE FAILURES =====

#[test]
fn test_missing_table_is_storage_error() {
    let (store, _clock) = new_store();
    store
        .connection()
        .execute_batch("DROP TABLE snippets")
        .unwrap();

    let insert = store.insert("t", "c", 1).unwrap_err();
    assert_eq!(insert.kind(), SnippetErrorKind::Storage);
    assert_eq!(insert.op(), Some("snippet_insert"));

    let get = store.get(1).unwrap_err();
    assert_eq!(get.kind(), SnippetErrorKind::Storage);

    let latest = store.latest().unwrap_err();
    assert_eq!(latest.kind(), SnippetErrorKind::Storage);
    assert_eq!(latest.op(), Some("snippet_latest"));
}

#[test]
fn test_latest_bad_row_returns_error_not_prefix() {
    let (store, _clock) = new_store();

    // Oldest row: live, but its created column cannot be decoded
    store
        .connection()
        .execute(
            "INSERT INTO snippets (title, content, created, expires)
             VALUES ('bad', 'bad', 'not a timestamp', ?1)",
            [i64::MAX],
        )
        .unwrap();
    for _ in 0..3 {
        store.insert("good", "good", 365).unwrap();
    }

    // Rows are read newest first, so three decode before the bad one fails
    let err = store.latest().unwrap_err();
    assert_eq!(err.kind(), SnippetErrorKind::Storage);
}

#[test]
fn test_get_bad_row_is_storage_error() {
    let (store, _clock) = new_store();
    store
        .connection()
        .execute(
            "INSERT INTO snippets (title, content, created, expires)
             VALUES ('bad', 'bad', 'not a timestamp', ?1)",
            [i64::MAX],
        )
        .unwrap();

    let err = store.get(1).unwrap_err();
    assert_eq!(err.kind(), SnippetErrorKind::Storage);
}

#[test]
fn test_system_clock_store() {
    let store = SnippetStore::open_in_memory().unwrap();
    let id = store.insert("now", "real time", 1).unwrap();

    let snippet = store.get(id).unwrap();
    assert_eq!(snippet.lifetime(), Duration::days(1));
    assert_eq!(store.latest().unwrap().len(), 1);
}
