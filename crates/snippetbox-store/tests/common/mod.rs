use chrono::{DateTime, TimeZone, Utc};
use snippetbox_core::ManualClock;
use snippetbox_store::SnippetStore;

/// A fixed starting instant for clock-driven tests
#[allow(dead_code)]
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
}

/// In-memory store driven by a manual clock starting at `t0()`
#[allow(dead_code)]
pub fn new_store() -> (SnippetStore<ManualClock>, ManualClock) {
    let clock = ManualClock::new(t0());
    let store = SnippetStore::open_in_memory()
        .unwrap()
        .with_clock(clock.clone());
    (store, clock)
}

/// Count rows physically present, live or not
#[allow(dead_code)]
pub fn row_count(store: &SnippetStore<ManualClock>) -> i64 {
    store
        .connection()
        .query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))
        .unwrap()
}
