//! Integration tests for the rating-prompt heuristic store
//!
//! Covers first-run initialization, counter increments (including the
//! no-lost-updates guarantee under concurrent calls), action timestamp
//! recording with injected clocks, and the lenient degradation path when
//! the backing store fails.

use async_trait::async_trait;
use hostkit_ratings::error::{Error, Result};
use hostkit_ratings::store::{COUNT_KEY, DECLINED_KEY, RATED_KEY};
use hostkit_ratings::{Clock, KeyValueStore, MemoryStore, RatingStore, SqliteStore};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

/// Clock returning a settable fixed instant
struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    fn at(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    fn advance_to(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// Backend that fails every operation once the toggle is flipped
struct FlakyStore {
    inner: MemoryStore,
    failing: AtomicBool,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            failing: AtomicBool::new(false),
        }
    }

    fn fail_everything(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(Error::Storage("injected failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.inner.set(key, value).await
    }

    async fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<String>>> {
        self.check()?;
        self.inner.multi_get(keys).await
    }

    async fn keys(&self) -> Result<Vec<String>> {
        self.check()?;
        self.inner.keys().await
    }
}

#[tokio::test]
async fn test_first_initialization_sets_counter_to_zero() {
    let backend = Arc::new(MemoryStore::new());
    let store = RatingStore::new(backend.clone());

    store.initialize().await;

    assert_eq!(backend.get(COUNT_KEY).await.unwrap(), Some("0".to_string()));
    assert_eq!(store.count().await, Some(0));
}

#[tokio::test]
async fn test_reinitialization_preserves_existing_count() {
    let backend = Arc::new(MemoryStore::with_entries([(COUNT_KEY, "5")]));
    let store = RatingStore::new(backend);

    store.initialize().await;

    assert_eq!(store.count().await, Some(5));
}

#[tokio::test]
async fn test_increment_persists_string_value_and_returns_new_count() {
    let backend = Arc::new(MemoryStore::new());
    let store = RatingStore::new(backend.clone());
    store.initialize().await;

    assert_eq!(store.increment_count().await, Some(1));
    assert_eq!(backend.get(COUNT_KEY).await.unwrap(), Some("1".to_string()));
}

#[tokio::test]
async fn test_three_sequential_increments_from_zero_yield_three() {
    let store = RatingStore::new(Arc::new(MemoryStore::with_entries([(COUNT_KEY, "0")])));

    store.increment_count().await;
    store.increment_count().await;
    assert_eq!(store.increment_count().await, Some(3));
    assert_eq!(store.count().await, Some(3));
}

#[tokio::test]
async fn test_concurrent_increments_lose_no_updates() {
    let store = Arc::new(RatingStore::new(Arc::new(MemoryStore::with_entries([(
        COUNT_KEY, "0",
    )]))));

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.increment_count().await })
        })
        .collect();
    for task in tasks {
        assert!(task.await.unwrap().is_some());
    }

    assert_eq!(store.count().await, Some(50));
}

#[tokio::test]
async fn test_initialization_racing_increments_never_resets_the_counter() {
    let store = Arc::new(RatingStore::new(Arc::new(MemoryStore::new())));

    // Whatever order these land in, a late initialization must see the
    // counter key and leave it alone rather than writing "0" over it.
    let init = {
        let store = store.clone();
        tokio::spawn(async move { store.initialize().await })
    };
    let tasks: Vec<_> = (0..10)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.increment_count().await })
        })
        .collect();
    init.await.unwrap();
    for task in tasks {
        assert!(task.await.unwrap().is_some());
    }

    assert_eq!(store.count().await, Some(10));
}

#[tokio::test]
async fn test_timestamps_are_absent_before_any_recording() {
    let store = RatingStore::new(Arc::new(MemoryStore::new()));

    let stamps = store.action_timestamps().await;
    assert_eq!(stamps.rated, None);
    assert_eq!(stamps.declined, None);
}

#[tokio::test]
async fn test_record_rated_sets_only_the_rated_entry() {
    let clock = Arc::new(FixedClock::at(1_700_000_000_000));
    let store = RatingStore::with_clock(Arc::new(MemoryStore::new()), clock);

    store.record_rated().await;

    let stamps = store.action_timestamps().await;
    assert_eq!(stamps.rated, Some(1_700_000_000_000));
    assert_eq!(stamps.declined, None);
}

#[tokio::test]
async fn test_repeated_recordings_keep_only_the_latest_timestamp() {
    let clock = Arc::new(FixedClock::at(1_000));
    let store = RatingStore::with_clock(Arc::new(MemoryStore::new()), clock.clone());

    store.record_rated().await;
    clock.advance_to(2_000);
    store.record_rated().await;

    assert_eq!(store.action_timestamps().await.rated, Some(2_000));
}

#[tokio::test]
async fn test_record_declined_sets_only_the_declined_entry() {
    let clock = Arc::new(FixedClock::at(42));
    let store = RatingStore::with_clock(Arc::new(MemoryStore::new()), clock);

    store.record_declined().await;

    let stamps = store.action_timestamps().await;
    assert_eq!(stamps.rated, None);
    assert_eq!(stamps.declined, Some(42));
}

#[tokio::test]
async fn test_storage_failures_degrade_to_absent_values() {
    // Warnings from the degraded paths show up under --nocapture
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let backend = Arc::new(FlakyStore::new());
    let store = RatingStore::new(backend.clone());
    store.initialize().await;
    store.increment_count().await;

    backend.fail_everything();

    // Nothing panics or errors; everything reads as absent.
    store.initialize().await;
    assert_eq!(store.count().await, None);
    assert_eq!(store.increment_count().await, None);
    let stamps = store.action_timestamps().await;
    assert_eq!(stamps.rated, None);
    assert_eq!(stamps.declined, None);
    store.record_rated().await;
    store.record_declined().await;
}

#[tokio::test]
async fn test_failed_initialization_leaves_counter_uninitialized() {
    let backend = Arc::new(FlakyStore::new());
    backend.fail_everything();
    let store = RatingStore::new(backend);

    store.initialize().await;

    assert_eq!(store.count().await, None);
}

#[tokio::test]
async fn test_sqlite_backend_supports_the_full_heuristic_flow() {
    let backend = Arc::new(SqliteStore::in_memory().await.unwrap());
    let clock = Arc::new(FixedClock::at(1_234));
    let store = RatingStore::with_clock(backend.clone(), clock);

    store.initialize().await;
    assert_eq!(store.count().await, Some(0));
    assert_eq!(store.increment_count().await, Some(1));

    store.record_declined().await;
    let stamps = store.action_timestamps().await;
    assert_eq!(stamps.declined, Some(1_234));
    assert_eq!(stamps.rated, None);

    assert_eq!(backend.get(RATED_KEY).await.unwrap(), None);
    assert_eq!(
        backend.get(DECLINED_KEY).await.unwrap(),
        Some("1234".to_string())
    );
}

#[tokio::test]
async fn test_sqlite_backend_persists_across_reconnects() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("ratings.db");

    {
        let backend = Arc::new(SqliteStore::connect(&db_path).await.unwrap());
        let store = RatingStore::new(backend);
        store.initialize().await;
        store.increment_count().await;
        store.increment_count().await;
    }

    let backend = Arc::new(SqliteStore::connect(&db_path).await.unwrap());
    let store = RatingStore::new(backend);
    store.initialize().await;

    assert_eq!(store.count().await, Some(2));
}
