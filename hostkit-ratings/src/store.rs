//! Rating-prompt heuristic store
//!
//! Tracks three records in the backing key-value store:
//! - `ratings.positive_event_count` — non-negative integer, initialized to
//!   `"0"` exactly once, the first time the store runs on a device.
//! - `ratings.rated_at_ms` — epoch milliseconds of the last completed
//!   "rate the app" action, absent until first recorded.
//! - `ratings.declined_at_ms` — epoch milliseconds of the last decline,
//!   absent until first recorded.
//!
//! Error policy: lenient. Every public operation catches storage errors,
//! logs a warning with context, and reports an absent value. Callers cannot
//! distinguish "value absent" from "read failed" — acceptable for a
//! non-critical UX heuristic, where failing open means not prompting.
//!
//! Counter writes (initialization and increments) are serialized through a
//! mutex held across their check/read-modify-write so concurrent calls
//! never lose updates and a late initialization never resets the counter.

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::time::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Key holding the positive-event counter
pub const COUNT_KEY: &str = "ratings.positive_event_count";

/// Key holding the last "rated" timestamp (epoch ms)
pub const RATED_KEY: &str = "ratings.rated_at_ms";

/// Key holding the last "declined" timestamp (epoch ms)
pub const DECLINED_KEY: &str = "ratings.declined_at_ms";

/// Timestamps of the user's last rating-prompt actions
///
/// Either entry is `None` until the corresponding action has been recorded
/// (or when the read failed — the lenient contract does not distinguish).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTimestamps {
    /// Epoch ms of the last completed "rate the app" action
    pub rated: Option<i64>,
    /// Epoch ms of the last decline
    pub declined: Option<i64>,
}

/// Durable bookkeeping for the rating-prompt heuristic
pub struct RatingStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    // Serializes counter writes: initialization's check-then-set and
    // increment's read-modify-write
    counter_lock: Mutex<()>,
}

impl RatingStore {
    /// Create a store over the given backend, using the system clock
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create a store with an injected clock (tests record fixed instants)
    pub fn with_clock(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            counter_lock: Mutex::new(()),
        }
    }

    /// Initialize the counter key to `"0"` if and only if it is absent
    ///
    /// Idempotent: re-running never resets an existing value. Storage
    /// failures are logged and swallowed; the store stays usable with the
    /// counter possibly uninitialized.
    pub async fn initialize(&self) {
        let _guard = self.counter_lock.lock().await;
        match self.try_initialize().await {
            Ok(true) => debug!("initialized positive event count to 0"),
            Ok(false) => {}
            Err(e) => warn!(error = %e, "failed to initialize rating store"),
        }
    }

    async fn try_initialize(&self) -> Result<bool> {
        let keys = self.store.keys().await?;
        if keys.iter().any(|k| k == COUNT_KEY) {
            return Ok(false);
        }
        self.store.set(COUNT_KEY, "0").await?;
        Ok(true)
    }

    /// Read the positive-event counter
    ///
    /// `None` when the key is absent, unparseable, or the read failed.
    pub async fn count(&self) -> Option<u64> {
        match self.store.get(COUNT_KEY).await {
            Ok(value) => value.as_deref().and_then(parse_count),
            Err(e) => {
                warn!(error = %e, "failed to read positive event count");
                None
            }
        }
    }

    /// Increment the positive-event counter, returning the new value
    ///
    /// An absent or corrupted current value counts as 0. `None` when the
    /// read or write failed.
    pub async fn increment_count(&self) -> Option<u64> {
        let _guard = self.counter_lock.lock().await;
        match self.try_increment().await {
            Ok(next) => Some(next),
            Err(e) => {
                warn!(error = %e, "failed to increment positive event count");
                None
            }
        }
    }

    async fn try_increment(&self) -> Result<u64> {
        let current = self
            .store
            .get(COUNT_KEY)
            .await?
            .as_deref()
            .and_then(parse_count)
            .unwrap_or(0);
        let next = current + 1;
        self.store.set(COUNT_KEY, &next.to_string()).await?;
        Ok(next)
    }

    /// Read both action timestamps in one round trip
    ///
    /// Both entries come back `None` on a storage failure.
    pub async fn action_timestamps(&self) -> ActionTimestamps {
        match self.store.multi_get(&[RATED_KEY, DECLINED_KEY]).await {
            Ok(values) => ActionTimestamps {
                rated: values.first().and_then(|v| parse_millis(v.as_deref())),
                declined: values.get(1).and_then(|v| parse_millis(v.as_deref())),
            },
            Err(e) => {
                warn!(error = %e, "failed to read rating action timestamps");
                ActionTimestamps::default()
            }
        }
    }

    /// Record that the user completed a "rate the app" action now
    ///
    /// Unconditionally overwrites any prior value (last-write-wins).
    pub async fn record_rated(&self) {
        self.record_action(RATED_KEY, "rated").await;
    }

    /// Record that the user declined the rating prompt now
    pub async fn record_declined(&self) {
        self.record_action(DECLINED_KEY, "declined").await;
    }

    async fn record_action(&self, key: &str, action: &str) {
        let now = self.clock.now_millis();
        if let Err(e) = self.store.set(key, &now.to_string()).await {
            warn!(error = %e, action, "failed to record rating action");
        }
    }
}

fn parse_count(raw: &str) -> Option<u64> {
    match raw.parse::<u64>() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(value = raw, "positive event count is not a non-negative integer");
            None
        }
    }
}

fn parse_millis(raw: Option<&str>) -> Option<i64> {
    let raw = raw?;
    match raw.parse::<i64>() {
        Ok(ms) => Some(ms),
        Err(_) => {
            warn!(value = raw, "stored timestamp is not an integer");
            None
        }
    }
}
