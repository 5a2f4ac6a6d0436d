//! # Hostkit Ratings
//!
//! Durable bookkeeping behind the "should we ask the user to rate the app"
//! prompt:
//! - A positive-event counter incremented by the host application.
//! - Timestamps of the last "rated" and "declined" user actions.
//!
//! State lives in a host-owned key-value store behind the [`KeyValueStore`]
//! trait. Two backends ship with the crate: [`MemoryStore`] (volatile, for
//! tests and hosts without durable storage) and [`SqliteStore`] (durable).
//!
//! The public surface of [`RatingStore`] never returns an error: the rating
//! prompt is a non-critical UX heuristic, so every storage failure is logged
//! as a warning and reported to the caller as an absent value. Failing open
//! (not prompting) is safer than surfacing a storage fault to the host app.

pub mod error;
pub mod kv;
pub mod store;
pub mod time;

pub use error::{Error, Result};
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
pub use store::{ActionTimestamps, RatingStore};
pub use time::{Clock, SystemClock};
