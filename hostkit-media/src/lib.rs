//! # Hostkit Media
//!
//! Validating facade over the host platform's media library. The facade
//! owns no media data and keeps no state: it normalizes heterogeneous
//! argument shapes (entity-or-id references, single-or-list parameters),
//! validates them, forwards the call to a [`NativeMediaService`], and
//! normalizes the response shape back to a canonical one.
//!
//! Error policy: malformed arguments fail synchronously with a descriptive
//! [`Error::InvalidArgument`] before the service is touched; failures from
//! the service itself propagate to the caller unchanged. No retries, no
//! caching, no recovery.
//!
//! Platform divergence (copy-on-add flag, mandatory initial album asset,
//! moments support) is captured once in [`PlatformCapabilities`] rather
//! than branched on inside method bodies.

pub mod args;
pub mod capabilities;
pub mod error;
pub mod facade;
pub mod service;
pub mod types;

pub use args::{AlbumRef, AssetRef, OneOrMany};
pub use capabilities::PlatformCapabilities;
pub use error::{Error, Result};
pub use facade::{AssetsOptions, MediaLibrary};
pub use service::NativeMediaService;
pub use types::{
    Album, Asset, AssetInfo, AssetsPage, AssetsQuery, Location, MediaType, SortBy, SortKey,
    SortSpec,
};
