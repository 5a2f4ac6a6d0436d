//! Native media service contract
//!
//! The platform owns the real media data (camera roll / media store); this
//! trait is the fixed call contract the facade delegates to. Arguments
//! arrive already normalized: bare id strings, id slices, and validated
//! enums. Implementations report their own failures as [`Error`] values,
//! which the facade propagates untranslated.
//!
//! [`Error`]: crate::error::Error

use crate::error::Result;
use crate::types::{Album, Asset, AssetInfo, AssetsPage, AssetsQuery};
use async_trait::async_trait;

/// Asynchronous bridge to the platform media library
#[async_trait]
pub trait NativeMediaService: Send + Sync {
    /// Index a local file as a new media asset
    async fn create_asset(&self, local_uri: &str) -> Result<Asset>;

    /// Add existing assets to an album
    ///
    /// `copy` is `Some` only on platforms whose native call accepts a copy
    /// flag; `None` means the flag is not part of the call at all.
    async fn add_assets_to_album(
        &self,
        asset_ids: &[String],
        album_id: &str,
        copy: Option<bool>,
    ) -> Result<()>;

    /// Remove assets from an album without deleting them
    async fn remove_assets_from_album(&self, asset_ids: &[String], album_id: &str) -> Result<()>;

    /// Permanently delete assets from the library
    async fn delete_assets(&self, asset_ids: &[String]) -> Result<()>;

    /// Fetch the full record for one asset
    ///
    /// One platform wraps the record in a singleton list; the result shape
    /// preserves that so the facade can unwrap it.
    async fn asset_info(&self, asset_id: &str) -> Result<Vec<AssetInfo>>;

    /// List all albums
    async fn albums(&self) -> Result<Vec<Album>>;

    /// Look an album up by title
    async fn album_by_title(&self, title: &str) -> Result<Option<Album>>;

    /// Create an album, optionally seeded with an initial asset
    async fn create_album(&self, name: &str, initial_asset_id: Option<&str>) -> Result<Album>;

    /// Page through assets matching a query
    async fn assets(&self, query: AssetsQuery) -> Result<AssetsPage>;

    /// List the platform's smart photo clusters ("moments")
    async fn moments(&self) -> Result<Vec<Album>>;
}
