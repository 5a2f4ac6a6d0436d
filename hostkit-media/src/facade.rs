//! Media library facade
//!
//! Stateless validation and shape normalization in front of a
//! [`NativeMediaService`]. Every operation validates its arguments before
//! the service is invoked and forwards service responses untouched.

use crate::args::{arrayize, AlbumRef, AssetRef, OneOrMany};
use crate::capabilities::PlatformCapabilities;
use crate::error::{Error, Result};
use crate::service::NativeMediaService;
use crate::types::{Album, Asset, AssetInfo, AssetsPage, AssetsQuery, MediaType, SortBy};
use tracing::debug;

/// Caller-shaped options for [`MediaLibrary::assets`]
///
/// References and single-or-list parameters are accepted in either shape
/// and normalized once; sort keys and media-type filters are validated
/// against the recognized enumerations.
#[derive(Debug, Clone, Default)]
pub struct AssetsOptions {
    /// Page size
    pub first: Option<u32>,
    /// Resume after this asset, or a raw cursor string
    pub after: Option<AssetRef>,
    /// Restrict to one album
    pub album: Option<AlbumRef>,
    /// Sort specifiers; absent means platform default order
    pub sort_by: Option<OneOrMany<SortBy>>,
    /// Media-type filters by name (`"photo"`, `"video"`, ...)
    pub media_types: Option<OneOrMany<String>>,
}

/// Validating facade over the platform media library
///
/// Holds no state beyond the service handle and the platform's
/// [`PlatformCapabilities`]; never caches service responses.
pub struct MediaLibrary<S> {
    service: S,
    caps: PlatformCapabilities,
}

impl<S: NativeMediaService> MediaLibrary<S> {
    pub fn new(service: S, caps: PlatformCapabilities) -> Self {
        Self { service, caps }
    }

    pub fn capabilities(&self) -> PlatformCapabilities {
        self.caps
    }

    /// Index the file at `local_uri` as a new asset
    pub async fn create_asset(&self, local_uri: &str) -> Result<Asset> {
        if local_uri.is_empty() {
            return Err(Error::InvalidArgument(
                "local_uri must be a non-empty string".to_string(),
            ));
        }
        self.service.create_asset(local_uri).await
    }

    /// Add assets to an album
    ///
    /// `copy` only reaches the platform when its native call accepts a
    /// copy flag; elsewhere the argument is ignored (the platform adds
    /// references without copying).
    pub async fn add_assets_to_album(
        &self,
        assets: impl Into<OneOrMany<AssetRef>>,
        album: impl Into<AlbumRef>,
        copy: bool,
    ) -> Result<()> {
        let asset_ids = resolve_asset_ids(assets.into())?;
        let album_id = require_id(album.into().into_id(), "album")?;
        let copy = self.caps.supports_copy_on_add.then_some(copy);
        debug!(count = asset_ids.len(), album = %album_id, "adding assets to album");
        self.service
            .add_assets_to_album(&asset_ids, &album_id, copy)
            .await
    }

    /// Remove assets from an album without deleting them
    pub async fn remove_assets_from_album(
        &self,
        assets: impl Into<OneOrMany<AssetRef>>,
        album: impl Into<AlbumRef>,
    ) -> Result<()> {
        let asset_ids = resolve_asset_ids(assets.into())?;
        let album_id = require_id(album.into().into_id(), "album")?;
        self.service
            .remove_assets_from_album(&asset_ids, &album_id)
            .await
    }

    /// Permanently delete assets from the library
    pub async fn delete_assets(&self, assets: impl Into<OneOrMany<AssetRef>>) -> Result<()> {
        let asset_ids = resolve_asset_ids(assets.into())?;
        debug!(count = asset_ids.len(), "deleting assets");
        self.service.delete_assets(&asset_ids).await
    }

    /// Fetch the full record for one asset
    ///
    /// One platform returns the record wrapped in a singleton list; the
    /// first element is taken either way.
    pub async fn asset_info(&self, asset: impl Into<AssetRef>) -> Result<AssetInfo> {
        let asset_id = require_id(asset.into().into_id(), "asset")?;
        let mut records = self.service.asset_info(&asset_id).await?;
        if records.is_empty() {
            return Err(Error::NotFound(format!("asset '{asset_id}'")));
        }
        Ok(records.swap_remove(0))
    }

    /// List all albums
    pub async fn albums(&self) -> Result<Vec<Album>> {
        self.service.albums().await
    }

    /// Look an album up by title
    pub async fn album_by_title(&self, title: &str) -> Result<Option<Album>> {
        self.service.album_by_title(title).await
    }

    /// Create an album
    ///
    /// On platforms where empty albums cannot exist, an initial asset is
    /// mandatory and its absence is an invalid-argument error.
    pub async fn create_album(
        &self,
        album_name: &str,
        initial_asset: Option<AssetRef>,
    ) -> Result<Album> {
        if album_name.is_empty() {
            return Err(Error::InvalidArgument(
                "album_name must be a non-empty string".to_string(),
            ));
        }
        if self.caps.requires_initial_asset_for_album && initial_asset.is_none() {
            return Err(Error::InvalidArgument(
                "create_album requires an initial asset on this platform".to_string(),
            ));
        }
        let asset_id = initial_asset
            .map(|r| require_id(r.into_id(), "asset"))
            .transpose()?;
        self.service
            .create_album(album_name, asset_id.as_deref())
            .await
    }

    /// Page through assets matching `options`
    ///
    /// Returns the page exactly as the platform supplied it: assets,
    /// continuation cursor, has-more flag, and total count.
    pub async fn assets(&self, options: AssetsOptions) -> Result<AssetsPage> {
        let AssetsOptions {
            first,
            after,
            album,
            sort_by,
            media_types,
        } = options;

        let sort_by = arrayize(sort_by)
            .iter()
            .map(SortBy::resolve)
            .collect::<Result<Vec<_>>>()?;
        let media_types = arrayize(media_types)
            .iter()
            .map(|raw| raw.parse::<MediaType>())
            .collect::<Result<Vec<_>>>()?;

        let query = AssetsQuery {
            first,
            after: after.map(AssetRef::into_id),
            album_id: album.map(AlbumRef::into_id),
            sort_by,
            media_types,
        };
        debug!(?query, "querying assets");
        self.service.assets(query).await
    }

    /// List the platform's smart photo clusters
    ///
    /// Unsupported on platforms without moments; fails before the service
    /// is touched.
    pub async fn moments(&self) -> Result<Vec<Album>> {
        if !self.caps.supports_moments {
            return Err(Error::Unsupported(
                "moments are not available on this platform".to_string(),
            ));
        }
        self.service.moments().await
    }
}

fn require_id(id: String, what: &str) -> Result<String> {
    if id.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "{what} id must be a non-empty string"
        )));
    }
    Ok(id)
}

fn resolve_asset_ids(assets: OneOrMany<AssetRef>) -> Result<Vec<String>> {
    assets
        .into_vec()
        .into_iter()
        .map(|r| require_id(r.into_id(), "asset"))
        .collect()
}
