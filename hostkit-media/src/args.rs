//! Argument-shape normalization
//!
//! Callers may pass a full entity or just its id, and a single item or a
//! list. Both shapes are reduced once at the API boundary so operation
//! bodies only ever see id strings and lists.

use crate::types::{Album, Asset};

/// An asset passed either as a full record or as a bare id
#[derive(Debug, Clone, PartialEq)]
pub enum AssetRef {
    Id(String),
    Entity(Asset),
}

impl AssetRef {
    /// Reduce to the identifier string
    pub fn into_id(self) -> String {
        match self {
            AssetRef::Id(id) => id,
            AssetRef::Entity(asset) => asset.id,
        }
    }
}

impl From<&str> for AssetRef {
    fn from(id: &str) -> Self {
        AssetRef::Id(id.to_string())
    }
}

impl From<String> for AssetRef {
    fn from(id: String) -> Self {
        AssetRef::Id(id)
    }
}

impl From<Asset> for AssetRef {
    fn from(asset: Asset) -> Self {
        AssetRef::Entity(asset)
    }
}

impl From<&Asset> for AssetRef {
    fn from(asset: &Asset) -> Self {
        AssetRef::Id(asset.id.clone())
    }
}

/// An album passed either as a full record or as a bare id
#[derive(Debug, Clone, PartialEq)]
pub enum AlbumRef {
    Id(String),
    Entity(Album),
}

impl AlbumRef {
    /// Reduce to the identifier string
    pub fn into_id(self) -> String {
        match self {
            AlbumRef::Id(id) => id,
            AlbumRef::Entity(album) => album.id,
        }
    }
}

impl From<&str> for AlbumRef {
    fn from(id: &str) -> Self {
        AlbumRef::Id(id.to_string())
    }
}

impl From<String> for AlbumRef {
    fn from(id: String) -> Self {
        AlbumRef::Id(id)
    }
}

impl From<Album> for AlbumRef {
    fn from(album: Album) -> Self {
        AlbumRef::Entity(album)
    }
}

impl From<&Album> for AlbumRef {
    fn from(album: &Album) -> Self {
        AlbumRef::Id(album.id.clone())
    }
}

/// A parameter accepted as either a single item or a list
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Normalize to a list; a single item becomes a one-element list
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(item: T) -> Self {
        OneOrMany::One(item)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}

/// Normalize an optional single-or-list parameter; absent means empty
pub fn arrayize<T>(value: Option<OneOrMany<T>>) -> Vec<T> {
    value.map(OneOrMany::into_vec).unwrap_or_default()
}
