//! Media-library model types
//!
//! Shape contract exchanged with the native media service. The facade never
//! stores or caches these; they exist to round-trip between the caller and
//! the platform. Field names serialize in camelCase to match the wire shape
//! the host application sees.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Media type of an asset, also usable as a query filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaType {
    Audio,
    Photo,
    Video,
    Unknown,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Audio => "audio",
            MediaType::Photo => "photo",
            MediaType::Video => "video",
            MediaType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "audio" => Ok(MediaType::Audio),
            "photo" => Ok(MediaType::Photo),
            "video" => Ok(MediaType::Video),
            "unknown" => Ok(MediaType::Unknown),
            other => Err(Error::InvalidArgument(format!(
                "unrecognized media type '{other}'"
            ))),
        }
    }
}

/// Recognized asset sort fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Default,
    MediaType,
    Width,
    Height,
    CreationTime,
    ModificationTime,
    Duration,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::MediaType => "mediaType",
            SortKey::Width => "width",
            SortKey::Height => "height",
            SortKey::CreationTime => "creationTime",
            SortKey::ModificationTime => "modificationTime",
            SortKey::Duration => "duration",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(SortKey::Default),
            "mediaType" => Ok(SortKey::MediaType),
            "width" => Ok(SortKey::Width),
            "height" => Ok(SortKey::Height),
            "creationTime" => Ok(SortKey::CreationTime),
            "modificationTime" => Ok(SortKey::ModificationTime),
            "duration" => Ok(SortKey::Duration),
            other => Err(Error::InvalidArgument(format!(
                "unrecognized sort key '{other}'"
            ))),
        }
    }
}

/// Caller-supplied sort specifier: a bare sort key, or a key with an
/// explicit direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortBy {
    /// Bare key; sorts descending (newest/largest first)
    Key(String),
    /// Key plus explicit `ascending` flag
    Directed(String, bool),
}

impl SortBy {
    /// Validate the key against [`SortKey`], yielding the normalized spec
    pub fn resolve(&self) -> Result<SortSpec> {
        let (raw, ascending) = match self {
            SortBy::Key(raw) => (raw.as_str(), false),
            SortBy::Directed(raw, ascending) => (raw.as_str(), *ascending),
        };
        Ok(SortSpec {
            key: raw.parse()?,
            ascending,
        })
    }
}

impl From<&str> for SortBy {
    fn from(key: &str) -> Self {
        SortBy::Key(key.to_string())
    }
}

impl From<(&str, bool)> for SortBy {
    fn from((key, ascending): (&str, bool)) -> Self {
        SortBy::Directed(key.to_string(), ascending)
    }
}

/// Validated sort specifier forwarded to the native service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub ascending: bool,
}

/// A single media asset as indexed by the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub filename: String,
    pub uri: String,
    pub media_type: MediaType,
    pub width: u32,
    pub height: u32,
    /// Epoch ms the asset was created
    pub creation_time: i64,
    /// Epoch ms the asset was last modified
    pub modification_time: i64,
    /// Duration in seconds; 0 for still images
    pub duration: f64,
    /// Identifier of the containing album, when the platform reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
}

/// An album (or platform-provided smart grouping) of assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub title: String,
    pub asset_count: u64,
    /// Platform-specific album kind (smart album, folder, moment, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_type: Option<String>,
}

/// GPS coordinates attached to an asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Full asset record with the optional detail fields only an explicit
/// info lookup returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    #[serde(flatten)]
    pub asset: Asset,
    /// Locally accessible URI, when the platform can provide one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Raw EXIF payload as reported by the platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exif: Option<Value>,
}

/// One page of an asset listing, with the continuation state the platform
/// supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsPage {
    pub assets: Vec<Asset>,
    /// Opaque cursor to resume after the last returned asset
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
    pub total_count: u64,
}

/// Normalized asset query forwarded to the native service
///
/// Produced by [`MediaLibrary::assets`] from caller-shaped options; every
/// field is already validated and reduced to ids/enums.
///
/// [`MediaLibrary::assets`]: crate::facade::MediaLibrary::assets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsQuery {
    /// Page size
    pub first: Option<u32>,
    /// Continuation cursor (asset id or opaque cursor string)
    pub after: Option<String>,
    /// Restrict to one album
    pub album_id: Option<String>,
    pub sort_by: Vec<SortSpec>,
    pub media_types: Vec<MediaType>,
}
