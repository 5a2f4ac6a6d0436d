//! Platform capability flags
//!
//! The two host platforms diverge on three points. Capturing them here as
//! construction-time configuration keeps the divergence a single, testable
//! surface instead of platform branches scattered across method bodies.

use serde::{Deserialize, Serialize};

/// What the host platform's media library can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCapabilities {
    /// Whether the native add-to-album call accepts a copy flag. When
    /// false the flag is never forwarded (the platform always moves
    /// references, never copies).
    pub supports_copy_on_add: bool,
    /// Whether album creation requires an initial asset (empty albums
    /// cannot exist on that platform)
    pub requires_initial_asset_for_album: bool,
    /// Whether the platform exposes "moments" (smart photo clusters
    /// grouped by time and location)
    pub supports_moments: bool,
}

impl PlatformCapabilities {
    /// iOS photo library: no copy flag, empty albums allowed, moments
    /// available
    pub fn ios() -> Self {
        Self {
            supports_copy_on_add: false,
            requires_initial_asset_for_album: false,
            supports_moments: true,
        }
    }

    /// Android media store: copy flag honored, album creation needs an
    /// initial asset, no moments
    pub fn android() -> Self {
        Self {
            supports_copy_on_add: true,
            requires_initial_asset_for_album: true,
            supports_moments: false,
        }
    }
}
