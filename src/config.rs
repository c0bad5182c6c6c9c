use serde::{Deserialize, Serialize};

/// Capabilities of the host platform, resolved once when the adapter
/// starts so the rest of the crate branches on flags instead of version
/// checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCapabilities {
    /// Whether the platform exposes per-channel ranking metadata
    /// (badge eligibility and channel ids). Platforms without it predate
    /// the channel system entirely.
    pub channel_ranking: bool,
}

impl PlatformCapabilities {
    /// Capabilities of a platform with the channel/ranking system.
    pub fn modern() -> Self {
        Self {
            channel_ranking: true,
        }
    }

    /// Capabilities of a platform that predates notification channels.
    pub fn legacy() -> Self {
        Self {
            channel_ranking: false,
        }
    }
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self::modern()
    }
}
