//! The example bundles shipped with the game server
//!
//! A bundle is referenced by the URL of its git repository. The configuration
//! file enables bundles by their short name, which is the last path segment of
//! that URL.

use std::fmt;

/// Bundles installed by a default setup, in install order.
pub const DEFAULT_BUNDLES: &[&str] = &[
    "https://github.com/gregstadermann/areas",
    "https://github.com/gregstadermann/channels",
    "https://github.com/gregstadermann/combat",
    "https://github.com/gregstadermann/commands",
    "https://github.com/gregstadermann/debug",
    "https://github.com/gregstadermann/effects",
    "https://github.com/gregstadermann/input-events",
    "https://github.com/gregstadermann/lib",
    "https://github.com/gregstadermann/npc-behaviors",
    "https://github.com/gregstadermann-player-events",
    "https://github.com/gregstadermann/quests",
    "https://github.com/gregstadermann/simple-crafting",
    "https://github.com/gregstadermann/vendor-npcs",
    "https://github.com/gregstadermann/player-groups",
    "https://github.com/gregstadermann/progressive-respawn",
    "https://github.com/gregstadermann/telnet-networking",
    "https://github.com/gregstadermann/websocket-networking",
];

/// Reference to a bundle repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRef(String);

impl BundleRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference exactly as it is passed to the package manager
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name under which the bundle is enabled in `ranvier.json`
    pub fn short_name(&self) -> &str {
        short_name(&self.0)
    }
}

impl fmt::Display for BundleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the default bundle list as owned references
pub fn default_bundles() -> Vec<BundleRef> {
    DEFAULT_BUNDLES.iter().copied().map(BundleRef::new).collect()
}

/// Derive the short name of a bundle reference.
///
/// The short name is the final path segment when that segment is made of
/// lowercase ASCII letters and hyphens only and something precedes its slash.
/// Any other reference is its own short name.
pub fn short_name(reference: &str) -> &str {
    let Some(slash) = reference.rfind('/') else {
        return reference;
    };
    let segment = &reference[slash + 1..];

    let is_name = !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-');

    if slash > 0 && is_name {
        segment
    } else {
        reference
    }
}
