//! Platform detection for the logical "Mod" key.
//!
//! Responsibilities:
//! - Report whether the host follows Apple modifier conventions (Command as Mod).
//! - Map a configured `PlatformPreference` onto a concrete `Platform`.
//!
//! Does NOT handle:
//! - Key matching itself (see `key` module).
//!
//! Invariants:
//! - A `Platform` answer is stable for the lifetime of the value.

use std::sync::Arc;

use devtoolbox_config::PlatformPreference;

/// Capability answering which modifier acts as "Mod".
pub trait Platform: Send + Sync {
    /// True when Command (Meta) is the mod key, false when Control is.
    fn is_apple_like(&self) -> bool;
}

/// Detects the platform from the compile target.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn is_apple_like(&self) -> bool {
        cfg!(any(target_os = "macos", target_os = "ios"))
    }
}

/// A fixed answer, used for forced settings and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPlatform(pub bool);

impl StaticPlatform {
    pub const APPLE: Self = Self(true);
    pub const OTHER: Self = Self(false);
}

impl Platform for StaticPlatform {
    fn is_apple_like(&self) -> bool {
        self.0
    }
}

/// Classifies a browser user-agent or `navigator.platform` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentPlatform {
    apple: bool,
}

const APPLE_MARKERS: &[&str] = &["mac", "iphone", "ipad", "ipod"];

impl UserAgentPlatform {
    pub fn new(user_agent: &str) -> Self {
        let lowered = user_agent.to_lowercase();
        Self {
            apple: APPLE_MARKERS.iter().any(|marker| lowered.contains(marker)),
        }
    }
}

impl Platform for UserAgentPlatform {
    fn is_apple_like(&self) -> bool {
        self.apple
    }
}

/// Resolve a settings preference into a shared platform capability.
pub fn platform_for(preference: PlatformPreference) -> Arc<dyn Platform> {
    match preference {
        PlatformPreference::Auto => Arc::new(HostPlatform),
        PlatformPreference::Mac => Arc::new(StaticPlatform::APPLE),
        PlatformPreference::Other => Arc::new(StaticPlatform::OTHER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_markers_are_case_insensitive() {
        let safari = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15";
        assert!(UserAgentPlatform::new(safari).is_apple_like());
        assert!(UserAgentPlatform::new("iPhone").is_apple_like());
        assert!(UserAgentPlatform::new("MacIntel").is_apple_like());
        assert!(!UserAgentPlatform::new("Mozilla/5.0 (X11; Linux x86_64)").is_apple_like());
        assert!(!UserAgentPlatform::new("Win32").is_apple_like());
    }

    #[test]
    fn test_preference_maps_to_fixed_platforms() {
        assert!(platform_for(PlatformPreference::Mac).is_apple_like());
        assert!(!platform_for(PlatformPreference::Other).is_apple_like());
        assert_eq!(
            platform_for(PlatformPreference::Auto).is_apple_like(),
            HostPlatform.is_apple_like()
        );
    }
}
