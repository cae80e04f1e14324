#![forbid(unsafe_code)]

//! Build-channel feature flags.
//!
//! A single source for flags that are mostly decided by the release
//! channel. The table is resolved once at process start from the build
//! channel and is read-only afterward: [`FeatureFlags::is_enabled`] is a
//! pure lookup with no side effects and no failure modes, so callers may
//! consult it from any layer without ceremony.
//!
//! Flags gate which home-screen features the outer shell wires up (which
//! loaders get started, which onboarding overlays are candidates). The
//! state engine itself stays flag-agnostic: a disabled feature simply
//! never delivers its section.

/// The release channel a build was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildChannel {
    /// General availability builds.
    Release,
    /// Pre-release beta builds.
    Beta,
    /// Nightly developer builds.
    Nightly,
    /// Local debug builds.
    Debug,
}

impl BuildChannel {
    /// Every channel, for exhaustive enumeration in tests and tooling.
    pub const ALL: [BuildChannel; 4] = [
        BuildChannel::Release,
        BuildChannel::Beta,
        BuildChannel::Nightly,
        BuildChannel::Debug,
    ];

    /// Whether this is a general-availability build.
    #[must_use]
    pub fn is_release(self) -> bool {
        self == BuildChannel::Release
    }

    /// Whether this is a beta build.
    #[must_use]
    pub fn is_beta(self) -> bool {
        self == BuildChannel::Beta
    }

    /// Whether this is a local debug build.
    #[must_use]
    pub fn is_debug(self) -> bool {
        self == BuildChannel::Debug
    }

    /// Whether this is a nightly or debug build.
    ///
    /// The usual gate for features that are still baking.
    #[must_use]
    pub fn is_nightly_or_debug(self) -> bool {
        matches!(self, BuildChannel::Nightly | BuildChannel::Debug)
    }
}

/// Every feature the flag table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureFlag {
    /// Pull the web content down far enough to reload the page.
    PullToRefresh,
    /// Sync address autofill data.
    SyncAddresses,
    /// The recent-tabs section of the home screen.
    RecentTabs,
    /// The recently-saved-bookmarks section of the home screen.
    RecentBookmarks,
    /// Home-screen sections derived from history metadata.
    HistoryHighlights,
    /// Recommended stories on the home screen.
    RecommendedStories,
    /// Sponsored entries mixed into recommended stories.
    SponsoredStories,
    /// Separate least-used tabs into a secondary section.
    InactiveTabs,
    /// The sync onboarding overlay on the home screen.
    SyncDialog,
    /// The jump-back-in onboarding overlay on the home screen.
    JumpBackInDialog,
    /// The customize-home onboarding overlay.
    HomeOnboardingDialog,
    /// First-run onboarding refresh.
    FirstRunUpdates,
    /// Drag tabs to reorder them.
    TabReordering,
    /// The unified search bar experience.
    UnifiedSearch,
    /// Save a page as PDF from the page menu.
    SaveToPdf,
    /// Override the curated extension collection.
    CustomExtensionCollections,
}

impl FeatureFlag {
    /// Every flag, for exhaustive enumeration in tests and tooling.
    pub const ALL: [FeatureFlag; 16] = [
        FeatureFlag::PullToRefresh,
        FeatureFlag::SyncAddresses,
        FeatureFlag::RecentTabs,
        FeatureFlag::RecentBookmarks,
        FeatureFlag::HistoryHighlights,
        FeatureFlag::RecommendedStories,
        FeatureFlag::SponsoredStories,
        FeatureFlag::InactiveTabs,
        FeatureFlag::SyncDialog,
        FeatureFlag::JumpBackInDialog,
        FeatureFlag::HomeOnboardingDialog,
        FeatureFlag::FirstRunUpdates,
        FeatureFlag::TabReordering,
        FeatureFlag::UnifiedSearch,
        FeatureFlag::SaveToPdf,
        FeatureFlag::CustomExtensionCollections,
    ];
}

/// The resolved flag table for one build.
///
/// Construct once with [`FeatureFlags::for_channel`] and share freely;
/// the table is `Copy` and immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    channel: BuildChannel,
}

impl FeatureFlags {
    /// Resolve the flag table for a build channel.
    #[must_use]
    pub fn for_channel(channel: BuildChannel) -> Self {
        Self { channel }
    }

    /// The channel this table was resolved for.
    #[must_use]
    pub fn channel(self) -> BuildChannel {
        self.channel
    }

    /// Whether a feature is enabled in this build.
    #[must_use]
    pub fn is_enabled(self, flag: FeatureFlag) -> bool {
        let channel = self.channel;
        match flag {
            FeatureFlag::PullToRefresh => true,
            FeatureFlag::SyncAddresses => false,
            FeatureFlag::RecentTabs => true,
            FeatureFlag::RecentBookmarks => true,
            FeatureFlag::HistoryHighlights => true,
            FeatureFlag::RecommendedStories => true,
            // Sponsored entries ride on the recommended feed and are only
            // exercised in debug builds.
            FeatureFlag::SponsoredStories => {
                self.is_enabled(FeatureFlag::RecommendedStories) && channel.is_debug()
            }
            FeatureFlag::InactiveTabs => true,
            FeatureFlag::SyncDialog => true,
            FeatureFlag::JumpBackInDialog => true,
            FeatureFlag::HomeOnboardingDialog => true,
            FeatureFlag::FirstRunUpdates => false,
            FeatureFlag::TabReordering => channel.is_nightly_or_debug(),
            FeatureFlag::UnifiedSearch => channel.is_nightly_or_debug(),
            FeatureFlag::SaveToPdf => channel.is_nightly_or_debug(),
            FeatureFlag::CustomExtensionCollections => {
                channel.is_nightly_or_debug() || channel.is_beta()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_deterministic_per_channel() {
        for channel in BuildChannel::ALL {
            let a = FeatureFlags::for_channel(channel);
            let b = FeatureFlags::for_channel(channel);
            for flag in FeatureFlag::ALL {
                assert_eq!(a.is_enabled(flag), b.is_enabled(flag));
            }
        }
    }

    #[test]
    fn constant_flags_ignore_channel() {
        let constants = [
            (FeatureFlag::PullToRefresh, true),
            (FeatureFlag::SyncAddresses, false),
            (FeatureFlag::RecentTabs, true),
            (FeatureFlag::RecentBookmarks, true),
            (FeatureFlag::HistoryHighlights, true),
            (FeatureFlag::RecommendedStories, true),
            (FeatureFlag::InactiveTabs, true),
            (FeatureFlag::SyncDialog, true),
            (FeatureFlag::JumpBackInDialog, true),
            (FeatureFlag::HomeOnboardingDialog, true),
            (FeatureFlag::FirstRunUpdates, false),
        ];
        for channel in BuildChannel::ALL {
            let flags = FeatureFlags::for_channel(channel);
            for (flag, expected) in constants {
                assert_eq!(flags.is_enabled(flag), expected, "{flag:?} on {channel:?}");
            }
        }
    }

    #[test]
    fn baking_features_need_nightly_or_debug() {
        for flag in [
            FeatureFlag::TabReordering,
            FeatureFlag::UnifiedSearch,
            FeatureFlag::SaveToPdf,
        ] {
            assert!(!FeatureFlags::for_channel(BuildChannel::Release).is_enabled(flag));
            assert!(!FeatureFlags::for_channel(BuildChannel::Beta).is_enabled(flag));
            assert!(FeatureFlags::for_channel(BuildChannel::Nightly).is_enabled(flag));
            assert!(FeatureFlags::for_channel(BuildChannel::Debug).is_enabled(flag));
        }
    }

    #[test]
    fn custom_collections_also_open_to_beta() {
        let flag = FeatureFlag::CustomExtensionCollections;
        assert!(!FeatureFlags::for_channel(BuildChannel::Release).is_enabled(flag));
        assert!(FeatureFlags::for_channel(BuildChannel::Beta).is_enabled(flag));
        assert!(FeatureFlags::for_channel(BuildChannel::Nightly).is_enabled(flag));
        assert!(FeatureFlags::for_channel(BuildChannel::Debug).is_enabled(flag));
    }

    #[test]
    fn sponsored_stories_require_debug() {
        let flag = FeatureFlag::SponsoredStories;
        assert!(!FeatureFlags::for_channel(BuildChannel::Release).is_enabled(flag));
        assert!(!FeatureFlags::for_channel(BuildChannel::Beta).is_enabled(flag));
        assert!(!FeatureFlags::for_channel(BuildChannel::Nightly).is_enabled(flag));
        assert!(FeatureFlags::for_channel(BuildChannel::Debug).is_enabled(flag));
    }

    #[test]
    fn all_covers_every_flag() {
        // Pairwise distinct, so ALL really enumerates the whole table.
        for (i, a) in FeatureFlag::ALL.iter().enumerate() {
            for b in &FeatureFlag::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
