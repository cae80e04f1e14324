#![forbid(unsafe_code)]

//! Renderable item descriptors.
//!
//! A projection yields an ordered list of these; the rendering layer
//! diffs that list against what is on screen. Descriptors carry their
//! payloads by value so the renderer never reaches back into the state.

use hearth_state::{BookmarkRef, Collection, HistoryGroup, Site, StoryCategory, TabRef, Tip};

/// One renderable entry of the home screen, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    /// Horizontal pager of pinned and frequent sites.
    TopSitePager { sites: Vec<Site> },
    /// Prompt card to set this browser as the system default.
    DefaultBrowserCard,
    /// Header over the collections block.
    CollectionHeader,
    /// Hint shown when the user has no collections yet.
    NoCollectionsMessage,
    /// One collection row, expanded or collapsed.
    CollectionItem { collection: Collection, expanded: bool },
    /// Header over the recent-tabs block.
    RecentTabsHeader,
    /// One recent tab row.
    RecentTabItem(TabRef),
    /// Header over the recent-bookmarks block.
    RecentBookmarksHeader,
    /// One recently saved bookmark row.
    RecentBookmarkItem(BookmarkRef),
    /// Header over the history-highlights block.
    HistoryHighlightsHeader,
    /// One history group row.
    HistoryGroupItem(HistoryGroup),
    /// The whole recommended-stories feed as a single entry.
    RecommendedStories { categories: Vec<StoryCategory> },
    /// Entry point to the customize-home settings screen.
    CustomizeHomeButton,
    /// A dismissible promotional tip.
    TipBanner(Tip),
    /// Static explainer shown instead of content in private mode.
    PrivateBrowsingDescription,
}
