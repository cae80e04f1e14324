#![forbid(unsafe_code)]

//! The aggregate home-screen snapshot.

use std::collections::BTreeSet;

use crate::section::{
    BookmarkRef, Collection, CollectionId, HistoryGroup, Loadable, Site, StoryCategory, TabRef, Tip,
};

/// Global browsing mode.
///
/// Private mode does not alter the stored sections; it only suppresses
/// them in the projection, so switching back to normal shows previously
/// loaded data without a re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Private,
}

/// The full home-screen snapshot: one slot per section, the browsing
/// mode, and a couple of dismissible UI flags.
///
/// Snapshots are cheap to clone (section payloads are `Arc`-backed) and
/// consumers only ever receive immutable references; the live instance is
/// exclusively owned by [`HomeStore`](crate::store::HomeStore).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeState {
    pub mode: Mode,
    pub top_sites: Loadable<Vec<Site>>,
    pub collections: Loadable<Vec<Collection>>,
    /// Ids of collections currently rendered expanded.
    ///
    /// Invariant: always a subset of the ids in `collections`.
    pub expanded_collections: BTreeSet<CollectionId>,
    pub recent_tabs: Loadable<Vec<TabRef>>,
    pub recent_bookmarks: Loadable<Vec<BookmarkRef>>,
    pub history_highlights: Loadable<Vec<HistoryGroup>>,
    pub recommended: Loadable<Vec<StoryCategory>>,
    pub tip: Option<Tip>,
    /// Show the empty-collections hint in place of collection items.
    pub show_collection_placeholder: bool,
    /// Show the set-as-default-browser card.
    pub show_set_as_default_browser_card: bool,
}

impl HomeState {
    /// Whether any of the optional content sections has items.
    ///
    /// The optional sections are recent tabs, recent bookmarks, history
    /// highlights, and recommended content; together they decide whether
    /// the customize-home affordances (trailing button, onboarding
    /// overlay) have anything to anchor to.
    #[must_use]
    pub fn has_optional_content(&self) -> bool {
        self.recent_tabs.is_populated()
            || self.recent_bookmarks.is_populated()
            || self.history_highlights.is_populated()
            || self.recommended.is_populated()
    }

    /// Whether a collection is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, id: CollectionId) -> bool {
        self.expanded_collections.contains(&id)
    }
}
