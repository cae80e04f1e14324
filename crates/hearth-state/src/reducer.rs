#![forbid(unsafe_code)]

//! The pure state-transition function.
//!
//! `reduce` is total: every `(state, action)` pair produces a new state,
//! and malformed or stale actions (an unknown collection id, a dismissal
//! for a tip that is no longer showing) degrade to no-ops rather than
//! failing. The state is UI-facing and must never take the render loop
//! down with it.
//!
//! # Invariants
//!
//! 1. An action touches only its target: every other section slot keeps
//!    its `Arc` identity in the returned state.
//! 2. `expanded_collections` is always a subset of the current collection
//!    ids.
//! 3. Expand/collapse are idempotent.
//! 4. A mode switch never clears section data.

use crate::action::HomeAction;
use crate::section::{Collection, Loadable, SectionData};
use crate::state::HomeState;

/// Fold one action into the snapshot, returning the next snapshot.
#[must_use]
pub fn reduce(state: &HomeState, action: &HomeAction) -> HomeState {
    match action {
        HomeAction::SectionLoaded(data) => section_loaded(state, data),
        HomeAction::ModeChanged(mode) => HomeState {
            mode: *mode,
            ..state.clone()
        },
        HomeAction::CollectionExpanded(id) => {
            // An unknown id would break the expanded-subset invariant.
            let known = state.collections.items().iter().any(|c| c.id == *id);
            if !known || state.is_expanded(*id) {
                return state.clone();
            }
            let mut next = state.clone();
            next.expanded_collections.insert(*id);
            next
        }
        HomeAction::CollectionCollapsed(id) => {
            if !state.is_expanded(*id) {
                return state.clone();
            }
            let mut next = state.clone();
            next.expanded_collections.remove(id);
            next
        }
        HomeAction::CollectionsChanged(collections) => {
            replace_collections(state, collections.clone())
        }
        HomeAction::TipDismissed(id) => match &state.tip {
            Some(tip) if tip.id == *id => HomeState {
                tip: None,
                ..state.clone()
            },
            // Stale dismiss: a newer tip is showing, keep it.
            _ => state.clone(),
        },
        HomeAction::CollectionsPlaceholderRemoved => HomeState {
            show_collection_placeholder: false,
            ..state.clone()
        },
        HomeAction::DefaultBrowserCardDismissed => HomeState {
            show_set_as_default_browser_card: false,
            ..state.clone()
        },
    }
}

fn section_loaded(state: &HomeState, data: &SectionData) -> HomeState {
    match data {
        SectionData::Collections(collections) => replace_collections(state, collections.clone()),
        SectionData::TopSites(sites) => HomeState {
            top_sites: Loadable::ready(sites.clone()),
            ..state.clone()
        },
        SectionData::RecentTabs(tabs) => HomeState {
            recent_tabs: Loadable::ready(tabs.clone()),
            ..state.clone()
        },
        SectionData::RecentBookmarks(bookmarks) => HomeState {
            recent_bookmarks: Loadable::ready(bookmarks.clone()),
            ..state.clone()
        },
        SectionData::HistoryHighlights(groups) => HomeState {
            history_highlights: Loadable::ready(groups.clone()),
            ..state.clone()
        },
        SectionData::RecommendedContent(categories) => HomeState {
            recommended: Loadable::ready(categories.clone()),
            ..state.clone()
        },
        SectionData::Tip(tip) => HomeState {
            tip: tip.clone(),
            ..state.clone()
        },
    }
}

fn replace_collections(state: &HomeState, collections: Vec<Collection>) -> HomeState {
    let mut next = state.clone();
    next.expanded_collections
        .retain(|id| collections.iter().any(|c| c.id == *id));
    next.collections = Loadable::ready(collections);
    next
}
