#![forbid(unsafe_code)]

//! Pure projection from the aggregate snapshot to the ordered item list.
//!
//! Ordering rules:
//!
//! 1. Private mode early-exits with a fixed item set, independent of all
//!    section contents.
//! 2. Normal mode appends, in this order and each only when populated:
//!    top-sites pager, default-browser card, collections (or the
//!    empty-collections placeholder), recent tabs, recent bookmarks,
//!    history highlights, recommended stories, tip banner.
//! 3. Exactly one customize-home button trails the first optional block
//!    (recent tabs, recent bookmarks, history highlights, recommended
//!    stories) that rendered anything; no button when none did.

use hearth_state::{HomeState, Mode};

use crate::item::ViewItem;

/// Project a snapshot into the ordered renderable item list.
///
/// Total, pure, and side-effect free; safe to call on every state change.
#[must_use]
pub fn project(state: &HomeState) -> Vec<ViewItem> {
    match state.mode {
        Mode::Private => private_mode_items(),
        Mode::Normal => normal_mode_items(state),
    }
}

fn private_mode_items() -> Vec<ViewItem> {
    vec![ViewItem::PrivateBrowsingDescription]
}

fn normal_mode_items(state: &HomeState) -> Vec<ViewItem> {
    let mut items = Vec::new();

    if state.top_sites.is_populated() {
        items.push(ViewItem::TopSitePager {
            sites: state.top_sites.items().to_vec(),
        });
    }

    if state.show_set_as_default_browser_card {
        items.push(ViewItem::DefaultBrowserCard);
    }

    let collections = state.collections.items();
    if collections.is_empty() {
        if state.show_collection_placeholder {
            items.push(ViewItem::CollectionHeader);
            items.push(ViewItem::NoCollectionsMessage);
        }
    } else {
        items.push(ViewItem::CollectionHeader);
        for collection in collections {
            items.push(ViewItem::CollectionItem {
                collection: collection.clone(),
                expanded: state.is_expanded(collection.id),
            });
        }
    }

    let mut customize_pending = true;

    if state.recent_tabs.is_populated() {
        items.push(ViewItem::RecentTabsHeader);
        items.extend(
            state
                .recent_tabs
                .items()
                .iter()
                .cloned()
                .map(ViewItem::RecentTabItem),
        );
        push_customize_once(&mut items, &mut customize_pending);
    }

    if state.recent_bookmarks.is_populated() {
        items.push(ViewItem::RecentBookmarksHeader);
        items.extend(
            state
                .recent_bookmarks
                .items()
                .iter()
                .cloned()
                .map(ViewItem::RecentBookmarkItem),
        );
        push_customize_once(&mut items, &mut customize_pending);
    }

    if state.history_highlights.is_populated() {
        items.push(ViewItem::HistoryHighlightsHeader);
        items.extend(
            state
                .history_highlights
                .items()
                .iter()
                .cloned()
                .map(ViewItem::HistoryGroupItem),
        );
        push_customize_once(&mut items, &mut customize_pending);
    }

    if state.recommended.is_populated() {
        items.push(ViewItem::RecommendedStories {
            categories: state.recommended.items().to_vec(),
        });
        push_customize_once(&mut items, &mut customize_pending);
    }

    if let Some(tip) = &state.tip {
        items.push(ViewItem::TipBanner(tip.clone()));
    }

    items
}

fn push_customize_once(items: &mut Vec<ViewItem>, pending: &mut bool) {
    if *pending {
        items.push(ViewItem::CustomizeHomeButton);
        *pending = false;
    }
}
