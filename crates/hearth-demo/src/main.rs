#![forbid(unsafe_code)]

//! Drives the whole pipeline from the command line: simulated loaders
//! deliver sections, each dispatch reprojects the item list, and the
//! onboarding chain is walked to completion.
//!
//! Run with: cargo run -p hearth-demo
//! Verbose:  RUST_LOG=debug cargo run -p hearth-demo

use hearth::prelude::*;
use hearth::{
    BookmarkRef, Collection, CollectionId, HistoryEntry, HistoryGroup, HomeAction,
    MemoryRecordStore, Site, Story, StoryCategory, TabRef,
};
use tracing::info;

fn simulated_loader_actions() -> Vec<HomeAction> {
    vec![
        HomeAction::SectionLoaded(SectionData::TopSites(vec![
            Site {
                url: "https://forge.example".into(),
                title: "Forge".into(),
                pinned: true,
            },
            Site {
                url: "https://news.example".into(),
                title: "News".into(),
                pinned: false,
            },
        ])),
        HomeAction::SectionLoaded(SectionData::Collections(vec![Collection {
            id: CollectionId(1),
            title: "Trip planning".into(),
            tabs: vec![TabRef {
                id: "t-9".into(),
                url: "https://rail.example".into(),
                title: "Timetables".into(),
            }],
        }])),
        HomeAction::CollectionExpanded(CollectionId(1)),
        HomeAction::SectionLoaded(SectionData::RecentTabs(vec![TabRef {
            id: "t-1".into(),
            url: "https://docs.example/borrowing".into(),
            title: "Borrowing".into(),
        }])),
        HomeAction::SectionLoaded(SectionData::RecentBookmarks(vec![BookmarkRef {
            guid: "bm-1".into(),
            url: Some("https://recipes.example/bread".into()),
            title: Some("Bread".into()),
        }])),
        HomeAction::SectionLoaded(SectionData::HistoryHighlights(vec![HistoryGroup {
            title: "rust lifetimes".into(),
            entries: vec![HistoryEntry {
                url: "https://docs.example/lifetimes".into(),
                title: "Lifetimes".into(),
            }],
        }])),
        HomeAction::SectionLoaded(SectionData::RecommendedContent(vec![StoryCategory {
            name: "technology".into(),
            stories: vec![Story {
                title: "Faster diffing".into(),
                url: "https://stories.example/diffing".into(),
                publisher: "The Daily Build".into(),
                sponsored: false,
            }],
        }])),
    ]
}

fn describe(item: &ViewItem) -> String {
    match item {
        ViewItem::TopSitePager { sites } => format!("top-site pager ({} sites)", sites.len()),
        ViewItem::DefaultBrowserCard => "default-browser card".into(),
        ViewItem::CollectionHeader => "collections header".into(),
        ViewItem::NoCollectionsMessage => "no-collections hint".into(),
        ViewItem::CollectionItem {
            collection,
            expanded,
        } => format!(
            "collection '{}' ({})",
            collection.title,
            if *expanded { "expanded" } else { "collapsed" }
        ),
        ViewItem::RecentTabsHeader => "recent tabs header".into(),
        ViewItem::RecentTabItem(tab) => format!("recent tab '{}'", tab.title),
        ViewItem::RecentBookmarksHeader => "recent bookmarks header".into(),
        ViewItem::RecentBookmarkItem(bookmark) => {
            format!("bookmark '{}'", bookmark.title.as_deref().unwrap_or("?"))
        }
        ViewItem::HistoryHighlightsHeader => "history highlights header".into(),
        ViewItem::HistoryGroupItem(group) => format!("history group '{}'", group.title),
        ViewItem::RecommendedStories { categories } => {
            format!("recommended stories ({} categories)", categories.len())
        }
        ViewItem::CustomizeHomeButton => "customize-home button".into(),
        ViewItem::TipBanner(tip) => format!("tip '{}'", tip.title),
        ViewItem::PrivateBrowsingDescription => "private browsing description".into(),
    }
}

fn print_projection(state: &HomeState) {
    let items = project(state);
    println!("home screen ({} items):", items.len());
    for item in &items {
        println!("  - {}", describe(item));
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let flags = FeatureFlags::for_channel(BuildChannel::Debug);
    let mut store = HomeStore::default();
    let mut sequencer = OnboardingSequencer::new(MemoryRecordStore::new(), flags);

    for action in simulated_loader_actions() {
        info!(action = action.name(), "loader delivered");
        store.dispatch(action);
    }
    print_projection(store.state());

    println!("onboarding chain:");
    let mut next = sequencer.on_state_change(store.state());
    while let Some(dialog) = next {
        println!("  showing '{}'", dialog.key());
        next = sequencer.dismiss(store.state());
    }
    println!("  all dialogs shown\n");

    store.dispatch(HomeAction::ModeChanged(Mode::Private));
    println!("after switching to private mode:");
    print_projection(store.state());

    store.dispatch(HomeAction::ModeChanged(Mode::Normal));
    println!("back in normal mode, data intact:");
    print_projection(store.state());
}
