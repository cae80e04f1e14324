#![forbid(unsafe_code)]

//! Section payload types and the tri-state load slot.
//!
//! Every content block of the home screen is loaded independently by an
//! external collaborator (top-sites storage, collection storage, the tab
//! list, bookmark storage, history storage, the recommended-content
//! service). The types here are plain data, deliberately free of any
//! rendering-toolkit dependency, so the reducer and projection can be
//! exercised without a UI host.
//!
//! A section slot is a [`Loadable`], which distinguishes three states:
//! never loaded, loaded but empty, and loaded with content. Payloads live
//! behind an `Arc`, so cloning an aggregate snapshot is cheap and an
//! untouched section keeps its allocation across reductions — downstream
//! diffing relies on that.

use std::sync::Arc;

/// A pinned or frequently-visited site on the top-sites pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub url: String,
    pub title: String,
    /// Pinned sites survive frecency churn.
    pub pinned: bool,
}

/// Identifier of a tab collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionId(pub u64);

/// A user-curated group of saved tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: CollectionId,
    pub title: String,
    pub tabs: Vec<TabRef>,
}

/// A lightweight reference to an open or saved tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRef {
    pub id: String,
    pub url: String,
    pub title: String,
}

/// A reference to a recently saved bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRef {
    pub guid: String,
    pub url: Option<String>,
    pub title: Option<String>,
}

/// One visit inside a history highlight group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
}

/// A group of related history visits, keyed by search term or origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryGroup {
    pub title: String,
    pub entries: Vec<HistoryEntry>,
}

/// A recommended story from the content service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub title: String,
    pub url: String,
    pub publisher: String,
    pub sponsored: bool,
}

/// A named category of recommended stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryCategory {
    pub name: String,
    pub stories: Vec<Story>,
}

/// Identifier of a promotional tip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TipId(pub String);

impl TipId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// A one-off promotional or explanatory tip banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tip {
    pub id: TipId,
    pub title: String,
    pub text: String,
    pub learn_more_url: Option<String>,
}

/// Tri-state load slot for a section payload.
///
/// `Pending` means the section's loader has not delivered yet;
/// `Ready` holds whatever it delivered, including an empty payload.
#[derive(Debug, Clone, Default)]
pub enum Loadable<T> {
    /// No delivery from the loader yet.
    #[default]
    Pending,
    /// The loader delivered this payload.
    Ready(Arc<T>),
}

impl<T> Loadable<T> {
    /// Wrap a freshly delivered payload.
    #[must_use]
    pub fn ready(value: T) -> Self {
        Loadable::Ready(Arc::new(value))
    }

    /// The payload, if one was delivered.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        match self {
            Loadable::Pending => None,
            Loadable::Ready(value) => Some(value),
        }
    }

    /// Whether the loader has not delivered yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Loadable::Pending)
    }

    /// Whether two slots share the same allocation.
    ///
    /// Two `Pending` slots compare equal; two `Ready` slots compare by
    /// `Arc` identity. This is the observable form of the "untouched
    /// sections are preserved" reducer guarantee.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Loadable::Pending, Loadable::Pending) => true,
            (Loadable::Ready(a), Loadable::Ready(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> Loadable<Vec<T>> {
    /// The delivered items, or an empty slice while pending.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.get().map_or(&[], Vec::as_slice)
    }

    /// Whether the slot holds at least one item.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.items().is_empty()
    }
}

impl<T: PartialEq> PartialEq for Loadable<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Loadable::Pending, Loadable::Pending) => true,
            (Loadable::Ready(a), Loadable::Ready(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Loadable<T> {}

/// Discriminant naming one home-screen section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    TopSites,
    Collections,
    RecentTabs,
    RecentBookmarks,
    HistoryHighlights,
    RecommendedContent,
    Tip,
}

/// A loader delivery: one section's complete new payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionData {
    TopSites(Vec<Site>),
    Collections(Vec<Collection>),
    RecentTabs(Vec<TabRef>),
    RecentBookmarks(Vec<BookmarkRef>),
    HistoryHighlights(Vec<HistoryGroup>),
    RecommendedContent(Vec<StoryCategory>),
    Tip(Option<Tip>),
}

impl SectionData {
    /// Which section this payload targets.
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionData::TopSites(_) => SectionKind::TopSites,
            SectionData::Collections(_) => SectionKind::Collections,
            SectionData::RecentTabs(_) => SectionKind::RecentTabs,
            SectionData::RecentBookmarks(_) => SectionKind::RecentBookmarks,
            SectionData::HistoryHighlights(_) => SectionKind::HistoryHighlights,
            SectionData::RecommendedContent(_) => SectionKind::RecommendedContent,
            SectionData::Tip(_) => SectionKind::Tip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_slot_has_no_items() {
        let slot: Loadable<Vec<Site>> = Loadable::Pending;
        assert!(slot.is_pending());
        assert!(slot.items().is_empty());
        assert!(!slot.is_populated());
    }

    #[test]
    fn ready_empty_differs_from_pending() {
        let loaded: Loadable<Vec<Site>> = Loadable::ready(Vec::new());
        assert!(!loaded.is_pending());
        assert!(!loaded.is_populated());
        assert_ne!(loaded, Loadable::Pending);
    }

    #[test]
    fn clone_shares_allocation() {
        let slot = Loadable::ready(vec![HistoryGroup {
            title: "rust".into(),
            entries: Vec::new(),
        }]);
        let copy = slot.clone();
        assert!(slot.ptr_eq(&copy));
    }

    #[test]
    fn section_data_kind_matches_variant() {
        assert_eq!(
            SectionData::TopSites(Vec::new()).kind(),
            SectionKind::TopSites
        );
        assert_eq!(SectionData::Tip(None).kind(), SectionKind::Tip);
    }
}
