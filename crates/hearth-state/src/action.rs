#![forbid(unsafe_code)]

//! The action vocabulary delivered to the reducer.
//!
//! Actions originate from asynchronous section loaders completing, from
//! user-interaction callbacks, and from mode switches. A cancelled loader
//! simply never delivers its action; there is no pending/cancelled state
//! to model here.

use crate::section::{Collection, CollectionId, SectionData, TipId};
use crate::state::Mode;

/// One discrete state-change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    /// A loader delivered a section's complete new payload.
    SectionLoaded(SectionData),
    /// The user switched between normal and private browsing.
    ModeChanged(Mode),
    /// The user expanded a collection. No-op for unknown ids.
    CollectionExpanded(CollectionId),
    /// The user collapsed a collection. No-op if not expanded.
    CollectionCollapsed(CollectionId),
    /// Collection storage changed; replaces the list but keeps the
    /// expanded set for ids still present.
    CollectionsChanged(Vec<Collection>),
    /// The user dismissed a tip. Ignored unless the id matches the
    /// currently shown tip.
    TipDismissed(TipId),
    /// The user dismissed the empty-collections hint.
    CollectionsPlaceholderRemoved,
    /// The user dismissed the set-as-default-browser card.
    DefaultBrowserCardDismissed,
}

impl HomeAction {
    /// Stable name for instrumentation.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            HomeAction::SectionLoaded(_) => "section_loaded",
            HomeAction::ModeChanged(_) => "mode_changed",
            HomeAction::CollectionExpanded(_) => "collection_expanded",
            HomeAction::CollectionCollapsed(_) => "collection_collapsed",
            HomeAction::CollectionsChanged(_) => "collections_changed",
            HomeAction::TipDismissed(_) => "tip_dismissed",
            HomeAction::CollectionsPlaceholderRemoved => "collections_placeholder_removed",
            HomeAction::DefaultBrowserCardDismissed => "default_browser_card_dismissed",
        }
    }
}
