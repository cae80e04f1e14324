#![forbid(unsafe_code)]

//! Home-screen content state for Hearth.
//!
//! This crate is the engine's single source of truth: typed section
//! payloads, the aggregate [`HomeState`] snapshot, the [`HomeAction`]
//! vocabulary, the pure [`reduce`] transition function, and the
//! [`HomeStore`] that owns the live snapshot and fans changes out to
//! observers.
//!
//! Data flows one way: external loaders and interaction handlers deliver
//! actions, the reducer folds them into a new snapshot, and consumers
//! (the projection in `hearth-view`, the onboarding sequencer in
//! `hearth-onboarding`) read immutable snapshots. Nothing here depends on
//! a rendering toolkit.

pub mod action;
pub mod reducer;
pub mod section;
pub mod state;
pub mod store;

pub use action::HomeAction;
pub use reducer::reduce;
pub use section::{
    BookmarkRef, Collection, CollectionId, HistoryEntry, HistoryGroup, Loadable, SectionData,
    SectionKind, Site, Story, StoryCategory, TabRef, Tip, TipId,
};
pub use state::{HomeState, Mode};
pub use store::HomeStore;
