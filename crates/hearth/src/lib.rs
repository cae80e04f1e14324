#![forbid(unsafe_code)]

//! Hearth public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the member crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Flag re-exports -------------------------------------------------------

pub use hearth_flags::{BuildChannel, FeatureFlag, FeatureFlags};

// --- State re-exports ------------------------------------------------------

pub use hearth_state::{
    BookmarkRef, Collection, CollectionId, HistoryEntry, HistoryGroup, HomeAction, HomeState,
    HomeStore, Loadable, Mode, SectionData, SectionKind, Site, Story, StoryCategory, TabRef, Tip,
    TipId, reduce,
};

// --- Onboarding re-exports -------------------------------------------------

#[cfg(feature = "record-persistence")]
pub use hearth_onboarding::FileRecordStore;
pub use hearth_onboarding::{
    DialogId, MemoryRecordStore, OnboardingSequencer, Phase, RecordError, RecordResult,
    RecordStore,
};

// --- View re-exports -------------------------------------------------------

pub use hearth_view::{ViewItem, project};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BuildChannel, FeatureFlags, HomeAction, HomeState, HomeStore, Loadable, Mode,
        OnboardingSequencer, Phase, SectionData, ViewItem, project,
    };

    pub use crate::{flags, onboarding, state, view};
}

pub use hearth_flags as flags;
pub use hearth_onboarding as onboarding;
pub use hearth_state as state;
pub use hearth_view as view;
