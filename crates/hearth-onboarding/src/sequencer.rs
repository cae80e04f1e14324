#![forbid(unsafe_code)]

//! The onboarding overlay sequencer.
//!
//! First-run explanatory overlays each anchor to one home-screen element,
//! so which overlays make sense depends on the current [`HomeState`]. The
//! sequencer scans a fixed priority list of candidates on every state
//! change and shows the first one that is both unseen and eligible. At
//! most one overlay is visible at a time, and dismissing one immediately
//! re-scans so overlays chain without gaps or double-shows.
//!
//! The earlier incarnation of this flow wired dialogs together through
//! nested dismiss listeners; the explicit `Idle`/`Showing` machine here
//! keeps the mutual-exclusion and ordering rules visible and testable.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use hearth_flags::{FeatureFlag, FeatureFlags};
use hearth_state::{HomeState, Mode};

use crate::record::RecordStore;

/// Identity of one onboarding overlay.
///
/// `ALL` lists every dialog in static priority order: when several
/// candidates become eligible in the same state update, the earlier entry
/// wins. The order never depends on input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DialogId {
    /// Points at the search bar; always has an anchor.
    SearchBar,
    /// Points at the recent-tabs block.
    JumpBackIn,
    /// Points at the recommended-stories block.
    RecommendedStories,
    /// Explains the customize-home entry point.
    CustomizeHome,
    /// Points at the top-sites pager.
    TopSites,
}

impl DialogId {
    /// Every dialog, in priority order.
    pub const ALL: [DialogId; 5] = [
        DialogId::SearchBar,
        DialogId::JumpBackIn,
        DialogId::RecommendedStories,
        DialogId::CustomizeHome,
        DialogId::TopSites,
    ];

    /// Stable key used for persistence and instrumentation.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            DialogId::SearchBar => "search_bar",
            DialogId::JumpBackIn => "jump_back_in",
            DialogId::RecommendedStories => "recommended_stories",
            DialogId::CustomizeHome => "customize_home",
            DialogId::TopSites => "top_sites",
        }
    }
}

/// What the sequencer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No overlay visible.
    Idle,
    /// Exactly this overlay is visible.
    Showing(DialogId),
}

/// Priority-scan state machine over onboarding candidates.
///
/// Owns the record store; the caller renders whatever dialog id the
/// sequencer hands out and reports the dismissal back.
pub struct OnboardingSequencer<S: RecordStore> {
    records: S,
    flags: FeatureFlags,
    phase: Phase,
    // Backstop against re-offering within this process when a record
    // write fails.
    shown_this_session: BTreeSet<DialogId>,
}

impl<S: RecordStore> OnboardingSequencer<S> {
    /// Create a sequencer over a record store and the build's flag table.
    #[must_use]
    pub fn new(records: S, flags: FeatureFlags) -> Self {
        Self {
            records,
            flags,
            phase: Phase::Idle,
            shown_this_session: BTreeSet::new(),
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read access to the record store.
    #[must_use]
    pub fn records(&self) -> &S {
        &self.records
    }

    /// React to a new state snapshot.
    ///
    /// Returns the dialog to show, if the sequencer just left `Idle`.
    /// While an overlay is visible this is always `None`.
    pub fn on_state_change(&mut self, state: &HomeState) -> Option<DialogId> {
        match self.phase {
            Phase::Showing(_) => None,
            Phase::Idle => self.scan(state),
        }
    }

    /// Dismiss the currently showing overlay.
    ///
    /// Marks it shown, returns to `Idle`, and immediately re-scans so a
    /// dismissal can chain straight into the next eligible candidate,
    /// which is returned. No-op when nothing is showing.
    pub fn dismiss(&mut self, state: &HomeState) -> Option<DialogId> {
        let Phase::Showing(id) = self.phase else {
            return None;
        };
        self.shown_this_session.insert(id);
        if let Err(err) = self.records.mark_shown(id) {
            warn!(dialog = id.key(), %err, "failed to persist shown record");
        }
        debug!(dialog = id.key(), "onboarding dialog dismissed");
        self.phase = Phase::Idle;
        self.scan(state)
    }

    fn scan(&mut self, state: &HomeState) -> Option<DialogId> {
        // Every candidate anchors to a normal-mode element.
        if state.mode == Mode::Private {
            return None;
        }
        for id in DialogId::ALL {
            if self.shown_this_session.contains(&id) {
                continue;
            }
            // A read failure counts as shown: skipping is recoverable on
            // the next launch, a double-show is not.
            let shown = self.records.is_shown(id).unwrap_or_else(|err| {
                warn!(dialog = id.key(), %err, "failed to read shown record");
                true
            });
            if shown || !self.eligible(id, state) {
                continue;
            }
            self.phase = Phase::Showing(id);
            debug!(dialog = id.key(), "showing onboarding dialog");
            return Some(id);
        }
        None
    }

    fn eligible(&self, id: DialogId, state: &HomeState) -> bool {
        match id {
            DialogId::SearchBar => true,
            DialogId::JumpBackIn => {
                state.recent_tabs.is_populated()
                    && self.flags.is_enabled(FeatureFlag::JumpBackInDialog)
            }
            DialogId::RecommendedStories => state.recommended.is_populated(),
            DialogId::CustomizeHome => {
                state.has_optional_content()
                    && self.flags.is_enabled(FeatureFlag::HomeOnboardingDialog)
            }
            DialogId::TopSites => state.top_sites.is_populated(),
        }
    }
}
