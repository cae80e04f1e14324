#![forbid(unsafe_code)]

//! The dispatch store owning the live snapshot.
//!
//! All reductions happen on one logical sequencing point: loaders and
//! interaction handlers deliver [`HomeAction`]s to [`HomeStore::dispatch`],
//! which applies them strictly in call order. There is no reordering and
//! no batching, so a later action always observes the effects of earlier
//! ones. Observers receive an immutable reference to the new snapshot
//! after each effective dispatch.

use tracing::{debug, trace};

use crate::action::HomeAction;
use crate::reducer::reduce;
use crate::state::HomeState;

type Observer = Box<dyn FnMut(&HomeState)>;

/// Exclusive owner of the live [`HomeState`].
pub struct HomeStore {
    state: HomeState,
    observers: Vec<Observer>,
}

impl HomeStore {
    /// Create a store over an initial snapshot.
    #[must_use]
    pub fn new(initial: HomeState) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &HomeState {
        &self.state
    }

    /// Register an observer called after every effective dispatch.
    ///
    /// Observers are invoked in registration order. A dispatch that
    /// leaves the state unchanged does not notify.
    pub fn observe(&mut self, observer: impl FnMut(&HomeState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply one action and notify observers if the state changed.
    pub fn dispatch(&mut self, action: HomeAction) {
        let next = reduce(&self.state, &action);
        if next == self.state {
            trace!(action = action.name(), "dispatch was a no-op");
            return;
        }
        debug!(action = action.name(), "dispatch");
        self.state = next;
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}

impl Default for HomeStore {
    fn default() -> Self {
        Self::new(HomeState::default())
    }
}
