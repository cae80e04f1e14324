#![forbid(unsafe_code)]

//! Onboarding overlay sequencing for Hearth.
//!
//! Two halves: [`record`] persists which one-time dialogs the user has
//! already seen, and [`sequencer`] decides which dialog (if any) may show
//! over the current home-screen state, one at a time, in a fixed priority
//! order.

pub mod record;
pub mod sequencer;

pub use record::{MemoryRecordStore, RecordError, RecordResult, RecordStore};
#[cfg(feature = "record-persistence")]
pub use record::FileRecordStore;
pub use sequencer::{DialogId, OnboardingSequencer, Phase};
