#![forbid(unsafe_code)]

//! Persisted "already shown" records for onboarding dialogs.
//!
//! One boolean per dialog id, created false on first run, flipped true
//! exactly once when the dialog is dismissed, and never deleted by the
//! app (only an external data clear resets it). The store is shared
//! external state with plain read/write semantics; last write wins, which
//! is safe because the sequencer shows at most one dialog at a time.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `RecordError::Io` | File I/O failure | Returned; cache unaffected |
//! | `RecordError::Serialization` | JSON encode failure | Returned |
//! | Missing file | First run | Empty record set |
//! | Corrupt file | Partial write, tampering | Empty record set, warned |
//!
//! The file backend persists with a write-rename so a crash mid-write
//! leaves the previous file intact.

use std::collections::BTreeSet;
use std::fmt;

use crate::sequencer::DialogId;

/// Errors surfaced by record stores.
#[derive(Debug)]
pub enum RecordError {
    /// I/O failure reading or writing the backing file.
    Io(std::io::Error),
    /// JSON encode/decode failure.
    Serialization(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Io(err) => write!(f, "I/O error: {err}"),
            RecordError::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Io(err) => Some(err),
            RecordError::Serialization(_) => None,
        }
    }
}

impl From<std::io::Error> for RecordError {
    fn from(err: std::io::Error) -> Self {
        RecordError::Io(err)
    }
}

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Read/write access to per-dialog shown records.
pub trait RecordStore {
    /// Whether this dialog was already shown to the user.
    fn is_shown(&self, id: DialogId) -> RecordResult<bool>;

    /// Mark this dialog as shown. Idempotent.
    fn mark_shown(&mut self, id: DialogId) -> RecordResult<()>;
}

/// In-memory record store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    shown: BTreeSet<DialogId>,
}

impl MemoryRecordStore {
    /// An empty record set (first run).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn is_shown(&self, id: DialogId) -> RecordResult<bool> {
        Ok(self.shown.contains(&id))
    }

    fn mark_shown(&mut self, id: DialogId) -> RecordResult<()> {
        self.shown.insert(id);
        Ok(())
    }
}

#[cfg(feature = "record-persistence")]
pub use self::file::FileRecordStore;

#[cfg(feature = "record-persistence")]
mod file {
    use super::{RecordError, RecordResult, RecordStore};
    use crate::sequencer::DialogId;
    use std::collections::BTreeMap;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};
    use tracing::warn;

    /// JSON-file record store.
    ///
    /// The document is a flat map of dialog key to boolean. Loading is
    /// lenient: a missing file is a first run and a corrupt file degrades
    /// to an empty record set with a warning, never an error.
    #[derive(Debug)]
    pub struct FileRecordStore {
        path: PathBuf,
        shown: BTreeMap<String, bool>,
    }

    impl FileRecordStore {
        /// Load records from `path`, tolerating absence and corruption.
        pub fn load(path: impl Into<PathBuf>) -> RecordResult<Self> {
            let path = path.into();
            let shown = match fs::read_to_string(&path) {
                Ok(raw) => match serde_json::from_str(&raw) {
                    Ok(map) => map,
                    Err(err) => {
                        warn!(path = %path.display(), %err, "corrupt record file, starting over");
                        BTreeMap::new()
                    }
                },
                Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
                Err(err) => return Err(err.into()),
            };
            Ok(Self { path, shown })
        }

        /// The backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn persist(&self) -> RecordResult<()> {
            let raw = serde_json::to_string_pretty(&self.shown)
                .map_err(|err| RecordError::Serialization(err.to_string()))?;
            let tmp = self.path.with_extension("tmp");
            fs::write(&tmp, raw)?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        }
    }

    impl RecordStore for FileRecordStore {
        fn is_shown(&self, id: DialogId) -> RecordResult<bool> {
            Ok(self.shown.get(id.key()).copied().unwrap_or(false))
        }

        fn mark_shown(&mut self, id: DialogId) -> RecordResult<()> {
            if self.shown.insert(id.key().to_owned(), true) == Some(true) {
                return Ok(());
            }
            self.persist()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryRecordStore::new();
        assert!(!store.is_shown(DialogId::SearchBar).unwrap());

        store.mark_shown(DialogId::SearchBar).unwrap();
        assert!(store.is_shown(DialogId::SearchBar).unwrap());
        assert!(!store.is_shown(DialogId::TopSites).unwrap());
    }

    #[test]
    fn mark_shown_is_idempotent() {
        let mut store = MemoryRecordStore::new();
        store.mark_shown(DialogId::JumpBackIn).unwrap();
        store.mark_shown(DialogId::JumpBackIn).unwrap();
        assert!(store.is_shown(DialogId::JumpBackIn).unwrap());
    }

    #[cfg(feature = "record-persistence")]
    mod file {
        use super::super::{FileRecordStore, RecordStore};
        use crate::sequencer::DialogId;

        #[test]
        fn missing_file_is_first_run() {
            let dir = tempfile::tempdir().unwrap();
            let store = FileRecordStore::load(dir.path().join("records.json")).unwrap();
            for id in DialogId::ALL {
                assert!(!store.is_shown(id).unwrap());
            }
        }

        #[test]
        fn records_survive_reload() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("records.json");

            let mut store = FileRecordStore::load(&path).unwrap();
            store.mark_shown(DialogId::SearchBar).unwrap();
            store.mark_shown(DialogId::CustomizeHome).unwrap();
            drop(store);

            let store = FileRecordStore::load(&path).unwrap();
            assert!(store.is_shown(DialogId::SearchBar).unwrap());
            assert!(store.is_shown(DialogId::CustomizeHome).unwrap());
            assert!(!store.is_shown(DialogId::TopSites).unwrap());
        }

        #[test]
        fn corrupt_file_degrades_to_empty() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("records.json");
            std::fs::write(&path, "{not json").unwrap();

            let store = FileRecordStore::load(&path).unwrap();
            assert!(!store.is_shown(DialogId::SearchBar).unwrap());
        }

        #[test]
        fn no_stray_temp_file_after_write() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("records.json");

            let mut store = FileRecordStore::load(&path).unwrap();
            store.mark_shown(DialogId::SearchBar).unwrap();

            assert!(path.exists());
            assert!(!path.with_extension("tmp").exists());
        }
    }
}
