//! Save/load semantics on top of a [`Storage`] backend.

use crate::error::{GameSaverError, Result};
use crate::record::{LoadOutcome, SaveRecord};
use crate::sanitizer::SafeId;
use crate::storage::Storage;

/// File extension of persisted envelopes.
pub const SAVE_EXTENSION: &str = "json";

/// A key-value store of [`SaveRecord`]s addressed by [`SafeId`].
///
/// The store holds no locks and no cache: every call is a single read or
/// write against the backend. Saving under an existing identifier replaces
/// the previous record entirely.
///
/// # Example
///
/// ```rust,no_run
/// use game_saver::{FsStorage, LoadOutcome, SafeId, SaveStore};
///
/// # async fn example() -> game_saver::Result<()> {
/// let store = SaveStore::new(FsStorage::new("saves"));
/// let id = SafeId::parse("run").unwrap();
///
/// store.save(&id, "progress").await?;
/// if let LoadOutcome::Found(record) = store.load(&id).await? {
///     assert_eq!(record.data, "progress");
/// }
/// # Ok(())
/// # }
/// ```
pub struct SaveStore<S: Storage> {
    storage: S,
}

impl<S: Storage> SaveStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Storage key for an identifier: `<id>.json`.
    pub fn key_for(id: &SafeId) -> String {
        format!("{id}.{SAVE_EXTENSION}")
    }

    /// Persist `data` under `id`, replacing any earlier save.
    pub async fn save(&self, id: &SafeId, data: &str) -> Result<SaveRecord> {
        let record = SaveRecord::new(id, data);
        let content = record.to_pretty_json().map_err(GameSaverError::storage)?;

        self.storage
            .put(&Self::key_for(id), content.as_bytes())
            .await?;

        tracing::info!(id = %id, "Game saved");
        Ok(record)
    }

    /// Look up the save stored under `id`.
    ///
    /// Returns `Err` only when the backend itself fails; a missing or
    /// unparseable save is reported through [`LoadOutcome`].
    pub async fn load(&self, id: &SafeId) -> Result<LoadOutcome> {
        let Some(bytes) = self.storage.get(&Self::key_for(id)).await? else {
            tracing::info!(id = %id, "No save file found");
            return Ok(LoadOutcome::Missing);
        };

        match SaveRecord::from_slice(&bytes) {
            Ok(record) => {
                tracing::info!(id = %id, "Game loaded");
                Ok(LoadOutcome::Found(record))
            }
            Err(e) => Ok(LoadOutcome::Corrupt(e)),
        }
    }

    /// Like [`load`](Self::load), but folds a corrupt save into
    /// [`GameSaverError::Corrupt`] and a missing save into `None`.
    pub async fn load_record(&self, id: &SafeId) -> Result<Option<SaveRecord>> {
        match self.load(id).await? {
            LoadOutcome::Missing => Ok(None),
            LoadOutcome::Found(record) => Ok(Some(record)),
            LoadOutcome::Corrupt(source) => Err(GameSaverError::Corrupt {
                id: id.to_string(),
                source,
            }),
        }
    }
}
