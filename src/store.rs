//! Durable storage for the photo roll.
//!
//! The store is a single JSON document on local disk holding an ordered list
//! of [`ImageRecord`]s — newest first. Every mutation performs a full
//! read-modify-write: contents are loaded, changed in memory, and the whole
//! file is replaced. There is no incremental append and no write-ahead log;
//! at the expected scale (one user's photo roll) the entire document is small
//! enough that this is the simplest correct design.
//!
//! ## Crash safety
//!
//! Every rewrite goes through a temp-file-then-rename replace in the same
//! directory, so a crash mid-write leaves either the old file or the new one
//! — never a truncated store.
//!
//! ## Versioning
//!
//! The document is a versioned envelope (`{"version": 1, "records": [...]}`).
//! A version mismatch is a [`StoreError::UnsupportedVersion`], not silent
//! data loss: there is no migration path, and the caller must be able to
//! tell "no file yet" apart from "file exists but can't be trusted".
//!
//! ## Concurrency
//!
//! Single-writer by contract: the store is exclusively owned by the
//! [`Gallery`](crate::gallery::Gallery) driving it, and mutations are
//! serialized user-interaction events. Callers introducing threads must add
//! their own synchronization around the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Version of the store file format. Bump this when the envelope or record
/// shape changes; old files then fail loudly instead of half-parsing.
const STORE_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Corrupt store file: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Unsupported store version {0} (expected {STORE_VERSION})")]
    UnsupportedVersion(u32),
    #[error("Position {position} out of bounds (roll has {len} records)")]
    OutOfBounds { position: usize, len: usize },
    #[error("No record with id {0}")]
    NotFound(Uuid),
}

/// One persisted photo: re-encoded image bytes plus creation metadata.
///
/// The `id` is the stable identity for deletion — position in the roll is
/// a display concern, not a key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: Uuid,
    pub image_data: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl ImageRecord {
    /// Build a record for freshly normalized image bytes, stamped now.
    pub fn new(image_data: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_data,
            created_at: Utc::now(),
        }
    }
}

/// On-disk envelope wrapping the record list.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    records: Vec<ImageRecord>,
}

/// Durable CRUD over the newest-first record list, backed by one file.
///
/// The store is the sole writer of its file. It holds no in-memory state;
/// every operation reads the file fresh, so the file is always the source
/// of truth.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records, newest first.
    ///
    /// A missing file is an empty roll. An existing but unreadable or
    /// unparseable file is an error — the two cases must stay
    /// distinguishable so corruption is never mistaken for a fresh install.
    pub fn load_all(&self) -> Result<Vec<ImageRecord>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        let file: StoreFile = serde_json::from_slice(&bytes)?;
        if file.version != STORE_VERSION {
            return Err(StoreError::UnsupportedVersion(file.version));
        }
        Ok(file.records)
    }

    /// Persist a new record at position 0 (newest-first invariant).
    pub fn append(&self, record: ImageRecord) -> Result<(), StoreError> {
        let mut records = self.load_all()?;
        records.insert(0, record);
        self.save(&records)
    }

    /// Remove and return the record at `position`.
    ///
    /// Out-of-bounds positions fail without touching the file.
    pub fn delete_at(&self, position: usize) -> Result<ImageRecord, StoreError> {
        let mut records = self.load_all()?;
        if position >= records.len() {
            return Err(StoreError::OutOfBounds {
                position,
                len: records.len(),
            });
        }
        let removed = records.remove(position);
        self.save(&records)?;
        Ok(removed)
    }

    /// Remove and return the record with the given id.
    pub fn delete_by_id(&self, id: Uuid) -> Result<ImageRecord, StoreError> {
        let mut records = self.load_all()?;
        let position = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = records.remove(position);
        self.save(&records)?;
        Ok(removed)
    }

    /// Atomically replace the backing file with the given records.
    fn save(&self, records: &[ImageRecord]) -> Result<(), StoreError> {
        let file = StoreFile {
            version: STORE_VERSION,
            records: records.to_vec(),
        };
        let json = serde_json::to_vec(&file)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Write-to-temp then rename: readers see the old file or the new
        // one, never a partial write.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
