//! In-memory photo roll kept in lockstep with the record store.
//!
//! The [`Gallery`] is the single owner of the live record list: the UI layer
//! renders from [`Gallery::records`] and never touches the
//! [`RecordStore`](crate::store::RecordStore) directly. Every mutation
//! persists first and updates memory second, so a failed write never leaves
//! the two out of sync.
//!
//! ## Event seam
//!
//! Item views notify their owning screen of mutations through an explicit
//! callback ([`Gallery::set_event_handler`]) rather than inheritance: the
//! owner registers a closure and receives a [`GalleryEvent`] after each
//! successful add or remove. Rendering layers that poll `records()` instead
//! can ignore the seam entirely.
//!
//! ## Error policy
//!
//! All operations return `Result` and leave surfacing to the caller. The
//! intended policy at the interaction layer is log-and-continue: a failed
//! action did nothing, the roll is still consistent, and nothing retries.

use crate::imaging::{BackendError, ImageBackend, Quality, normalize};
use crate::store::{ImageRecord, RecordStore, StoreError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Selected image is missing or empty")]
    EmptyImage,
}

/// Notification emitted after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    PhotoAdded {
        id: Uuid,
        width: u32,
        height: u32,
    },
    PhotoRemoved {
        id: Uuid,
    },
}

/// The photo-collection controller: normalizes incoming images, owns the
/// newest-first in-memory list, and keeps it in lockstep with the store.
pub struct Gallery<B: ImageBackend> {
    store: RecordStore,
    backend: B,
    quality: Quality,
    records: Vec<ImageRecord>,
    on_event: Option<Box<dyn FnMut(GalleryEvent)>>,
}

impl<B: ImageBackend> Gallery<B> {
    /// Open the gallery, loading the full roll once at startup.
    ///
    /// A missing store file yields an empty gallery; a corrupt one is an
    /// error so the caller can tell the difference.
    pub fn open(store: RecordStore, backend: B, quality: Quality) -> Result<Self, GalleryError> {
        let records = store.load_all()?;
        Ok(Self {
            store,
            backend,
            quality,
            records,
            on_event: None,
        })
    }

    /// Register the mutation observer. Replaces any previous handler.
    pub fn set_event_handler(&mut self, handler: impl FnMut(GalleryEvent) + 'static) {
        self.on_event = Some(Box::new(handler));
    }

    /// The roll, newest first, for rendering.
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its stable id.
    pub fn get(&self, id: Uuid) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Complete an image selection: normalize the raw bytes into `bounds`,
    /// persist a new record, and prepend it to the roll.
    ///
    /// Persistence happens before the in-memory insert; on any failure the
    /// roll is untouched. Returns the stored record.
    pub fn add_photo(
        &mut self,
        raw: &[u8],
        bounds: (u32, u32),
    ) -> Result<&ImageRecord, GalleryError> {
        if raw.is_empty() {
            return Err(GalleryError::EmptyImage);
        }

        let normalized = normalize(&self.backend, raw, bounds, self.quality)?;
        let record = ImageRecord::new(normalized.data);

        self.store.append(record.clone())?;
        self.records.insert(0, record);

        self.emit(GalleryEvent::PhotoAdded {
            id: self.records[0].id,
            width: normalized.width,
            height: normalized.height,
        });
        Ok(&self.records[0])
    }

    /// Confirmed deletion by stable id.
    pub fn remove(&mut self, id: Uuid) -> Result<ImageRecord, GalleryError> {
        let removed = self.store.delete_by_id(id)?;
        self.records.retain(|r| r.id != id);
        self.emit(GalleryEvent::PhotoRemoved { id });
        Ok(removed)
    }

    /// Confirmed deletion by display position (0 = newest).
    pub fn remove_at(&mut self, position: usize) -> Result<ImageRecord, GalleryError> {
        let removed = self.store.delete_at(position)?;
        // In lockstep with the store, so the position is valid here too.
        self.records.remove(position);
        self.emit(GalleryEvent::PhotoRemoved { id: removed.id });
        Ok(removed)
    }

    fn emit(&mut self, event: GalleryEvent) {
        if let Some(handler) = self.on_event.as_mut() {
            handler(event);
        }
    }
}
