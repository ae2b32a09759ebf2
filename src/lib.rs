//! # camroll
//!
//! The storage and image-normalization core of a photo-collection screen:
//! a user picks or captures an image, it is resized to fit the display,
//! re-encoded, and persisted to a local roll that renders newest-first and
//! supports deletion.
//!
//! # Architecture
//!
//! Three cooperating pieces, wired together by a thin CLI front end that
//! stands in for the platform UI layer:
//!
//! ```text
//! raw image bytes ──▶ imaging (fit + re-encode) ──▶ gallery ──▶ store (JSON on disk)
//!                                                      │
//!                                                      └──▶ records(), events
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Durable newest-first record list, one JSON file, atomic rewrites |
//! | [`imaging`] | Fit-scaling resize + JPEG re-encode behind an [`imaging::ImageBackend`] trait |
//! | [`gallery`] | Owns the in-memory roll, keeps it in lockstep with the store, emits mutation events |
//! | [`config`] | `camroll.toml` loading with full defaults |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## One JSON Document, Rewritten Whole
//!
//! The roll is a single serde_json document with a version envelope. Every
//! mutation is a full read-modify-write through a temp-file-then-rename
//! replace, so a crash mid-write can never truncate the store. At the scale
//! of one user's photo roll this is simpler and more inspectable than a
//! database, and the file is human-greppable when something goes wrong.
//!
//! ## Stable Ids Over Positions
//!
//! Each record carries a UUID generated at creation. Display position (0 =
//! newest) is still accepted for deletion because that is what a grid hands
//! back, but the id is the real key — positions shift under mutation, ids
//! don't.
//!
//! ## Fit Scaling, Maximum Quality
//!
//! Normalization computes the largest rectangle with the source aspect ratio
//! that fits inside the target bounds (never crops), resamples with Lanczos3,
//! and re-encodes as JPEG at quality 100 by default. The resize is the only
//! loss introduced.
//!
//! ## Synchronous By Design
//!
//! All operations block the calling thread. Triggers are discrete serialized
//! user events, files are small, and a single-writer store needs no locking
//! under that assumption. Callers adding threads own the synchronization.

pub mod config;
pub mod gallery;
pub mod imaging;
pub mod output;
pub mod store;
