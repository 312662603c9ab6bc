//! Notes system — one regular file per note under a configured root directory.
//!
//! The directory is the entire source of truth: no index, no cache, no
//! sidecar metadata. All mutations and reads go through [`NoteStore`].

pub mod file_ops;
pub mod store;

pub use store::{Note, NoteError, NoteStore};
