//! Shared utilities for the portcullis workspace.
//!
//! This crate provides the durable client-local key-value storage seam
//! (backend trait plus in-memory and file-backed implementations), a typed
//! storage wrapper with optional expiry, and a handful of display
//! formatting helpers.

pub mod format;
pub mod storage;

pub use storage::backend::KeyValueBackend;
pub use storage::error::{StorageError, StorageResult};
pub use storage::file::FileBackend;
pub use storage::memory::MemoryBackend;
pub use storage::typed::TypedStorage;

/// Re-export commonly used types
pub mod prelude {
	pub use super::format::*;
	pub use super::storage::backend::*;
	pub use super::storage::error::*;
	pub use super::storage::file::*;
	pub use super::storage::memory::*;
	pub use super::storage::typed::*;
}
