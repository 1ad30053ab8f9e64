//! In-memory backend, mainly for tests and ephemeral sessions.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::backend::KeyValueBackend;
use super::error::StorageResult;

/// A [`KeyValueBackend`] holding everything in process memory.
///
/// Nothing survives process exit; a session store backed by this behaves
/// like a browser with storage disabled.
#[derive(Debug, Default)]
pub struct MemoryBackend {
	entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
	/// Creates an empty in-memory backend.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of stored entries.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Returns whether the backend holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}
}

impl KeyValueBackend for MemoryBackend {
	fn read(&self, key: &str) -> StorageResult<Option<String>> {
		Ok(self.entries.read().get(key).cloned())
	}

	fn write(&self, key: &str, value: &str) -> StorageResult<()> {
		self.entries
			.write()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> StorageResult<()> {
		self.entries.write().remove(key);
		Ok(())
	}

	fn clear(&self) -> StorageResult<()> {
		self.entries.write().clear();
		Ok(())
	}
}
