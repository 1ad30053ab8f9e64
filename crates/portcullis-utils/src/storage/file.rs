//! File-backed key-value storage.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::warn;

use super::backend::KeyValueBackend;
use super::error::StorageResult;

/// A [`KeyValueBackend`] persisting the whole map to a single JSON file.
///
/// The file is loaded once when the backend is opened and rewritten on
/// every mutation, so reads are served from memory. A missing or
/// unparseable file is treated as an empty store rather than an error.
#[derive(Debug)]
pub struct FileBackend {
	path: PathBuf,
	entries: RwLock<HashMap<String, String>>,
}

impl FileBackend {
	/// Opens the backend at `path`, loading any existing entries.
	///
	/// # Errors
	///
	/// Returns an error if the file exists but cannot be read. A file that
	/// reads fine but does not parse as a JSON object is logged and treated
	/// as empty.
	pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
		let path = path.into();
		let entries = match fs::read_to_string(&path) {
			Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
				Ok(map) => map,
				Err(err) => {
					warn!(path = %path.display(), error = %err, "discarding malformed storage file");
					HashMap::new()
				}
			},
			Err(err) if err.kind() == ErrorKind::NotFound => HashMap::new(),
			Err(err) => return Err(err.into()),
		};

		Ok(Self {
			path,
			entries: RwLock::new(entries),
		})
	}

	/// Returns the path of the backing file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn persist(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent)?;
			}
		}
		let raw = serde_json::to_string(entries)?;
		fs::write(&self.path, raw)?;
		Ok(())
	}
}

impl KeyValueBackend for FileBackend {
	fn read(&self, key: &str) -> StorageResult<Option<String>> {
		Ok(self.entries.read().get(key).cloned())
	}

	fn write(&self, key: &str, value: &str) -> StorageResult<()> {
		let mut entries = self.entries.write();
		entries.insert(key.to_string(), value.to_string());
		self.persist(&entries)
	}

	fn remove(&self, key: &str) -> StorageResult<()> {
		let mut entries = self.entries.write();
		entries.remove(key);
		self.persist(&entries)
	}

	fn clear(&self) -> StorageResult<()> {
		let mut entries = self.entries.write();
		entries.clear();
		self.persist(&entries)
	}
}
