//! Storage error types.

use thiserror::Error;

/// Errors raised by key-value storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
	/// I/O error while reading or writing the backing store
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// Serialization error while encoding or decoding a stored value
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// Backend-specific failure
	#[error("Storage backend error: {0}")]
	Backend(String),
}

/// Convenience alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
