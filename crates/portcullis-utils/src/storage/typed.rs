//! Typed storage with optional expiry.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::backend::KeyValueBackend;
use super::error::StorageResult;

/// Envelope wrapping every stored value.
///
/// `expire` is an absolute Unix timestamp in milliseconds; entries without
/// it never expire.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Envelope<T> {
	value: T,
	#[serde(skip_serializing_if = "Option::is_none")]
	expire: Option<u64>,
}

/// Typed get/set over a [`KeyValueBackend`].
///
/// Values are JSON-encoded with an envelope carrying the optional expiry.
/// Expired entries are removed on read and report absent; entries that fail
/// to decode also report absent.
#[derive(Clone)]
pub struct TypedStorage {
	backend: Arc<dyn KeyValueBackend>,
}

impl TypedStorage {
	/// Creates a typed view over `backend`.
	pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
		Self { backend }
	}

	/// Stores `value` under `key` with no expiry.
	pub fn set<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
		self.store(key, value, None)
	}

	/// Stores `value` under `key`, expiring after `ttl`.
	pub fn set_with_ttl<T: Serialize>(
		&self,
		key: &str,
		value: &T,
		ttl: Duration,
	) -> StorageResult<()> {
		let expire = now_millis().saturating_add(ttl.as_millis() as u64);
		self.store(key, value, Some(expire))
	}

	/// Returns the value stored under `key`, if present, valid, and decodable.
	pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
		let raw = match self.backend.read(key) {
			Ok(Some(raw)) => raw,
			Ok(None) => return None,
			Err(err) => {
				warn!(key, error = %err, "storage read failed");
				return None;
			}
		};

		let envelope: Envelope<T> = match serde_json::from_str(&raw) {
			Ok(envelope) => envelope,
			Err(err) => {
				warn!(key, error = %err, "discarding undecodable storage entry");
				return None;
			}
		};

		if let Some(expire) = envelope.expire {
			if expire < now_millis() {
				let _ = self.backend.remove(key);
				return None;
			}
		}

		Some(envelope.value)
	}

	/// Removes the entry stored under `key`.
	pub fn remove(&self, key: &str) -> StorageResult<()> {
		self.backend.remove(key)
	}

	/// Removes every stored entry.
	pub fn clear(&self) -> StorageResult<()> {
		self.backend.clear()
	}

	/// Returns whether a live (non-expired, decodable) entry exists under `key`.
	pub fn has(&self, key: &str) -> bool {
		self.get::<serde_json::Value>(key).is_some()
	}

	fn store<T: Serialize>(&self, key: &str, value: &T, expire: Option<u64>) -> StorageResult<()> {
		let raw = serde_json::to_string(&Envelope { value, expire })?;
		self.backend.write(key, &raw)
	}
}

fn now_millis() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|d| d.as_millis() as u64)
		.unwrap_or(0)
}
