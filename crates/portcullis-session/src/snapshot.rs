//! The durable session snapshot.

use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

/// Storage key the session snapshot is persisted under.
pub const SESSION_STORAGE_KEY: &str = "user-storage";

/// The serialized session record.
///
/// Field names are fixed by the storage format: `{token, userInfo,
/// isLogin}`. Writing a snapshot and reading it back yields an equal
/// record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
	/// Opaque authentication token, absent when signed out
	pub token: Option<String>,
	/// Profile of the signed-in user
	pub user_info: Option<UserProfile>,
	/// Whether a session was active when the snapshot was taken
	pub is_login: bool,
}
