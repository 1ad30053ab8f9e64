//! User profile types.

use serde::{Deserialize, Serialize};

/// Identity fields of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
	/// Stable user id
	pub id: u64,
	/// Login name
	pub username: String,
	/// Contact email
	pub email: String,
	/// Avatar URL
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
	/// Phone number
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
}

/// Partial profile update; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
	/// New contact email
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// New avatar URL
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
	/// New phone number
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
}

impl UserProfile {
	/// Shallow-merges `patch` into this profile.
	pub fn apply(&mut self, patch: ProfilePatch) {
		if let Some(email) = patch.email {
			self.email = email;
		}
		if let Some(avatar) = patch.avatar {
			self.avatar = Some(avatar);
		}
		if let Some(phone) = patch.phone {
			self.phone = Some(phone);
		}
	}
}
