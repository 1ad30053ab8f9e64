//! The business response envelope.

use serde::Deserialize;

use crate::error::ClientError;

/// The `{code, data, message}` envelope every API response arrives in.
///
/// A code of `0` or `200` means success; anything else is a business
/// failure carried in `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
	/// Business status code
	pub code: i32,
	/// Payload, present on success
	#[serde(default = "Option::default")]
	pub data: Option<T>,
	/// Human-readable status message
	#[serde(default)]
	pub message: String,
}

impl<T> ApiResponse<T> {
	/// Returns whether the envelope reports success.
	pub fn is_success(&self) -> bool {
		self.code == 0 || self.code == 200
	}

	/// Unwraps the envelope into its payload.
	pub fn into_result(self) -> Result<Option<T>, ClientError> {
		if self.is_success() {
			Ok(self.data)
		} else {
			Err(ClientError::Business {
				code: self.code,
				message: self.message,
			})
		}
	}
}
