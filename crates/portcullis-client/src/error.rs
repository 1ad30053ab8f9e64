//! Client error types.

use thiserror::Error;

/// Errors raised by the HTTP client wrapper.
#[derive(Debug, Error)]
pub enum ClientError {
	/// Transport-level failure from the underlying HTTP client
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),

	/// The configured base URL does not parse
	#[error("Invalid base URL: {0}")]
	InvalidBaseUrl(#[from] url::ParseError),

	/// The remote side rejected the credential (HTTP 401); the session
	/// has been cleared
	#[error("Unauthorized, please sign in again")]
	Unauthorized,

	/// The signed-in user may not access the resource (HTTP 403)
	#[error("Access denied")]
	Forbidden,

	/// The resource does not exist (HTTP 404)
	#[error("Resource not found")]
	NotFound,

	/// Any other non-success HTTP status
	#[error("Server error (status {0})")]
	Server(u16),

	/// The business envelope reported a failure code
	#[error("Request failed ({code}): {message}")]
	Business {
		/// The envelope's failure code
		code: i32,
		/// The envelope's message
		message: String,
	},

	/// The envelope reported success but carried no payload
	#[error("Response carried no data")]
	EmptyData,
}

impl ClientError {
	/// Returns true if the error is a timeout error.
	pub fn is_timeout(&self) -> bool {
		match self {
			ClientError::Http(e) => e.is_timeout(),
			_ => false,
		}
	}

	/// Returns true if the error is a connection error.
	pub fn is_connect(&self) -> bool {
		match self {
			ClientError::Http(e) => e.is_connect(),
			_ => false,
		}
	}
}
