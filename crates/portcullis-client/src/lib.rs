//! Session-aware HTTP client for the portcullis workspace.
//!
//! [`ApiClient`] wraps `reqwest` with the two contracts the rest of the
//! system relies on: outgoing requests carry the session token as a
//! bearer credential when one is held, and an authorization failure from
//! the remote side forces a logout plus a navigation to a safe path.
//! [`UserApi`] layers the account endpoints and the composed sign-in /
//! sign-out flows on top.

pub mod client;
pub mod error;
pub mod response;
pub mod user;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::ClientError;
pub use response::ApiResponse;
pub use user::{LoginParams, LoginResponse, UserApi};

/// Re-export commonly used types
pub mod prelude {
	pub use super::client::*;
	pub use super::error::*;
	pub use super::response::*;
	pub use super::user::*;
}
