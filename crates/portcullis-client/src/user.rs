//! User account endpoints and the composed sign-in/sign-out flows.

use portcullis_router::NavigateOptions;
use portcullis_session::{ProfilePatch, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::ClientError;

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginParams {
	/// Login name
	pub username: String,
	/// Plain password; the transport is responsible for confidentiality
	pub password: String,
}

/// Payload returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
	/// Opaque session token
	pub token: String,
	/// Profile of the signed-in user
	pub user_info: UserProfile,
}

/// The user account API.
pub struct UserApi<'a> {
	client: &'a ApiClient,
}

impl<'a> UserApi<'a> {
	/// Creates the API surface over `client`.
	pub fn new(client: &'a ApiClient) -> Self {
		Self { client }
	}

	/// Exchanges credentials for a token and profile.
	pub async fn login(&self, params: &LoginParams) -> Result<LoginResponse, ClientError> {
		self.client.post("/user/login", params).await
	}

	/// Fetches the signed-in user's profile.
	pub async fn user_info(&self) -> Result<UserProfile, ClientError> {
		self.client.get("/user/info").await
	}

	/// Updates the signed-in user's profile and returns the new profile.
	pub async fn update_user_info(
		&self,
		patch: &ProfilePatch,
	) -> Result<UserProfile, ClientError> {
		self.client.put("/user/info", patch).await
	}

	/// Tells the server to invalidate the session.
	pub async fn logout(&self) -> Result<(), ClientError> {
		self.client.post_empty("/user/logout").await
	}

	/// The full sign-in flow: remote login, session commit, then
	/// navigation to the preserved destination (or the safe path when
	/// none was captured).
	///
	/// Concurrent sign-in attempts are not ordered: the last response to
	/// arrive wins, regardless of which request was issued last.
	pub async fn sign_in(
		&self,
		params: &LoginParams,
		preserved_from: Option<&str>,
	) -> Result<UserProfile, ClientError> {
		let response = self.login(params).await?;
		self.client
			.session()
			.login(response.token, response.user_info.clone());

		let target = preserved_from.unwrap_or(self.client.safe_path());
		debug!(target, "signed in");
		self.client.navigator().navigate(
			target,
			NavigateOptions {
				replace: true,
				from: None,
			},
		);

		Ok(response.user_info)
	}

	/// The local sign-out flow: clears the session and navigates to the
	/// safe path. The server is not called.
	pub fn sign_out(&self) {
		self.client.session().logout();
		self.client.navigator().navigate(
			self.client.safe_path(),
			NavigateOptions {
				replace: true,
				from: None,
			},
		);
	}
}
