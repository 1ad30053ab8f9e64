//! The HTTP client wrapper.

use std::sync::Arc;
use std::time::Duration;

use portcullis_router::{NavigateOptions, Navigator};
use portcullis_session::SessionStore;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use crate::error::ClientError;
use crate::response::ApiResponse;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
	base_url: String,
	timeout: Duration,
	safe_path: String,
}

impl ApiClientBuilder {
	/// Creates a builder targeting `base_url`.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			timeout: DEFAULT_TIMEOUT,
			safe_path: "/".to_string(),
		}
	}

	/// Sets the request timeout (default 10 seconds).
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Sets the path navigated to after a forced logout (default `/`).
	pub fn safe_path(mut self, path: impl Into<String>) -> Self {
		self.safe_path = path.into();
		self
	}

	/// Builds the client with its session and navigation handles.
	///
	/// # Errors
	///
	/// Returns an error if the base URL does not parse or the underlying
	/// HTTP client cannot be constructed.
	pub fn build(
		self,
		session: Arc<SessionStore>,
		navigator: Arc<dyn Navigator>,
	) -> Result<ApiClient, ClientError> {
		let mut base_url = Url::parse(&self.base_url)?;
		// Joining relative paths drops the last path segment unless the
		// base ends with a slash.
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}

		let http = reqwest::Client::builder()
			.timeout(self.timeout)
			.build()?;

		Ok(ApiClient {
			http,
			base_url,
			session,
			navigator,
			safe_path: self.safe_path,
		})
	}
}

/// Session-aware HTTP client.
///
/// Every outgoing request carries `Authorization: Bearer <token>` when the
/// session store holds a non-empty token, and never carries one
/// otherwise. An HTTP 401 response clears the session and navigates to
/// the configured safe path; this is the only place outside the explicit
/// sign-in/sign-out flows that mutates authentication state.
pub struct ApiClient {
	http: reqwest::Client,
	base_url: Url,
	session: Arc<SessionStore>,
	navigator: Arc<dyn Navigator>,
	safe_path: String,
}

impl ApiClient {
	/// Returns the session store handle.
	pub fn session(&self) -> &Arc<SessionStore> {
		&self.session
	}

	/// Returns the navigator handle.
	pub fn navigator(&self) -> &Arc<dyn Navigator> {
		&self.navigator
	}

	/// Returns the path navigated to after a forced logout.
	pub fn safe_path(&self) -> &str {
		&self.safe_path
	}

	/// Sends a GET request and decodes the envelope payload.
	pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
		self.request(Method::GET, path, None::<&()>).await
	}

	/// Sends a POST request with a JSON body and decodes the envelope
	/// payload.
	pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
		&self,
		path: &str,
		body: &B,
	) -> Result<T, ClientError> {
		self.request(Method::POST, path, Some(body)).await
	}

	/// Sends a PUT request with a JSON body and decodes the envelope
	/// payload.
	pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
		&self,
		path: &str,
		body: &B,
	) -> Result<T, ClientError> {
		self.request(Method::PUT, path, Some(body)).await
	}

	/// Sends a DELETE request and decodes the envelope payload.
	pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
		self.request(Method::DELETE, path, None::<&()>).await
	}

	/// Sends a bodyless POST request, checking the envelope but
	/// discarding any payload.
	pub async fn post_empty(&self, path: &str) -> Result<(), ClientError> {
		self.execute::<serde_json::Value, ()>(Method::POST, path, None)
			.await?;
		Ok(())
	}

	async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
		&self,
		method: Method,
		path: &str,
		body: Option<&B>,
	) -> Result<T, ClientError> {
		self.execute(method, path, body)
			.await?
			.ok_or(ClientError::EmptyData)
	}

	async fn execute<T: DeserializeOwned, B: Serialize + ?Sized>(
		&self,
		method: Method,
		path: &str,
		body: Option<&B>,
	) -> Result<Option<T>, ClientError> {
		let url = self.endpoint(path)?;
		let mut builder = self.http.request(method, url);

		if let Some(token) = self.session.token().filter(|t| !t.is_empty()) {
			builder = builder.bearer_auth(token);
		}
		if let Some(body) = body {
			builder = builder.json(body);
		}

		let response = builder.send().await?;
		let status = response.status();

		if status == StatusCode::UNAUTHORIZED {
			self.force_logout();
			return Err(ClientError::Unauthorized);
		}
		if status == StatusCode::FORBIDDEN {
			return Err(ClientError::Forbidden);
		}
		if status == StatusCode::NOT_FOUND {
			return Err(ClientError::NotFound);
		}
		if !status.is_success() {
			return Err(ClientError::Server(status.as_u16()));
		}

		let envelope: ApiResponse<T> = response.json().await?;
		envelope.into_result()
	}

	/// Clears the session and navigates to the safe path. Idempotent, so
	/// concurrent in-flight requests failing together are harmless.
	fn force_logout(&self) {
		warn!("authorization rejected, signing out");
		self.session.logout();
		self.navigator.navigate(
			&self.safe_path,
			NavigateOptions {
				replace: true,
				from: None,
			},
		);
	}

	fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
		Ok(self.base_url.join(path.trim_start_matches('/'))?)
	}
}

impl std::fmt::Debug for ApiClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ApiClient")
			.field("base_url", &self.base_url.as_str())
			.field("safe_path", &self.safe_path)
			.finish()
	}
}
