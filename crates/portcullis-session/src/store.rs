//! The session store.

use std::sync::Arc;

use parking_lot::RwLock;
use portcullis_utils::KeyValueBackend;
use tracing::warn;

use crate::profile::{ProfilePatch, UserProfile};
use crate::snapshot::{SESSION_STORAGE_KEY, SessionSnapshot};

#[derive(Debug, Clone, Default)]
struct SessionState {
	token: Option<String>,
	user_info: Option<UserProfile>,
}

impl SessionState {
	fn is_authenticated(&self) -> bool {
		self.token.as_deref().is_some_and(|t| !t.is_empty())
	}
}

/// Process-wide holder of the authentication token and user profile.
///
/// The in-memory state is authoritative for the lifetime of the process;
/// every mutation eagerly persists a [`SessionSnapshot`] to the backend,
/// and persistence failures are logged and swallowed. Reads never touch
/// the backend. `login` and `logout` are idempotent, so racing
/// forced-logout calls from concurrent request failures are harmless.
pub struct SessionStore {
	state: RwLock<SessionState>,
	backend: Arc<dyn KeyValueBackend>,
}

impl SessionStore {
	/// Opens a store over `backend`, rehydrating any persisted snapshot.
	///
	/// A missing or malformed snapshot yields a fresh unauthenticated
	/// session. The authentication flag is re-derived from the token rather
	/// than trusted from the snapshot.
	pub fn open(backend: Arc<dyn KeyValueBackend>) -> Self {
		let state = match backend.read(SESSION_STORAGE_KEY) {
			Ok(Some(raw)) => match serde_json::from_str::<SessionSnapshot>(&raw) {
				Ok(snapshot) => SessionState {
					token: snapshot.token,
					user_info: snapshot.user_info,
				},
				Err(err) => {
					warn!(error = %err, "discarding malformed session snapshot");
					SessionState::default()
				}
			},
			Ok(None) => SessionState::default(),
			Err(err) => {
				warn!(error = %err, "session snapshot unreadable, starting signed out");
				SessionState::default()
			}
		};

		Self {
			state: RwLock::new(state),
			backend,
		}
	}

	/// Returns the current token, if any.
	pub fn token(&self) -> Option<String> {
		self.state.read().token.clone()
	}

	/// Returns the current user profile, if any.
	pub fn user_info(&self) -> Option<UserProfile> {
		self.state.read().user_info.clone()
	}

	/// Returns whether a non-empty token is held.
	pub fn is_authenticated(&self) -> bool {
		self.state.read().is_authenticated()
	}

	/// Returns the snapshot that the current state persists as.
	pub fn snapshot(&self) -> SessionSnapshot {
		let state = self.state.read();
		SessionSnapshot {
			token: state.token.clone(),
			user_info: state.user_info.clone(),
			is_login: state.is_authenticated(),
		}
	}

	/// Establishes a session: sets the token and profile together.
	pub fn login(&self, token: impl Into<String>, user_info: UserProfile) {
		let mut state = self.state.write();
		state.token = Some(token.into());
		state.user_info = Some(user_info);
		self.persist(&state);
	}

	/// Ends the session. Safe to call when already signed out.
	pub fn logout(&self) {
		let mut state = self.state.write();
		state.token = None;
		state.user_info = None;
		self.persist(&state);
	}

	/// Replaces the token, leaving the profile untouched.
	pub fn set_token(&self, token: impl Into<String>) {
		let mut state = self.state.write();
		state.token = Some(token.into());
		self.persist(&state);
	}

	/// Replaces the profile, leaving the token untouched.
	pub fn set_user_info(&self, user_info: UserProfile) {
		let mut state = self.state.write();
		state.user_info = Some(user_info);
		self.persist(&state);
	}

	/// Shallow-merges `patch` into the current profile. No-op when no
	/// session is active.
	pub fn update_user_info(&self, patch: ProfilePatch) {
		let mut state = self.state.write();
		if !state.is_authenticated() {
			return;
		}
		let Some(profile) = state.user_info.as_mut() else {
			return;
		};
		profile.apply(patch);
		self.persist(&state);
	}

	fn persist(&self, state: &SessionState) {
		let snapshot = SessionSnapshot {
			token: state.token.clone(),
			user_info: state.user_info.clone(),
			is_login: state.is_authenticated(),
		};
		let raw = match serde_json::to_string(&snapshot) {
			Ok(raw) => raw,
			Err(err) => {
				warn!(error = %err, "failed to encode session snapshot");
				return;
			}
		};
		if let Err(err) = self.backend.write(SESSION_STORAGE_KEY, &raw) {
			warn!(error = %err, "failed to persist session snapshot");
		}
	}
}

impl std::fmt::Debug for SessionStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.read();
		f.debug_struct("SessionStore")
			.field("is_authenticated", &state.is_authenticated())
			.field("has_profile", &state.user_info.is_some())
			.finish()
	}
}
