//! Client-side session state for the portcullis workspace.
//!
//! The [`SessionStore`] is the process-wide holder of the authentication
//! token and user profile. It is authoritative in memory and eagerly
//! persists a snapshot to a [`portcullis_utils::KeyValueBackend`] on every
//! mutation, so a later process can rehydrate the session.

pub mod app;
pub mod profile;
pub mod snapshot;
pub mod store;

pub use app::{AppStore, Locale, Theme};
pub use profile::{ProfilePatch, UserProfile};
pub use snapshot::{SESSION_STORAGE_KEY, SessionSnapshot};
pub use store::SessionStore;

/// Re-export commonly used types
pub mod prelude {
	pub use super::app::*;
	pub use super::profile::*;
	pub use super::snapshot::*;
	pub use super::store::*;
}
