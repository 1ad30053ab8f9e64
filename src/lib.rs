//! # Portcullis
//!
//! A client-side navigation core: a declarative route table with
//! authorization metadata, a matcher for static, parameterized, and
//! wildcard paths, a navigation guard gating every path change on the
//! persisted session, and a session-aware HTTP client.
//!
//! The pieces are explicitly wired: stores and capabilities are
//! constructed once at startup and handed around as `Arc` handles; there
//! are no module-level globals.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use portcullis::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let routes = vec![
//! 	RouteDescriptor::new("/").title("Home"),
//! 	RouteDescriptor::new("/login").title("Sign in"),
//! 	RouteDescriptor::new("/user").title("User Center").requires_auth(true),
//! 	RouteDescriptor::new("*").title("Not Found"),
//! ];
//!
//! let backend = Arc::new(FileBackend::open("session.json")?);
//! let session = Arc::new(SessionStore::open(backend));
//! let navigator: Arc<dyn Navigator> = Arc::new(RecordingNavigator::new());
//!
//! let guard = NavigationGuard::new(routes, session.clone(), navigator.clone());
//! match guard.evaluate("/user") {
//! 	GuardOutcome::Allow { title } => { /* render, apply title */ }
//! 	GuardOutcome::Redirect(intent) => { /* navigator already invoked */ }
//! }
//!
//! let client = ApiClientBuilder::new("http://localhost:9000/api")
//! 	.build(session, navigator)?;
//! # Ok(())
//! # }
//! ```

pub use portcullis_client as client;
pub use portcullis_router as router;
pub use portcullis_session as session;
pub use portcullis_utils as utils;

/// Re-export of the commonly used types from every member crate.
pub mod prelude {
	pub use portcullis_client::prelude::*;
	pub use portcullis_router::prelude::*;
	pub use portcullis_session::prelude::*;
	pub use portcullis_utils::prelude::*;
}
