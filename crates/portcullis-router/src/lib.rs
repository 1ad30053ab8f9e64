//! Client-side routing for the portcullis workspace.
//!
//! A static, ordered tree of [`RouteDescriptor`]s describes the
//! application's URL space; [`match_route`] finds the best descriptor for
//! a concrete path; [`NavigationGuard`] gates every path change on the
//! route's authorization metadata and the current session.

pub mod error;
pub mod guard;
pub mod matcher;
pub mod navigate;
pub mod pattern;
pub mod route;

pub use error::RouterError;
pub use guard::{GuardOutcome, NavigationGuard};
pub use matcher::{RouteMatch, match_route};
pub use navigate::{NavigateOptions, NavigationIntent, Navigator, RecordingNavigator};
pub use pattern::RoutePattern;
pub use route::{RouteDescriptor, RouteMeta};

/// Re-export commonly used types
pub mod prelude {
	pub use super::error::*;
	pub use super::guard::*;
	pub use super::matcher::*;
	pub use super::navigate::*;
	pub use super::pattern::*;
	pub use super::route::*;
}
