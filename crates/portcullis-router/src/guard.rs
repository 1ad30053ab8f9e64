//! The navigation guard.

use std::sync::Arc;

use portcullis_session::SessionStore;
use tracing::{debug, warn};

use crate::matcher::match_route;
use crate::navigate::{NavigationIntent, Navigator};
use crate::route::RouteDescriptor;

/// Default path of the sign-in route.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Default landing path for signed-in users.
pub const DEFAULT_HOME_PATH: &str = "/";

/// The guard's decision for one path change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
	/// Render the target route; `title` is the matched route's display
	/// title for the caller to apply
	Allow {
		/// Display title of the matched route, if any
		title: Option<String>,
	},
	/// Do not render; the navigator has been invoked with this intent
	Redirect(NavigationIntent),
}

/// Gates every path change on route metadata and session state.
///
/// Constructed with explicit handles to the route table, the session
/// store, and the navigation capability. Evaluation is synchronous and
/// must be re-run on every path change and on every authentication-state
/// change.
///
/// The guard cannot loop: the redirect to the login path only fires for
/// routes requiring authentication, and the login route itself must be
/// authored with `requires_auth = false`.
pub struct NavigationGuard {
	routes: Vec<RouteDescriptor>,
	session: Arc<SessionStore>,
	navigator: Arc<dyn Navigator>,
	login_path: String,
	home_path: String,
}

impl NavigationGuard {
	/// Creates a guard over `routes`, reading `session` and redirecting
	/// through `navigator`.
	pub fn new(
		routes: Vec<RouteDescriptor>,
		session: Arc<SessionStore>,
		navigator: Arc<dyn Navigator>,
	) -> Self {
		Self {
			routes,
			session,
			navigator,
			login_path: DEFAULT_LOGIN_PATH.to_string(),
			home_path: DEFAULT_HOME_PATH.to_string(),
		}
	}

	/// Overrides the sign-in route path.
	pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
		self.login_path = path.into();
		self
	}

	/// Overrides the landing path for signed-in users.
	pub fn with_home_path(mut self, path: impl Into<String>) -> Self {
		self.home_path = path.into();
		self
	}

	/// Returns the route table the guard evaluates against.
	pub fn routes(&self) -> &[RouteDescriptor] {
		&self.routes
	}

	/// Evaluates a path change.
	///
	/// On a redirect decision the navigator is invoked before returning;
	/// an unmatched path carries no authorization metadata and passes
	/// through.
	pub fn evaluate(&self, path: &str) -> GuardOutcome {
		let matched = match_route(&self.routes, path);
		let authenticated = self.session.is_authenticated();

		if let Some(found) = &matched {
			if found.route.meta().requires_auth && !authenticated {
				warn!(path, "sign-in required");
				let intent = NavigationIntent {
					target_path: self.login_path.clone(),
					replace: true,
					preserved_from: Some(path.to_string()),
				};
				self.navigator.navigate(&intent.target_path, intent.options());
				return GuardOutcome::Redirect(intent);
			}
		}

		if path == self.login_path && authenticated {
			debug!(path, "already signed in, going home");
			let intent = NavigationIntent {
				target_path: self.home_path.clone(),
				replace: true,
				preserved_from: None,
			};
			self.navigator.navigate(&intent.target_path, intent.options());
			return GuardOutcome::Redirect(intent);
		}

		GuardOutcome::Allow {
			title: matched.and_then(|found| found.route.meta().title.clone()),
		}
	}

	/// Returns where to land after a successful sign-in: the preserved
	/// destination captured at redirect time, or the home path.
	pub fn post_login_target(&self, preserved_from: Option<&str>) -> String {
		preserved_from
			.map(str::to_string)
			.unwrap_or_else(|| self.home_path.clone())
	}
}

impl std::fmt::Debug for NavigationGuard {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationGuard")
			.field("routes", &self.routes.len())
			.field("login_path", &self.login_path)
			.field("home_path", &self.home_path)
			.finish()
	}
}
