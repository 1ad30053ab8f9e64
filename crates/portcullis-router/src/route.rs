//! Route descriptors.

use crate::error::RouterError;
use crate::pattern::RoutePattern;

/// Authorization and display metadata attached to a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
	/// Display title applied when the route renders
	pub title: Option<String>,
	/// Whether an active session is required to enter the route
	pub requires_auth: bool,
	/// Whether the rendered view should be kept alive off-screen
	pub keep_alive: bool,
}

/// A node in the static route table: a path pattern, its metadata, and an
/// ordered list of nested child routes.
///
/// Within any sibling list the authored table should keep a catch-all
/// wildcard last; the matcher's precedence rules make exact routes win
/// regardless, but sibling order still decides between patterns of the
/// same tier.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
	pattern: RoutePattern,
	meta: RouteMeta,
	children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
	/// Creates a route for `path`.
	///
	/// # Panics
	///
	/// Panics if the pattern is invalid (exceeds length or segment
	/// limits). Use [`RouteDescriptor::try_new`] for fallible
	/// construction.
	pub fn new(path: &str) -> Self {
		Self::try_new(path)
			.unwrap_or_else(|e| panic!("Invalid route pattern '{}': {}", path, e))
	}

	/// Creates a route for `path`, reporting pattern errors.
	pub fn try_new(path: &str) -> Result<Self, RouterError> {
		Ok(Self {
			pattern: RoutePattern::new(path)?,
			meta: RouteMeta::default(),
			children: Vec::new(),
		})
	}

	/// Sets the display title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.meta.title = Some(title.into());
		self
	}

	/// Marks the route as requiring an active session.
	pub fn requires_auth(mut self, requires_auth: bool) -> Self {
		self.meta.requires_auth = requires_auth;
		self
	}

	/// Marks the rendered view as kept alive off-screen.
	pub fn keep_alive(mut self, keep_alive: bool) -> Self {
		self.meta.keep_alive = keep_alive;
		self
	}

	/// Appends a nested child route.
	pub fn child(mut self, child: RouteDescriptor) -> Self {
		self.children.push(child);
		self
	}

	/// Returns the pattern string.
	pub fn path(&self) -> &str {
		self.pattern.pattern()
	}

	/// Returns the compiled pattern.
	pub fn pattern(&self) -> &RoutePattern {
		&self.pattern
	}

	/// Returns the route metadata.
	pub fn meta(&self) -> &RouteMeta {
		&self.meta
	}

	/// Returns the nested child routes.
	pub fn children(&self) -> &[RouteDescriptor] {
		&self.children
	}
}
