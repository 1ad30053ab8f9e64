//! Route matching over the descriptor tree.

use std::collections::HashMap;

use crate::route::RouteDescriptor;

/// A matched route with its extracted path parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
	/// The matched descriptor
	pub route: &'a RouteDescriptor,
	/// Values captured by `:name` segments (empty for exact and wildcard
	/// matches)
	pub params: HashMap<String, String>,
}

/// Finds the best descriptor for `path`.
///
/// Within a sibling list the search runs in precedence tiers, each in
/// declared order: exact matches first, then parameterized, then
/// wildcard, finally descending into children (with the full path,
/// since child patterns are absolute). An exact route therefore wins even when
/// a wildcard sibling is declared before it. Returns `None` when nothing
/// matches; callers treat that as "no authorization metadata".
pub fn match_route<'a>(
	table: &'a [RouteDescriptor],
	path: &str,
) -> Option<RouteMatch<'a>> {
	for route in table {
		if route.pattern().matches_exactly(path) {
			return Some(RouteMatch {
				route,
				params: HashMap::new(),
			});
		}
	}

	for route in table {
		if let Some(params) = route.pattern().match_params(path) {
			return Some(RouteMatch { route, params });
		}
	}

	for route in table {
		if route.pattern().match_wildcard(path) {
			return Some(RouteMatch {
				route,
				params: HashMap::new(),
			});
		}
	}

	for route in table {
		if !route.children().is_empty() {
			if let Some(found) = match_route(route.children(), path) {
				return Some(found);
			}
		}
	}

	None
}
