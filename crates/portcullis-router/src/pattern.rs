//! Path pattern compilation and matching.
//!
//! A pattern is a `/`-delimited string. A segment starting with `:` is a
//! parameter matching any single non-empty literal segment; a pattern
//! ending in `*` is a wildcard matching every path that starts with the
//! part before the `*`. Segments are compared literally; duplicate
//! slashes produce empty segments that only match other empty segments.

use std::collections::HashMap;

use crate::error::RouterError;

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a pattern.
const MAX_PATH_SEGMENTS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Param(String),
}

/// A compiled path pattern.
///
/// Compilation happens once, at route construction; matching is a plain
/// segment walk with no allocation beyond the extracted parameters.
#[derive(Debug, Clone)]
pub struct RoutePattern {
	pattern: String,
	segments: Vec<Segment>,
	has_params: bool,
	wildcard_base: Option<String>,
}

impl RoutePattern {
	/// Compiles `pattern`.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidPattern`] if the pattern exceeds the
	/// maximum length (1024 bytes) or segment count (32).
	pub fn new(pattern: &str) -> Result<Self, RouterError> {
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(RouterError::InvalidPattern {
				pattern: pattern.to_string(),
				reason: format!(
					"length {} exceeds maximum of {} bytes",
					pattern.len(),
					MAX_PATTERN_LENGTH
				),
			});
		}

		let segments: Vec<Segment> = pattern
			.split('/')
			.map(|s| match s.strip_prefix(':') {
				Some(name) => Segment::Param(name.to_string()),
				None => Segment::Literal(s.to_string()),
			})
			.collect();

		if segments.len() > MAX_PATH_SEGMENTS {
			return Err(RouterError::InvalidPattern {
				pattern: pattern.to_string(),
				reason: format!(
					"{} path segments exceed maximum of {}",
					segments.len(),
					MAX_PATH_SEGMENTS
				),
			});
		}

		let has_params = segments.iter().any(|s| matches!(s, Segment::Param(_)));
		let wildcard_base = pattern
			.strip_suffix('*')
			.map(|base| base.to_string());

		Ok(Self {
			pattern: pattern.to_string(),
			segments,
			has_params,
			wildcard_base,
		})
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns whether this pattern has neither parameters nor a wildcard.
	pub fn is_exact(&self) -> bool {
		!self.has_params && self.wildcard_base.is_none()
	}

	/// Returns whether this pattern contains `:name` segments.
	pub fn has_params(&self) -> bool {
		self.has_params
	}

	/// Returns whether this pattern ends in a wildcard.
	pub fn is_wildcard(&self) -> bool {
		self.wildcard_base.is_some()
	}

	/// Exact comparison: the pattern string equals the path.
	pub fn matches_exactly(&self, path: &str) -> bool {
		self.pattern == path
	}

	/// Parameterized comparison.
	///
	/// Requires identical segment counts; a `:name` segment matches any
	/// non-empty literal segment and captures it, every other segment must
	/// match literally. Returns the captured parameters, or `None` when
	/// the pattern has no parameters or the path does not fit.
	pub fn match_params(&self, path: &str) -> Option<HashMap<String, String>> {
		if !self.has_params {
			return None;
		}

		let path_segments: Vec<&str> = path.split('/').collect();
		if path_segments.len() != self.segments.len() {
			return None;
		}

		let mut params = HashMap::new();
		for (segment, literal) in self.segments.iter().zip(&path_segments) {
			match segment {
				Segment::Param(name) => {
					if literal.is_empty() {
						return None;
					}
					params.insert(name.clone(), (*literal).to_string());
				}
				Segment::Literal(expected) => {
					if expected != literal {
						return None;
					}
				}
			}
		}

		Some(params)
	}

	/// Wildcard comparison: the path starts with the pattern minus its
	/// trailing `*`.
	pub fn match_wildcard(&self, path: &str) -> bool {
		self.wildcard_base
			.as_deref()
			.is_some_and(|base| path.starts_with(base))
	}
}

impl PartialEq for RoutePattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for RoutePattern {}

impl std::fmt::Display for RoutePattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}
