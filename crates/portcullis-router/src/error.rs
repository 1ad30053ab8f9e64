//! Router error types.

use thiserror::Error;

/// Errors raised while building or matching routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// The pattern string could not be compiled
	#[error("Invalid route pattern '{pattern}': {reason}")]
	InvalidPattern {
		/// The offending pattern string
		pattern: String,
		/// Why compilation failed
		reason: String,
	},
}
