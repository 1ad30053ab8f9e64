//! The navigation capability.
//!
//! The guard and the HTTP client do not own the navigation mechanism;
//! they are handed a [`Navigator`] at construction and call it. This
//! replaces late-bound module-global wiring with explicit injection.

use parking_lot::Mutex;

/// A redirect decision, consumed once by the navigation mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
	/// Where to go
	pub target_path: String,
	/// Whether to replace the current history entry instead of pushing
	pub replace: bool,
	/// The path the user originally wanted, when the redirect preserves it
	pub preserved_from: Option<String>,
}

impl NavigationIntent {
	/// Returns the options to pass alongside the target path.
	pub fn options(&self) -> NavigateOptions {
		NavigateOptions {
			replace: self.replace,
			from: self.preserved_from.clone(),
		}
	}
}

/// Options accompanying a navigation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigateOptions {
	/// Replace the current history entry instead of pushing
	pub replace: bool,
	/// State forwarded to the destination: the path navigation came from
	pub from: Option<String>,
}

/// Abstract capability to change the current location.
pub trait Navigator: Send + Sync {
	/// Navigates to `path`.
	fn navigate(&self, path: &str, options: NavigateOptions);
}

/// A [`Navigator`] that records every call instead of navigating.
///
/// Useful as a test double and for driving a UI loop that drains
/// navigations itself.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
	calls: Mutex<Vec<(String, NavigateOptions)>>,
}

impl RecordingNavigator {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns every navigation recorded so far.
	pub fn calls(&self) -> Vec<(String, NavigateOptions)> {
		self.calls.lock().clone()
	}

	/// Returns the most recent navigation, if any.
	pub fn last(&self) -> Option<(String, NavigateOptions)> {
		self.calls.lock().last().cloned()
	}

	/// Forgets every recorded navigation.
	pub fn reset(&self) {
		self.calls.lock().clear();
	}
}

impl Navigator for RecordingNavigator {
	fn navigate(&self, path: &str, options: NavigateOptions) {
		self.calls.lock().push((path.to_string(), options));
	}
}
