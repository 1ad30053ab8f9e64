//! Application preference state.

use parking_lot::RwLock;

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
	/// Light theme
	#[default]
	Light,
	/// Dark theme
	Dark,
}

impl Theme {
	/// Returns the opposite theme.
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}
}

/// Display locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
	/// Simplified Chinese
	#[default]
	ZhCn,
	/// US English
	EnUs,
}

#[derive(Debug, Default)]
struct AppState {
	loading: bool,
	theme: Theme,
	locale: Locale,
}

/// In-memory application preferences: global loading flag, theme, locale.
///
/// Not persisted; every process starts from the defaults.
#[derive(Debug, Default)]
pub struct AppStore {
	state: RwLock<AppState>,
}

impl AppStore {
	/// Creates a store with the default preferences.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the global loading flag.
	pub fn loading(&self) -> bool {
		self.state.read().loading
	}

	/// Returns the active theme.
	pub fn theme(&self) -> Theme {
		self.state.read().theme
	}

	/// Returns the active locale.
	pub fn locale(&self) -> Locale {
		self.state.read().locale
	}

	/// Sets the global loading flag.
	pub fn set_loading(&self, loading: bool) {
		self.state.write().loading = loading;
	}

	/// Sets the active theme.
	pub fn set_theme(&self, theme: Theme) {
		self.state.write().theme = theme;
	}

	/// Sets the active locale.
	pub fn set_locale(&self, locale: Locale) {
		self.state.write().locale = locale;
	}

	/// Flips between the light and dark themes.
	pub fn toggle_theme(&self) {
		let mut state = self.state.write();
		state.theme = state.theme.toggled();
	}
}
