use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{dom, storage};

/// Key of the persisted preference in the browser's local storage.
pub const THEME_STORAGE_KEY: &str = "theme";

/// The active visual mode. The serde representation doubles as the storage
/// token, so `"dark"` and `"light"` are the only values that ever round-trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parses a stored token. Anything other than the two recognized tokens
    /// is `None` and callers fall back to the default.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// The storage token and root marker class for this mode.
    pub fn token(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Binary style selection. Views call this instead of branching on
    /// `is_dark` at every element.
    pub fn class<'a>(self, dark: &'a str, light: &'a str) -> &'a str {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }
}

/// Owns the current theme for the whole app: restored once at startup,
/// flipped by the navbar toggle, mirrored to local storage and the
/// document root on every change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    /// Reads the persisted preference and applies it to the document root.
    /// A missing, unreadable, or unrecognized value falls back to dark.
    pub fn restore() -> Self {
        let theme = match storage::read(THEME_STORAGE_KEY) {
            Some(token) => Theme::from_token(&token).unwrap_or_else(|| {
                log::warn!("ignoring unrecognized stored theme {:?}", token);
                Theme::default()
            }),
            None => Theme::default(),
        };
        let state = Self { theme };
        state.apply();
        log::debug!("restored theme: {}", theme.token());
        state
    }

    /// Flips the theme, persists the new token, then re-applies the root
    /// marker. Persist happens before apply; both complete before this
    /// returns, so consumers never observe a half-switched state.
    pub fn toggle(&mut self) {
        self.theme = self.theme.toggled();
        storage::write(THEME_STORAGE_KEY, self.theme.token());
        self.apply();
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Forwards to [`Theme::class`] for the current value.
    pub fn class<'a>(&self, dark: &'a str, light: &'a str) -> &'a str {
        self.theme.class(dark, light)
    }

    fn apply(&self) {
        dom::set_root_marker(self.theme);
    }
}

/// The app-wide theme signal provided by the root component.
pub fn use_theme() -> Signal<ThemeState> {
    use_context()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(ThemeState::default().theme, Theme::Dark);
    }

    #[test]
    fn tokens_round_trip() {
        assert_eq!(Theme::from_token("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_token("light"), Some(Theme::Light));
        assert_eq!(Theme::Dark.token(), "dark");
        assert_eq!(Theme::Light.token(), "light");
    }

    #[test]
    fn unrecognized_tokens_are_rejected() {
        assert_eq!(Theme::from_token("blue"), None);
        assert_eq!(Theme::from_token(""), None);
        assert_eq!(Theme::from_token("Dark"), None);
    }

    #[test]
    fn toggle_is_involutive() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn class_selects_by_mode() {
        assert_eq!(Theme::Dark.class("bg-slate-900", "bg-white"), "bg-slate-900");
        assert_eq!(Theme::Light.class("bg-slate-900", "bg-white"), "bg-white");
    }
}
