//! Theme preference store.
//!
//! The persisted value is plain text (`light` / `dark`) under a single
//! storage key. Anything else, including a missing key, resolves to
//! [`Theme::Light`]. Applying a theme goes through a [`ThemeSurface`] so the
//! store can be exercised without a browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::consts::THEME_STORAGE_KEY;
use crate::util::storage::PreferenceStorage;

/// Document-wide presentation mode.
///
/// Serializes to the same lowercase names as [`Theme::as_str`]; the inline
/// bootstrap script embeds that form as its list of accepted values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute / storage spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve a raw stored value, falling back to the default.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a known theme.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

/// Destination that renders the active theme.
pub trait ThemeSurface {
    /// Make `theme` the document's presentation mode.
    fn apply_theme(&mut self, theme: Theme);

    /// Mark the change as animated; the surface clears the mark itself.
    fn begin_transition(&mut self) {}
}

/// Persisted theme preference bound to a rendering surface.
#[derive(Clone, Debug)]
pub struct ThemeStore<S, T> {
    storage: S,
    surface: T,
}

impl<S: PreferenceStorage, T: ThemeSurface> ThemeStore<S, T> {
    /// Build the store and apply the persisted theme without animation.
    pub fn load(storage: S, surface: T) -> Self {
        let mut store = Self { storage, surface };
        let theme = store.get_theme();
        store.surface.apply_theme(theme);
        store
    }

    /// Current persisted theme; `light` when absent or unrecognized.
    pub fn get_theme(&self) -> Theme {
        Theme::resolve(self.storage.read(THEME_STORAGE_KEY).as_deref())
    }

    /// Persist and apply `theme`.
    ///
    /// A failed write is logged and otherwise ignored; the storage keeps the
    /// value for the current page view.
    pub fn set_theme(&mut self, theme: Theme) {
        if let Err(err) = self.storage.write(THEME_STORAGE_KEY, theme.as_str()) {
            leptos::logging::warn!("theme preference not persisted: {err}");
        }
        self.surface.begin_transition();
        self.surface.apply_theme(theme);
    }

    /// Parse `name` and set it. Unknown names leave everything untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeParseError`] when `name` is not `light` or `dark`.
    pub fn set_theme_named(&mut self, name: &str) -> Result<Theme, ThemeParseError> {
        let theme = name.parse::<Theme>()?;
        self.set_theme(theme);
        Ok(theme)
    }

    /// Flip to the opposite theme and return it.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.get_theme().toggled();
        self.set_theme(next);
        next
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }
}
