//! Page-level view state and its single owner.
//!
//! DESIGN
//! ======
//! The theme, the active navigation entry, the navigation-bar "scrolled"
//! flag, and the mobile menu live in one [`ViewState`]. Components never
//! write it directly: every change goes through a [`ViewController`]
//! operation, which keeps each value on exactly one writer path.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::state::scroll::{ScrollSnapshot, ScrollTracker};
use crate::state::theme::{Theme, ThemeParseError, ThemeStore, ThemeSurface};
use crate::util::storage::PreferenceStorage;

/// Everything the page chrome renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub theme: Theme,
    pub active_section: Option<String>,
    pub scrolled: bool,
    pub menu_open: bool,
}

impl ViewState {
    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }
}

/// Owns [`ViewState`] and the collaborators that feed it.
#[derive(Clone, Debug)]
pub struct ViewController<S, T> {
    state: ViewState,
    themes: ThemeStore<S, T>,
    scroll: ScrollTracker,
}

impl<S: PreferenceStorage, T: ThemeSurface> ViewController<S, T> {
    /// Load the persisted theme and apply it.
    pub fn new(storage: S, surface: T) -> Self {
        let themes = ThemeStore::load(storage, surface);
        let state = ViewState { theme: themes.get_theme(), ..ViewState::default() };
        Self { state, themes, scroll: ScrollTracker::new() }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.themes.set_theme(theme);
        self.state.theme = theme;
    }

    /// # Errors
    ///
    /// Returns [`ThemeParseError`] for names other than `light` / `dark`;
    /// the current theme is kept.
    pub fn set_theme_named(&mut self, name: &str) -> Result<Theme, ThemeParseError> {
        let theme = self.themes.set_theme_named(name)?;
        self.state.theme = theme;
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.state.theme = self.themes.toggle_theme();
        self.state.theme
    }

    /// Recompute scroll-derived state. Returns `true` when anything changed.
    pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> bool {
        let Some(next) = self.scroll.on_scroll(snapshot) else {
            return false;
        };
        self.state.active_section.clone_from(&next.active_section);
        self.state.scrolled = next.scrolled;
        true
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.state.menu_open = !self.state.menu_open;
        self.state.menu_open
    }

    /// Returns `true` when the menu was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.state.menu_open, false)
    }

    pub fn surface(&self) -> &T {
        self.themes.surface()
    }
}
