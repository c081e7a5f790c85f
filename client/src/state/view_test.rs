use super::*;
use crate::consts::THEME_STORAGE_KEY;
use crate::state::scroll::SectionBounds;
use crate::util::storage::MemoryStorage;

/// Stand-in for `<html data-theme=…>`.
#[derive(Clone, Debug, Default)]
struct FakeRoot {
    data_theme: Option<&'static str>,
}

impl ThemeSurface for FakeRoot {
    fn apply_theme(&mut self, theme: Theme) {
        self.data_theme = Some(theme.as_str());
    }
}

fn controller(stored: Option<&str>) -> ViewController<MemoryStorage, FakeRoot> {
    let storage = stored.map_or_else(MemoryStorage::new, |v| MemoryStorage::with_value(THEME_STORAGE_KEY, v));
    ViewController::new(storage, FakeRoot::default())
}

fn layout(offset: f64) -> ScrollSnapshot {
    ScrollSnapshot {
        offset,
        sections: vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("projects", 800.0, 900.0),
            SectionBounds::new("contact", 1700.0, 500.0),
        ],
    }
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn stored_dark_is_applied_to_root_on_init() {
    let view = controller(Some("dark"));
    assert_eq!(view.surface().data_theme, Some("dark"));
    assert_eq!(view.theme(), Theme::Dark);
}

#[test]
fn corrupt_storage_initializes_light() {
    let view = controller(Some("night-mode"));
    assert_eq!(view.surface().data_theme, Some("light"));
    assert_eq!(view.theme(), Theme::Light);
}

#[test]
fn initial_state_has_nothing_active() {
    let view = controller(None);
    assert_eq!(view.state().active_section, None);
    assert!(!view.state().scrolled);
    assert!(!view.state().menu_open);
}

// =============================================================
// Theme operations
// =============================================================

#[test]
fn toggle_updates_state_and_root() {
    let mut view = controller(None);
    assert_eq!(view.toggle_theme(), Theme::Dark);
    assert_eq!(view.state().theme, Theme::Dark);
    assert_eq!(view.surface().data_theme, Some("dark"));
}

#[test]
fn toggle_twice_is_identity() {
    let mut view = controller(Some("dark"));
    view.toggle_theme();
    view.toggle_theme();
    assert_eq!(view.theme(), Theme::Dark);
    assert_eq!(view.surface().data_theme, Some("dark"));
}

#[test]
fn set_theme_named_rejects_unknown_without_touching_state() {
    let mut view = controller(None);
    assert!(view.set_theme_named("solarized").is_err());
    assert_eq!(view.theme(), Theme::Light);
}

#[test]
fn set_theme_is_reflected_in_state() {
    let mut view = controller(None);
    view.set_theme(Theme::Dark);
    assert_eq!(view.state().theme, Theme::Dark);
    assert_eq!(view.set_theme_named("light"), Ok(Theme::Light));
    assert_eq!(view.state().theme, Theme::Light);
}

// =============================================================
// Scroll operations
// =============================================================

#[test]
fn scroll_into_section_marks_exactly_that_entry() {
    let mut view = controller(None);
    assert!(view.on_scroll(&layout(1000.0)));
    let state = view.state();
    assert!(state.is_active("projects"));
    assert!(!state.is_active("home"));
    assert!(!state.is_active("contact"));
    assert!(state.scrolled);
}

#[test]
fn repeated_scroll_with_same_input_reports_no_change() {
    let mut view = controller(None);
    assert!(view.on_scroll(&layout(1000.0)));
    let before = view.state().clone();
    assert!(!view.on_scroll(&layout(1000.0)));
    assert_eq!(view.state(), &before);
}

#[test]
fn scroll_does_not_touch_theme_or_menu() {
    let mut view = controller(Some("dark"));
    view.toggle_menu();
    view.on_scroll(&layout(1800.0));
    assert_eq!(view.theme(), Theme::Dark);
    assert!(view.state().menu_open);
    assert!(view.state().is_active("contact"));
}

#[test]
fn scrolled_flag_follows_threshold() {
    let mut view = controller(None);
    view.on_scroll(&layout(51.0));
    assert!(view.state().scrolled);
    view.on_scroll(&layout(0.0));
    assert!(!view.state().scrolled);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_flips() {
    let mut view = controller(None);
    assert!(view.toggle_menu());
    assert!(!view.toggle_menu());
}

#[test]
fn close_menu_reports_previous_state() {
    let mut view = controller(None);
    assert!(!view.close_menu());
    view.toggle_menu();
    assert!(view.close_menu());
    assert!(!view.state().menu_open);
}
