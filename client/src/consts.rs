//! Tuning constants shared by the view controller and browser glue.
//!
//! Values mirror the stylesheet's expectations (class names, transition
//! durations) so Rust and CSS agree on a single set of numbers.

/// Compiled stylesheet served from the site's `pkg` directory; named after
/// the Leptos `output-name`.
pub const STYLESHEET_HREF: &str = "/pkg/portfolio.css";

/// `localStorage` key holding the persisted theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` consumed by the theme stylesheet rules.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Class placed on `<html>` while a theme change animates.
pub const THEME_TRANSITION_CLASS: &str = "theme-transition";

/// How long the transition class stays on the root element.
pub const THEME_TRANSITION_MS: u32 = 300;

/// Scroll offset past which the navigation bar is considered "scrolled".
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Distance below the viewport top used to decide which section is active.
///
/// Equal to [`NAV_SCROLL_OFFSET_PX`] so a nav click lands exactly on the
/// section it activates.
pub const ACTIVE_LOOKAHEAD_PX: f64 = 80.0;

/// Fixed header height subtracted when smooth-scrolling to a section.
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;

/// Minimum spacing between scroll recomputations when no animation frame
/// is available to coalesce them.
pub const SCROLL_MIN_INTERVAL_MS: f64 = 16.0;

/// Delay between typed characters in the banner.
pub const TYPE_DELAY_MS: u32 = 90;

/// Delay between deleted characters in the banner.
pub const DELETE_DELAY_MS: u32 = 50;

/// Pause once a banner phrase is fully typed.
pub const HOLD_DELAY_MS: u32 = 1500;

/// Per-card delay for the staggered skill-card entrance.
pub const SKILL_STAGGER_MS: u32 = 200;

/// Intersection ratio at which a card counts as visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; shrinks the bottom edge so cards reveal a bit late.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Selector for the elements that reveal on scroll.
pub const REVEAL_SELECTOR: &str = ".skill-category, .project-card, .education-card, .experience-card";

/// Class added to a revealed element.
pub const REVEAL_CLASS: &str = "visible";

/// Selector and class for the staggered skill-card entrance.
pub const SKILL_CARD_SELECTOR: &str = ".skill-card";
pub const SKILL_CARD_CLASS: &str = "animate";
