//! Browser DOM glue for the view controller.
//!
//! Every function here is a no-op (or returns an empty measurement) outside
//! the `hydrate` build so SSR renders stay deterministic. Missing elements
//! are skipped silently; they only disable the cosmetic feature that needed
//! them.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::consts::{NAV_SCROLL_OFFSET_PX, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
#[cfg(feature = "hydrate")]
use crate::consts::{THEME_TRANSITION_CLASS, THEME_TRANSITION_MS};
use crate::state::scroll::{ScrollSnapshot, SectionBounds};
use crate::state::theme::{Theme, ThemeSurface};

/// Generation counter for the theme transition class.
///
/// Each transition takes a ticket; only the holder of the latest ticket may
/// clear the class, so a timer left over from an earlier toggle does not cut
/// a newer transition short.
#[derive(Clone, Debug, Default)]
pub struct TransitionClock {
    generation: Arc<AtomicU64>,
}

impl TransitionClock {
    /// Start a transition, superseding any earlier one.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    #[must_use]
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == ticket
    }
}

/// Applies themes to the `<html>` element.
#[derive(Clone, Debug, Default)]
pub struct DocumentSurface {
    transition: TransitionClock,
}

impl ThemeSurface for DocumentSurface {
    fn apply_theme(&mut self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(root) = document_root() {
                if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                    log::debug!("set {THEME_ATTRIBUTE} failed: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }

    fn begin_transition(&mut self) {
        let ticket = self.transition.begin();
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = document_root() else {
                return;
            };
            if root.class_list().add_1(THEME_TRANSITION_CLASS).is_err() {
                return;
            }
            let clock = self.transition.clone();
            gloo_timers::callback::Timeout::new(THEME_TRANSITION_MS, move || {
                if !clock.is_latest(ticket) {
                    return;
                }
                if let Err(err) = root.class_list().remove_1(THEME_TRANSITION_CLASS) {
                    log::debug!("clear {THEME_TRANSITION_CLASS} failed: {err:?}");
                }
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }
}

/// Inline script that applies the saved theme before the WASM bundle loads.
///
/// Runs from `<head>`, so a stored `dark` is on `<html>` before first paint.
/// Only the names [`Theme`] serializes to are accepted; anything else keeps
/// the server-rendered default. Storage access errors are swallowed.
#[must_use]
pub fn theme_bootstrap_script() -> String {
    let key = serde_json::to_string(THEME_STORAGE_KEY).unwrap_or_default();
    let attribute = serde_json::to_string(THEME_ATTRIBUTE).unwrap_or_default();
    let known = serde_json::to_string(&[Theme::Light, Theme::Dark]).unwrap_or_default();
    format!(
        "(function(){{try{{var t=window.localStorage.getItem({key});\
         if({known}.indexOf(t)>=0){{document.documentElement.setAttribute({attribute},t);}}\
         }}catch(e){{}}}})();"
    )
}

#[cfg(feature = "hydrate")]
fn document_root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Scroll position that puts a section just below the fixed header.
#[must_use]
pub fn scroll_target_top(section_top: f64) -> f64 {
    (section_top - NAV_SCROLL_OFFSET_PX).max(0.0)
}

/// Measure the current scroll offset and the layout of `section_ids`.
pub fn measure(section_ids: &[&str]) -> ScrollSnapshot {
    ScrollSnapshot { offset: scroll_offset(), sections: measure_sections(section_ids) }
}

fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

fn measure_sections(section_ids: &[&str]) -> Vec<SectionBounds> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        section_ids
            .iter()
            .filter_map(|id| {
                let el = document.get_element_by_id(id)?.dyn_into::<web_sys::HtmlElement>().ok()?;
                Some(SectionBounds::new(*id, f64::from(el.offset_top()), f64::from(el.offset_height())))
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section_ids;
        Vec::new()
    }
}

/// Smooth-scroll to the section with `id`. Returns `false` when the section
/// is not in the document.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(target) = window
            .document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return false;
        };

        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target_top(f64::from(target.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}
