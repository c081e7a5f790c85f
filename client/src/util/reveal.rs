//! Reveal-on-scroll and staggered entrance animations for cards.
//!
//! Cards matching [`REVEAL_SELECTOR`] gain [`REVEAL_CLASS`] the first time
//! they intersect the viewport and are then unobserved, so a revealed card
//! never hides again. Skill cards animate in one after another.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SKILL_STAGGER_MS};
#[cfg(feature = "hydrate")]
use crate::consts::{REVEAL_CLASS, REVEAL_SELECTOR, SKILL_CARD_CLASS, SKILL_CARD_SELECTOR};

/// Intersection observer tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, root_margin: REVEAL_ROOT_MARGIN }
    }
}

/// Entrance delay for the card at `index`.
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(SKILL_STAGGER_MS)
}

/// Start observing every reveal target currently in the document.
///
/// The observer and its callback live for the rest of the page view.
#[cfg(feature = "hydrate")]
pub fn observe_reveal_targets(options: &RevealOptions) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Err(err) = target.class_list().add_1(REVEAL_CLASS) {
                    log::debug!("reveal class not applied: {err:?}");
                    continue;
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("IntersectionObserver unavailable: {err:?}");
            return;
        }
    };
    callback.forget();

    let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    let mut observed = 0_u32;
    for i in 0..targets.length() {
        if let Some(el) = targets.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&el);
            observed += 1;
        }
    }
    log::debug!("observing {observed} reveal targets");
}

/// Add the entrance class to each skill card, [`SKILL_STAGGER_MS`] apart.
#[cfg(feature = "hydrate")]
pub fn stagger_skill_cards() {
    use wasm_bindgen::JsCast;

    let Some(cards) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all(SKILL_CARD_SELECTOR).ok())
    else {
        return;
    };
    for i in 0..cards.length() {
        let Some(card) = cards.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let delay = stagger_delay_ms(i as usize);
        gloo_timers::callback::Timeout::new(delay, move || {
            if let Err(err) = card.class_list().add_1(SKILL_CARD_CLASS) {
                log::debug!("skill card animation skipped: {err:?}");
            }
        })
        .forget();
    }
}
