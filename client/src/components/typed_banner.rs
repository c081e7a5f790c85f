//! Hero banner whose text types, holds, and deletes a list of phrases.

use leptos::prelude::*;

/// Typed-text banner. Renders empty on the server; the animation starts
/// after hydration.
#[component]
pub fn TypedBanner(phrases: &'static [&'static str]) -> impl IntoView {
    let text = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::typing::Typewriter;

        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let Some(mut writer) = Typewriter::new(phrases) else {
                return;
            };
            while alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                let step = writer.step();
                text.set(step.text);
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(step.delay_ms))).await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = phrases;
    }

    view! {
        <h1 class="hero__title">
            <span id="typed-text" class="typed-text">
                {move || text.get()}
            </span>
            <span class="typed-cursor" aria-hidden="true">
                "|"
            </span>
        </h1>
    }
}
