//! Single-page portfolio: hero, content sections, and the scroll wiring
//! that keeps the navigation bar in sync with what is on screen.

use leptos::prelude::*;

use crate::components::cards::{InfoCard, SkillCategoryCard};
use crate::components::nav_bar::NavBar;
use crate::components::typed_banner::TypedBanner;
use crate::content::{BANNER_PHRASES, EDUCATION, EXPERIENCE, PROJECTS, SKILL_CATEGORIES};
#[cfg(feature = "hydrate")]
use crate::app::SiteView;

/// Portfolio landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let site = expect_context::<RwSignal<SiteView>>();
        // Runs once after the sections are in the document.
        Effect::new(move || {
            track_scroll(site);
            crate::util::reveal::observe_reveal_targets(&crate::util::reveal::RevealOptions::default());
            crate::util::reveal::stagger_skill_cards();
        });
    }

    view! {
        <NavBar/>
        <main class="page">
            <section id="home" class="hero">
                <TypedBanner phrases=BANNER_PHRASES/>
                <p class="hero__tagline">"Building reliable backend services with Java and Spring."</p>
                <a class="btn btn--primary" href="#contact">
                    "Get in touch"
                </a>
            </section>

            <section id="about" class="section">
                <h2 class="section__title">"About"</h2>
                <p>
                    "Backend developer focused on clean APIs, well-tested services, and steady "
                    "practice with data structures and algorithms."
                </p>
            </section>

            <section id="skills" class="section">
                <h2 class="section__title">"Skills"</h2>
                <div class="skills-grid">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <SkillCategoryCard category=*category/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <CardSection id="projects" title="Projects" kind="project" cards=PROJECTS/>
            <CardSection id="experience" title="Experience" kind="experience" cards=EXPERIENCE/>
            <CardSection id="education" title="Education" kind="education" cards=EDUCATION/>

            <section id="contact" class="section">
                <h2 class="section__title">"Contact"</h2>
                <p>"The best way to reach me is by email or on GitHub."</p>
            </section>
        </main>
    }
}

#[component]
fn CardSection(
    id: &'static str,
    title: &'static str,
    kind: &'static str,
    cards: &'static [crate::content::Card],
) -> impl IntoView {
    view! {
        <section id=id class="section">
            <h2 class="section__title">{title}</h2>
            <div class="cards-grid">
                {cards.iter().map(|card| view! { <InfoCard card=*card kind=kind/> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Recompute scroll state on scroll/resize, at most once per frame.
///
/// Listeners live for the page view.
#[cfg(feature = "hydrate")]
fn track_scroll(site: RwSignal<SiteView>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::consts::SCROLL_MIN_INTERVAL_MS;
    use crate::content::section_ids;
    use crate::util::dom;
    use crate::util::throttle::{FrameGate, Throttle, run_on_next_frame};

    let ids = section_ids();
    let recompute: Rc<dyn Fn()> = Rc::new(move || {
        let snapshot = dom::measure(&ids);
        site.maybe_update(|v| v.on_scroll(&snapshot));
    });
    let gate = Rc::new(RefCell::new(FrameGate::new()));
    let throttle = Rc::new(RefCell::new(Throttle::new(SCROLL_MIN_INTERVAL_MS)));

    let schedule = {
        let recompute = Rc::clone(&recompute);
        move || run_on_next_frame(&gate, &throttle, &recompute)
    };
    let on_scroll = schedule.clone();
    window_event_listener(leptos::ev::scroll, move |_| on_scroll());
    window_event_listener(leptos::ev::resize, move |_| schedule());

    // Initial state for a page opened mid-scroll (reload, anchor link).
    recompute();
}
