//! Fixed navigation bar: section links, theme toggle, mobile menu.

use leptos::prelude::*;

use crate::app::SiteView;
use crate::content::{NAV_ENTRIES, NavEntry};

/// Top navigation bar.
///
/// Gains the `scrolled` class past the scroll threshold; the link for the
/// section in view carries `active`.
#[component]
pub fn NavBar() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteView>>();

    let nav_class = move || {
        if site.with(|v| v.state().scrolled) { "navbar scrolled" } else { "navbar" }
    };
    let menu_class = move || {
        if site.with(|v| v.state().menu_open) { "nav-menu active" } else { "nav-menu" }
    };

    let on_toggle_theme = move |_| {
        site.update(|v| {
            v.toggle_theme();
        });
    };
    let on_toggle_menu = move |_| {
        site.update(|v| {
            v.toggle_menu();
        });
    };

    view! {
        <nav class=nav_class>
            <a class="nav-logo" href="#home">
                "Sachin"
            </a>
            <ul id="nav-menu" class=menu_class>
                {NAV_ENTRIES.iter().map(|entry| view! { <NavLink entry=*entry/> }).collect::<Vec<_>>()}
            </ul>
            <button id="theme-toggle" class="theme-toggle" aria-label="Toggle theme" on:click=on_toggle_theme>
                <span class="theme-toggle__icon" aria-hidden="true"></span>
            </button>
            <button
                id="mobile-menu-toggle"
                class="mobile-menu-toggle"
                aria-label="Toggle navigation"
                aria-controls="nav-menu"
                on:click=on_toggle_menu
            >
                "\u{2630}"
            </button>
        </nav>
    }
}

/// One section link. Clicking scrolls smoothly instead of jumping.
#[component]
fn NavLink(entry: NavEntry) -> impl IntoView {
    let site = expect_context::<RwSignal<SiteView>>();
    let id = entry.id;

    let class = move || {
        if site.with(|v| v.state().is_active(id)) { "nav-link active" } else { "nav-link" }
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if !crate::util::dom::scroll_to_section(id) {
            leptos::logging::warn!("nav target #{id} not found");
        }
        if site.with_untracked(|v| v.state().menu_open) {
            site.update(|v| {
                v.close_menu();
            });
        }
    };

    view! {
        <li>
            <a class=class href=format!("#{id}") on:click=on_click>
                {entry.label}
            </a>
        </li>
    }
}
