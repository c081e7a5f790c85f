//! Root application component with routing and the view-state context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::consts::STYLESHEET_HREF;
use crate::pages::home::HomePage;
use crate::state::view::ViewController;
use crate::util::dom::{DocumentSurface, theme_bootstrap_script};
use crate::util::storage::BrowserStorage;

/// The page's single view controller, shared through context.
pub type SiteView = ViewController<BrowserStorage, DocumentSurface>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <ThemeBootstrap/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Applies the saved theme from `<head>`, ahead of hydration.
#[component]
fn ThemeBootstrap() -> impl IntoView {
    view! { <script inner_html=theme_bootstrap_script()></script> }
}

/// Root application component.
///
/// Loads the persisted theme (applying it to `<html>`) and provides the
/// controller to every component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = RwSignal::new(SiteView::new(BrowserStorage::new(), DocumentSurface::default()));
    provide_context(site);

    view! {
        <Stylesheet id="leptos" href=STYLESHEET_HREF/>
        <Title text="Sachin | Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
