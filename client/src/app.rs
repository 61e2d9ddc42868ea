//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::components::page_transition::PageTransition;
use crate::pages::{
    about::AboutPage, contact::ContactPage, donate::DonatePage, home::HomePage, map::MapPage,
    not_found::NotFoundPage, project_detail::ProjectDetailPage, projects::ProjectsPage,
    services::ServicesPage,
};
use crate::state::ui::UiState;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_CSS_SRI: &str = "sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY=";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_JS_SRI: &str = "sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo=";

/// HTML shell rendered on the server for SSR + hydration.
///
/// Leaflet is loaded as a blocking script in `<head>` so `window.L` exists
/// before the WASM bundle hydrates the map page.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=LEAFLET_CSS integrity=LEAFLET_CSS_SRI crossorigin=""/>
                <script src=LEAFLET_JS integrity=LEAFLET_JS_SRI crossorigin=""></script>
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

/// Root application component.
///
/// Provides the navigation shell state and sets up routing. Page-level state
/// (directory selection, donation form) is owned by each page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/giveback-hub.css"/>
        <Title text=catalog::content::SITE_NAME/>

        <Router>
            <Navigation/>
            <PageTransition>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("donate") view=DonatePage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailPage/>
                    <Route path=StaticSegment("map") view=MapPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                </Routes>
            </PageTransition>
        </Router>
    }
}
