//! NGO directory page: filterable Leaflet map plus a detail panel.

use leptos::prelude::*;

use crate::components::category_filter::CategoryFilterBar;
use crate::components::ngo_detail::NgoDetail;
use crate::components::ngo_map::NgoMap;
use crate::state::directory::DirectoryState;

#[component]
pub fn MapPage() -> impl IntoView {
    let directory = RwSignal::new(DirectoryState::new());

    view! {
        <main>
            <header class="page-header page-header--tinted">
                <h1 class="page-header__title text-primary">"Find NGOs Near You"</h1>
                <p class="page-header__lead">
                    "Discover and support local NGOs making a difference in Mumbai communities"
                </p>
            </header>

            <div class="container section directory">
                <div class="card directory__map">
                    <h2 class="card__title">"Mumbai NGO Map"</h2>
                    <p class="text-muted text-small">"Interactive map showing nearby NGOs and their locations"</p>
                    <NgoMap directory/>
                </div>

                <aside class="directory__side">
                    <div class="card">
                        <h3 class="card__title">"Filter by Category"</h3>
                        <CategoryFilterBar directory/>
                    </div>
                    <NgoDetail directory/>
                </aside>
            </div>
        </main>
    }
}
