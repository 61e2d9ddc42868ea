//! Projects list with a status filter.

use leptos::prelude::*;

use catalog::project::{ProjectStatusFilter, all_projects, filter_projects};

use crate::components::project_card::ProjectCard;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let status = RwSignal::new(ProjectStatusFilter::All);
    let visible = Memo::new(move |_| filter_projects(all_projects(), status.get()));

    view! {
        <main class="container section">
            <header class="page-header">
                <h1 class="page-header__title">"Our Projects"</h1>
                <p class="page-header__lead">
                    "Discover the communities we're working with and the sustainable solutions we're implementing together. Every project is designed with local input and measured for lasting impact."
                </p>
            </header>

            <div class="filter-bar filter-bar--center" role="group" aria-label="Filter by status">
                {ProjectStatusFilter::options()
                    .map(|option| {
                        view! {
                            <button
                                class=move || {
                                    if status.get() == option {
                                        "btn btn--primary btn--sm"
                                    } else {
                                        "btn btn--outline btn--sm"
                                    }
                                }
                                on:click=move |_| status.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=|| view! { <p class="text-muted text-center">"No projects match this filter."</p> }
            >
                <div class="grid grid--3">
                    <For each=move || visible.get() key=|project| project.id let:project>
                        <ProjectCard project/>
                    </For>
                </div>
            </Show>

            <section class="banner">
                <h2 class="section__title">"Want to Start a New Project?"</h2>
                <p>
                    "We're always looking for new opportunities to make a difference. If you know of a community in need or have an idea for a sustainable development project, we'd love to hear from you."
                </p>
                <a href="/contact" class="btn btn--primary btn--lg">
                    "Propose a Project"
                </a>
            </section>
        </main>
    }
}
