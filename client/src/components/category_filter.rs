//! Category pill bar for the NGO directory.

use leptos::prelude::*;

use catalog::ngo::CategoryFilter;

use crate::state::directory::DirectoryState;

#[component]
pub fn CategoryFilterBar(directory: RwSignal<DirectoryState>) -> impl IntoView {
    view! {
        <div class="filter-bar" role="group" aria-label="Filter by category">
            {CategoryFilter::options()
                .map(|option| {
                    let is_active = move || directory.with(|state| state.filter == option);
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    "btn btn--primary btn--sm"
                                } else {
                                    "btn btn--outline btn--sm"
                                }
                            }
                            aria-pressed=move || is_active().to_string()
                            on:click=move |_| {
                                log::debug!("category filter -> {}", option.label());
                                directory.update(|state| state.set_filter(option));
                            }
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
