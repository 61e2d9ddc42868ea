//! Detail panel for the selected NGO.

use leptos::prelude::*;

use crate::state::directory::DirectoryState;

#[component]
pub fn NgoDetail(directory: RwSignal<DirectoryState>) -> impl IntoView {
    let selected = move || directory.with(DirectoryState::selected);

    view! {
        <div class="card ngo-detail">
            <div class="ngo-detail__header">
                <div>
                    <h3 class="card__title text-primary">{move || selected().name}</h3>
                    <p class="text-muted">
                        {move || {
                            let ngo = selected();
                            format!("{} • {}", ngo.location, ngo.distance)
                        }}
                    </p>
                </div>
                <span class="badge badge--secondary">{move || selected().category.label()}</span>
            </div>

            <img class="ngo-detail__image" src=move || selected().image alt=move || selected().name />
            <p class="text-muted">{move || selected().description}</p>
            <p class="text-small">{move || selected().beneficiaries}</p>

            <div class="ngo-detail__block">
                <h4 class="text-strong">"Contact Information"</h4>
                <p class="text-muted text-small">{move || selected().contact.phone}</p>
                <p class="text-muted text-small">{move || selected().contact.email}</p>
            </div>

            <div class="ngo-detail__block">
                <h4 class="text-strong">"Urgent Needs"</h4>
                <div class="tag-list">
                    {move || {
                        selected()
                            .urgent_needs
                            .iter()
                            .map(|need| view! { <span class="badge badge--outline">{*need}</span> })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="ngo-detail__actions">
                <a href=move || selected().donate_href() class="btn btn--primary btn--block">
                    {move || format!("Donate to {}", selected().name)}
                </a>
                <a href=move || format!("mailto:{}", selected().contact.email) class="btn btn--outline btn--block">
                    "Learn More"
                </a>
            </div>
        </div>
    }
}
