//! Headline figures grid used on the home and donate pages.

use leptos::prelude::*;

use catalog::content::Stat;

#[component]
pub fn ImpactStats(
    stats: &'static [Stat],
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <section class="section section--muted">
            <div class="container">
                {title
                    .map(|title| {
                        view! {
                            <div class="section__header">
                                <h2 class="section__title">{title}</h2>
                                <p class="section__subtitle">{subtitle}</p>
                            </div>
                        }
                    })}
                <div class="grid grid--4">
                    {stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="card stat">
                                    <div class="stat__value">{stat.value}</div>
                                    <div class="stat__label">{stat.label}</div>
                                    <div class="stat__description">{stat.description}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
