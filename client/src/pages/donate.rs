//! Donation page with an optional NGO context panel from `?ngo=<id>`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use catalog::content::{DONATE_STATS, IMPACT_EXAMPLES, OTHER_WAYS_TO_HELP, TRUST_POINTS};
use catalog::donation::donation_context;
use catalog::ngo::NgoRecord;

use crate::components::donation_form::DonationForm;
use crate::components::impact_stats::ImpactStats;
use crate::state::donation::DonationFormState;

#[component]
fn NgoContextPanel(ngo: &'static NgoRecord) -> impl IntoView {
    view! {
        <div class="card card--tinted donate-context">
            <p class="text-small text-muted">"You are donating to"</p>
            <h3 class="card__title text-primary">{ngo.name}</h3>
            <p class="text-muted text-small">{format!("{} • {}", ngo.location, ngo.category.label())}</p>
            <p>{ngo.description}</p>
            <div class="tag-list">
                <span class="text-small text-strong">"Urgent needs:"</span>
                {ngo.urgent_needs
                    .iter()
                    .map(|need| view! { <span class="badge badge--outline">{*need}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn DonatePage() -> impl IntoView {
    let query = use_query_map();
    let context =
        Memo::new(move |_| query.with(|params| donation_context(params.get_str("ngo"))));
    let form = RwSignal::new(DonationFormState::default());

    view! {
        <main class="container section">
            <header class="page-header">
                <h1 class="page-header__title">"Make a Lasting Impact"</h1>
                <p class="page-header__lead">
                    "Your donation directly supports sustainable development projects that create lasting change in communities around the world. Every contribution makes a meaningful difference."
                </p>
            </header>

            <ImpactStats stats=&DONATE_STATS/>

            <div class="split">
                <div class="card">
                    <h2 class="card__title">"Make a Donation"</h2>
                    <p class="text-muted">
                        "Choose an amount or enter a custom donation. All donations are secure and tax-deductible."
                    </p>
                    {move || context.get().map(|ngo| view! { <NgoContextPanel ngo/> })}
                    <DonationForm form/>
                </div>

                <div>
                    <h2 class="section__title">"Your Impact"</h2>
                    <div class="stack">
                        {IMPACT_EXAMPLES
                            .iter()
                            .map(|example| {
                                view! {
                                    <div class="card impact-example">
                                        <span class="badge badge--secondary">{format!("${}", example.amount)}</span>
                                        <p>{example.impact}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="card card--tinted">
                        <h3 class="card__title">"Why Donate with GiveBack Hub?"</h3>
                        <ul class="bullet-list">
                            {TRUST_POINTS
                                .iter()
                                .map(|point| view! { <li>{*point}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>

            <section class="section">
                <h2 class="section__title text-center">"Other Ways to Help"</h2>
                <div class="grid grid--3">
                    {OTHER_WAYS_TO_HELP
                        .iter()
                        .map(|option| {
                            view! {
                                <div class="card text-center">
                                    <h3 class="card__title">{option.title}</h3>
                                    <p class="text-muted">{option.description}</p>
                                    <a href="/contact" class="btn btn--outline btn--sm">
                                        {option.action}
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}
