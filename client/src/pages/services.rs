use leptos::prelude::*;

use catalog::content::{
    ACCEPTED_ITEMS, HOW_IT_WORKS, SERVICE_HOURS, SERVICES, SERVICES_EMAIL, SERVICES_PHONE,
};

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <main class="container section">
            <header class="page-header">
                <h1 class="page-header__title">"Pickup & Drop Services"</h1>
                <p class="page-header__lead">
                    "Making donations easier with convenient pickup services and ensuring supplies reach communities efficiently through our drop-off network."
                </p>
            </header>

            <div class="grid grid--2">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="card">
                                <h2 class="card__title">{service.title}</h2>
                                <p class="text-muted">{service.description}</p>
                                <h4 class="text-strong">"Features:"</h4>
                                <ul class="bullet-list">
                                    {service.features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect_view()}
                                </ul>
                                <h4 class="text-strong">"Service Areas:"</h4>
                                <div class="tag-list">
                                    {service
                                        .areas
                                        .iter()
                                        .map(|area| view! { <span class="badge badge--secondary">{*area}</span> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="section">
                <h2 class="section__title text-center">"What We Accept"</h2>
                <div class="grid grid--3">
                    {ACCEPTED_ITEMS
                        .iter()
                        .map(|item| view! { <div class=item.class>{item.name}</div> })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="section__title text-center">"How It Works"</h2>
                <div class="grid grid--3">
                    {HOW_IT_WORKS
                        .iter()
                        .map(|(step, detail)| {
                            view! {
                                <div class="text-center">
                                    <h3 class="card__title">{*step}</h3>
                                    <p class="text-muted">{*detail}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <div class="card">
                <h3 class="card__title">"Service Hours"</h3>
                <div class="grid grid--2">
                    <div>
                        <h4 class="text-strong">"Pickup Services"</h4>
                        {SERVICE_HOURS
                            .iter()
                            .map(|line| view! { <p class="text-muted">{*line}</p> })
                            .collect_view()}
                    </div>
                    <div>
                        <h4 class="text-strong">"Emergency Drop-off"</h4>
                        <p class="text-muted">"Available 24/7 for urgent supplies"</p>
                        <p class="text-muted">"Call our emergency hotline"</p>
                    </div>
                </div>
            </div>

            <section class="banner">
                <h2 class="section__title">"Ready to Schedule?"</h2>
                <p>
                    "Contact us to schedule a pickup or learn more about our drop-off services. We're here to make your donations count."
                </p>
                <div class="hero__actions">
                    <a href=format!("tel:{}", SERVICES_PHONE.replace(' ', "")) class="btn btn--primary btn--lg">
                        {format!("Call: {SERVICES_PHONE}")}
                    </a>
                    <a href=format!("mailto:{SERVICES_EMAIL}") class="btn btn--outline btn--lg">
                        {format!("Email: {SERVICES_EMAIL}")}
                    </a>
                </div>
            </section>
        </main>
    }
}
