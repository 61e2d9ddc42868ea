use leptos::prelude::*;

use catalog::content::{SERVICE_HIGHLIGHTS, SERVICES_PHONE};

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section class="section section--muted">
            <div class="container">
                <div class="section__header">
                    <h2 class="section__title">"Convenient Pickup & Drop Services"</h2>
                    <p class="section__subtitle">
                        "Making donations easier with our pickup services and ensuring supplies reach communities efficiently."
                    </p>
                </div>
                <div class="grid grid--2">
                    {SERVICE_HIGHLIGHTS
                        .iter()
                        .map(|(title, description, features)| {
                            view! {
                                <div class="card">
                                    <h3 class="card__title">{*title}</h3>
                                    <p class="text-muted">{*description}</p>
                                    <ul class="bullet-list">
                                        {features
                                            .iter()
                                            .map(|feature| view! { <li>{*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="section__cta">
                    <a href="/services" class="btn btn--primary btn--lg">
                        "View All Services →"
                    </a>
                    <a href=format!("tel:{}", SERVICES_PHONE.replace(' ', "")) class="btn btn--outline btn--lg">
                        {format!("Call: {SERVICES_PHONE}")}
                    </a>
                </div>
            </div>
        </section>
    }
}
