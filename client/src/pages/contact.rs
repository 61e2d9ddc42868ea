use leptos::prelude::*;

use catalog::content::{CONTACT_CHANNELS, ContactKind, FAQ, OFFICE_HOURS};

use crate::components::contact_form::ContactForm;

fn channel_href(kind: ContactKind, details: &str) -> Option<String> {
    match kind {
        ContactKind::Email => Some(format!("mailto:{details}")),
        ContactKind::Phone => Some(format!("tel:{}", details.replace([' ', '(', ')', '-'], ""))),
        ContactKind::Address | ContactKind::ResponseTime => None,
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <main class="container section">
            <header class="page-header">
                <h1 class="page-header__title">"Get in Touch"</h1>
                <p class="page-header__lead">
                    "Have questions about our work, want to volunteer, or interested in partnering with us? We'd love to hear from you."
                </p>
            </header>

            <section class="section split">
                <ContactForm/>
                <div class="stack">
                    <h2 class="section__title">"Contact Information"</h2>
                    <div class="grid grid--2">
                        {CONTACT_CHANNELS
                            .iter()
                            .map(|channel| {
                                let details = match channel_href(channel.kind, channel.details) {
                                    Some(href) => view! { <a href=href class="text-strong">{channel.details}</a> }.into_any(),
                                    None => view! { <span class="text-strong">{channel.details}</span> }.into_any(),
                                };
                                view! {
                                    <div class="card">
                                        <h3 class="card__title">{channel.title}</h3>
                                        <p>{details}</p>
                                        <p class="text-muted text-small">{channel.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="card">
                        <h3 class="card__title">"Visit Our Office"</h3>
                        <p class="text-muted">
                            "We welcome visitors to our office! Please schedule an appointment in advance to ensure someone is available to meet with you."
                        </p>
                        <p class="text-strong">"Office Hours:"</p>
                        <ul class="plain-list text-muted">
                            {OFFICE_HOURS
                                .iter()
                                .map(|line| view! { <li>{*line}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </section>

            <section class="section">
                <h2 class="section__title text-center">"Frequently Asked Questions"</h2>
                <div class="grid grid--2">
                    {FAQ
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="card">
                                    <h3 class="card__title">{entry.question}</h3>
                                    <p class="text-muted">{entry.answer}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}
