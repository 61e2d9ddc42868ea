//! Contact form with a simulated send.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactFormState};

#[component]
fn ContactInput(form: RwSignal<ContactFormState>, field: ContactField) -> impl IntoView {
    let value = move || form.with(|state| state.get(field).to_owned());
    let store = move |raw: String| form.update(|state| state.set(field, raw));

    let control = if field.is_multiline() {
        view! {
            <textarea
                id=field.id()
                class="input"
                rows="5"
                required=field.required()
                placeholder=field.placeholder()
                prop:value=value
                on:input=move |ev| store(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.id()
                class="input"
                type=field.input_type()
                required=field.required()
                placeholder=field.placeholder()
                prop:value=value
                on:input=move |ev| store(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="field" for=field.id()>
            <span class="field__label">{field.label()}</span>
            {control}
        </label>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form
            .try_update(ContactFormState::begin_submit)
            .unwrap_or(false)
        {
            return;
        }
        log::debug!("contact message send started");

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::state::contact::SIMULATED_SEND_DELAY).await;
            form.update(ContactFormState::finish_submit);
            log::info!("contact message send simulated");
        });
    };

    view! {
        <form class="card donation-form" on:submit=on_submit>
            <h2 class="card__title">"Send Us a Message"</h2>
            <div class="field-grid">
                {ContactField::ALL
                    .into_iter()
                    .filter(|field| !field.is_multiline())
                    .map(|field| view! { <ContactInput form field/> })
                    .collect_view()}
            </div>
            <ContactInput form field=ContactField::Message/>

            <button
                type="submit"
                class="btn btn--primary btn--lg btn--block"
                disabled=move || !form.with(ContactFormState::can_submit)
            >
                {move || form.with(ContactFormState::submit_label)}
            </button>

            {move || {
                form.with(ContactFormState::confirmation)
                    .map(|message| {
                        view! {
                            <div class="alert alert--success" role="status">
                                <span>{message}</span>
                                <button
                                    type="button"
                                    class="btn btn--ghost btn--sm"
                                    on:click=move |_| {
                                        form.update(ContactFormState::dismiss_confirmation);
                                    }
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
            }}
        </form>
    }
}
