//! Donation form: mode toggles, amount picker, donor fields, and submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! All form state lives in one `RwSignal<DonationFormState>`; every label in
//! the view is a closure over it. Submission is simulated: the button is
//! disabled for the fixed delay, then an in-page confirmation is shown.

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use catalog::content::impact_for;
use catalog::donation::{
    DESIGNATIONS, DonationCategory, PRESET_AMOUNTS, PickupPreference, Recurrence,
};
use catalog::money::format_usd;

use crate::state::donation::{DonationFormState, DonorField};

#[component]
fn DonorInput(form: RwSignal<DonationFormState>, field: DonorField) -> impl IntoView {
    view! {
        <label class="field" for=field.id()>
            <span class="field__label">{field.label()}</span>
            <input
                id=field.id()
                class="input"
                type=field.input_type()
                required=field.required()
                prop:value=move || form.with(|state| state.donor.get(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| state.donor.set(field, value));
                }
            />
        </label>
    }
}

#[component]
fn Checkbox(
    #[prop(into)] label: String,
    checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span class="text-small">{label}</span>
        </label>
    }
}

#[component]
fn AmountPicker(form: RwSignal<DonationFormState>) -> impl IntoView {
    view! {
        <div class="form-section">
            <span class="form-section__title">"Donation Amount"</span>
            <div class="amount-grid">
                {PRESET_AMOUNTS
                    .into_iter()
                    .map(|amount| {
                        let chosen = move || form.with(|state| state.amount.is_preset(amount));
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if chosen() {
                                        "btn btn--primary amount-grid__item"
                                    } else {
                                        "btn btn--outline amount-grid__item"
                                    }
                                }
                                title=impact_for(amount).unwrap_or_default()
                                on:click=move |_| form.update(|state| state.choose_preset(amount))
                            >
                                {format!("${amount}")}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                type="button"
                class=move || {
                    if form.with(|state| state.amount.is_custom()) {
                        "btn btn--primary btn--block"
                    } else {
                        "btn btn--outline btn--block"
                    }
                }
                on:click=move |_| form.update(DonationFormState::choose_custom)
            >
                "Custom Amount"
            </button>
            <Show when=move || form.with(|state| state.amount.is_custom())>
                <label class="field" for="custom-amount">
                    <span class="field__label">"Enter Amount ($)"</span>
                    <input
                        id="custom-amount"
                        class="input"
                        type="number"
                        min="1"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || form.with(|state| state.custom_text().to_owned())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            form.update(|state| state.set_custom_text(raw));
                        }
                    />
                </label>
            </Show>
        </div>
    }
}

#[component]
fn ItemDetails(form: RwSignal<DonationFormState>) -> impl IntoView {
    view! {
        <div class="form-section">
            <label class="field" for="item-description">
                <span class="form-section__title">"What are you donating? *"</span>
                <textarea
                    id="item-description"
                    class="input"
                    rows="3"
                    placeholder="e.g. 2 boxes of children's books, winter clothing"
                    prop:value=move || form.with(|state| state.item_description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.item_description = value);
                    }
                ></textarea>
            </label>
            <span class="form-section__title">"Pickup Preference"</span>
            <div class="radio-group">
                {PickupPreference::ALL
                    .into_iter()
                    .map(|pickup| {
                        view! {
                            <label class="radio">
                                <input
                                    type="radio"
                                    name="pickup"
                                    value=pickup.value()
                                    prop:checked=move || form.with(|state| state.pickup == pickup)
                                    on:change=move |_| form.update(|state| state.pickup = pickup)
                                />
                                <span>{pickup.label()}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// The full donation form.
#[component]
pub fn DonationForm(form: RwSignal<DonationFormState>) -> impl IntoView {
    let quote = Memo::new(move |_| form.with(DonationFormState::quote));
    let is_money = move || form.with(|state| state.category == DonationCategory::Money);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form
            .try_update(DonationFormState::begin_submit)
            .unwrap_or(false)
        {
            return;
        }
        log::debug!(
            "donation submit started: {}",
            form.with_untracked(DonationFormState::submit_label)
        );

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::state::donation::SIMULATED_SUBMIT_DELAY).await;
            form.update(DonationFormState::finish_submit);
            log::info!("donation submit simulated");
        });
    };

    view! {
        <form class="donation-form" on:submit=on_submit>
            <div class="segmented" role="tablist">
                {DonationCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || {
                                    if form.with(|state| state.category == category) {
                                        "segmented__item segmented__item--active"
                                    } else {
                                        "segmented__item"
                                    }
                                }
                                on:click=move |_| form.update(|state| state.set_category(category))
                            >
                                {category.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=is_money fallback=move || view! { <ItemDetails form/> }>
                <div class="form-section">
                    <span class="form-section__title">"Donation Type"</span>
                    <div class="radio-group">
                        {Recurrence::ALL
                            .into_iter()
                            .map(|recurrence| {
                                view! {
                                    <label class="radio">
                                        <input
                                            type="radio"
                                            name="recurrence"
                                            prop:checked=move || form.with(|state| state.recurrence == recurrence)
                                            on:change=move |_| form.update(|state| state.recurrence = recurrence)
                                        />
                                        <span>{recurrence.option_label()}</span>
                                        {(recurrence == Recurrence::Monthly)
                                            .then(|| view! { <span class="badge badge--secondary">"More Impact"</span> })}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <AmountPicker form/>
            </Show>

            <div class="form-section">
                <span class="form-section__title">"Donor Information"</span>
                <div class="field-grid">
                    {DonorField::ALL
                        .into_iter()
                        .map(|field| view! { <DonorInput form field/> })
                        .collect_view()}
                </div>
            </div>

            <label class="field" for="project">
                <span class="form-section__title">"Designate Your Donation (Optional)"</span>
                <select
                    id="project"
                    class="input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.designation = value);
                    }
                >
                    {DESIGNATIONS
                        .iter()
                        .map(|designation| {
                            view! {
                                <option
                                    value=designation.value
                                    selected=move || form.with(|state| state.designation == designation.value)
                                >
                                    {designation.label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>

            <label class="field" for="message">
                <span class="field__label">"Message (Optional)"</span>
                <textarea
                    id="message"
                    class="input"
                    rows="3"
                    placeholder="Share why you're supporting our mission..."
                    prop:value=move || form.with(|state| state.donor.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.donor.message = value);
                    }
                ></textarea>
            </label>

            <div class="form-section">
                <Checkbox
                    label="Send me updates about the projects I'm supporting"
                    checked=Signal::derive(move || form.with(|state| state.updates))
                    on_toggle=move |on| form.update(|state| state.updates = on)
                />
                <Checkbox
                    label="Make this donation anonymous"
                    checked=Signal::derive(move || form.with(|state| state.anonymous))
                    on_toggle=move |on| form.update(|state| state.anonymous = on)
                />
                <Checkbox
                    label="Subscribe to our newsletter for impact stories and updates"
                    checked=Signal::derive(move || form.with(|state| state.newsletter))
                    on_toggle=move |on| form.update(|state| state.newsletter = on)
                />
            </div>

            <Show when=move || is_money() && quote.get().is_payable()>
                <div class="card card--muted donation-summary">
                    <div class="donation-summary__row">
                        <span class="text-strong">{move || quote.get().summary_label()}</span>
                        <span class="donation-summary__total">{move || format_usd(quote.get().total)}</span>
                    </div>
                    {move || {
                        quote
                            .get()
                            .annual_projection()
                            .map(|annual| {
                                view! {
                                    <p class="text-muted text-small">{format!("Annual impact: {}", format_usd(annual))}</p>
                                }
                            })
                    }}
                </div>
            </Show>

            <button
                type="submit"
                class="btn btn--primary btn--lg btn--block"
                disabled=move || !form.with(DonationFormState::can_submit)
            >
                {move || form.with(DonationFormState::submit_label)}
            </button>

            {move || {
                form.with(DonationFormState::confirmation)
                    .map(|message| {
                        view! {
                            <div class="alert alert--success" role="status">
                                <span>{message}</span>
                                <button
                                    type="button"
                                    class="btn btn--ghost btn--sm"
                                    on:click=move |_| form.update(DonationFormState::dismiss_confirmation)
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
            }}

            <p class="text-muted text-small text-center">
                "Your donation is secure and tax-deductible. You will receive a receipt via email."
            </p>
        </form>
    }
}
