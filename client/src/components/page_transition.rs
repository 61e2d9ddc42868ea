//! Fade-in wrapper around routed content.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Delay before the entered class is applied after a route change.
#[cfg(feature = "hydrate")]
const ENTER_DELAY_MS: u32 = 50;

/// Re-runs a short fade/slide-in whenever the path changes. Server output is
/// rendered already entered so pages are visible without JavaScript.
#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let location = use_location();
    let entered = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let _ = location.pathname.get();
            entered.set(false);
            gloo_timers::callback::Timeout::new(ENTER_DELAY_MS, move || entered.set(true)).forget();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = location;

    view! {
        <div class=move || if entered.get() { "page page--entered" } else { "page" }>
            {children()}
        </div>
    }
}
