//! Sticky top navigation with a collapsible mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` outside the routed content, so it persists across
//! page changes. Following any link closes the mobile menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use catalog::content::{NAV_LINKS, SITE_NAME};

use crate::state::ui::UiState;

#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let link_class = move |href: &'static str| {
        let path = pathname.get();
        let active = if href == "/" {
            path == "/"
        } else {
            path.starts_with(href)
        };
        if active {
            "nav__link nav__link--active"
        } else {
            "nav__link"
        }
    };
    let close = move |_| ui.update(UiState::close_menu);

    view! {
        <nav class="nav">
            <div class="container nav__bar">
                <a href="/" class="nav__brand" on:click=close>
                    {SITE_NAME}
                </a>

                <div class="nav__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <a href=href class=move || link_class(href)>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="/donate" class="btn btn--primary">
                        "Donate Now"
                    </a>
                </div>

                <button
                    class="btn btn--ghost nav__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if ui.get().menu_open { "✕" } else { "☰" }}
                </button>
            </div>

            <div class=move || {
                if ui.get().menu_open {
                    "nav__mobile nav__mobile--open"
                } else {
                    "nav__mobile"
                }
            }>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href class="nav__mobile-link" on:click=close>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
                <a href="/donate" class="btn btn--primary btn--block" on:click=close>
                    "Donate Now"
                </a>
            </div>
        </nav>
    }
}
