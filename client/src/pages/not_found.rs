use leptos::prelude::*;

/// Fallback for unknown routes and unknown project ids.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <main class="container section not-found">
            <h1 class="section__title">"Page Not Found"</h1>
            <p class="text-muted">"The page you are looking for does not exist or has moved."</p>
            <div class="hero__actions">
                <a href="/" class="btn btn--primary">
                    "Back to Home"
                </a>
                <a href="/projects" class="btn btn--outline">
                    "Browse Projects"
                </a>
            </div>
        </main>
    }
}
