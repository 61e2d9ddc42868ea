use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero__inner">
                <h1 class="hero__title">
                    "Empowering Communities, " <span class="text-primary">"Changing Lives"</span>
                </h1>
                <p class="hero__lead">
                    "Join us in creating lasting impact through community-driven projects that address real needs and build sustainable futures."
                </p>
                <div class="hero__actions">
                    <a href="/donate" class="btn btn--primary btn--lg">
                        "Make a Donation"
                    </a>
                    <a href="/projects" class="btn btn--outline btn--lg">
                        "View Our Projects"
                    </a>
                </div>
            </div>
        </section>
    }
}
