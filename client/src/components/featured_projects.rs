use leptos::prelude::*;

use catalog::content::FEATURED_PROJECTS;

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section__header">
                    <h2 class="section__title">"Featured Projects"</h2>
                    <p class="section__subtitle">
                        "Discover how your support is creating lasting change in communities around the world"
                    </p>
                </div>
                <div class="grid grid--3">
                    {FEATURED_PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="card card--media">
                                    <div class="card__media">
                                        <img src=project.image alt=project.title />
                                    </div>
                                    <div class="card__body">
                                        <h3 class="card__title">{project.title}</h3>
                                        <p class="text-muted">{project.description}</p>
                                        <div class="card__footer">
                                            <span class="text-primary text-strong">{project.impact}</span>
                                            <a
                                                href=format!("/projects/{}", project.project_id)
                                                class="btn btn--outline btn--sm"
                                            >
                                                "Learn More"
                                            </a>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="section__cta">
                    <a href="/projects" class="btn btn--primary btn--lg">
                        "View All Projects"
                    </a>
                </div>
            </div>
        </section>
    }
}
