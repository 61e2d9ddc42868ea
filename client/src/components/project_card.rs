//! Summary card for one project on the projects list.

use leptos::prelude::*;

use catalog::money::format_whole_usd;
use catalog::project::ProjectRecord;

#[component]
pub fn ProjectCard(project: &'static ProjectRecord) -> impl IntoView {
    let bar_width = format!("width: {:.1}%", project.progress_width());
    let started = project
        .start_year()
        .map_or_else(|| "-".to_owned(), |year| year.to_string());

    view! {
        <div class="card card--media project-card">
            <div class="card__media">
                <img src=project.image alt=project.title />
            </div>
            <div class="card__body">
                <div class="tag-list">
                    <span class=project.status.badge_class()>{project.status.label()}</span>
                    <span class=project.category.badge_class()>{project.category.label()}</span>
                </div>
                <h3 class="card__title">{project.title}</h3>
                <p class="text-muted text-small">{project.location}</p>
                <p class="text-muted">{project.description}</p>

                <div class="progress">
                    <div class="progress__labels">
                        <span>"Funding Progress"</span>
                        <span>{format!("{}%", project.rounded_percentage())}</span>
                    </div>
                    <div class="progress__track">
                        <div class="progress__bar" style=bar_width></div>
                    </div>
                    <div class="progress__labels text-muted text-small">
                        <span>{format!("{} raised", format_whole_usd(project.funding_raised))}</span>
                        <span>{format!("{} goal", format_whole_usd(project.funding_goal))}</span>
                    </div>
                </div>

                <div class="fact-grid">
                    <div>
                        <div class="fact-grid__value">{project.beneficiaries}</div>
                        <div class="text-muted text-small">"Beneficiaries"</div>
                    </div>
                    <div>
                        <div class="fact-grid__value">{started}</div>
                        <div class="text-muted text-small">"Started"</div>
                    </div>
                </div>

                <p class="callout text-small">
                    <strong>"Impact: "</strong>
                    {project.impact}
                </p>

                <div class="card__footer">
                    <a href=project.href() class="btn btn--primary btn--sm">
                        "Learn More"
                    </a>
                    <a href="/donate" class="btn btn--outline btn--sm">
                        "Donate"
                    </a>
                </div>
            </div>
        </div>
    }
}
