//! Single project view at `/projects/{id}`.
//!
//! Ids that are not positive integers, or that match no record, render the
//! not-found page.

#[cfg(test)]
#[path = "project_detail_test.rs"]
mod project_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use catalog::money::format_whole_usd;
use catalog::project::{ProjectRecord, display_date, find_project, parse_project_id};

use super::not_found::NotFoundPage;

/// Resolve the raw `{id}` route segment to a record.
pub fn resolve_project(raw: Option<&str>) -> Option<&'static ProjectRecord> {
    let id = parse_project_id(raw?).ok()?;
    find_project(id)
}

#[component]
fn ProjectView(project: &'static ProjectRecord) -> impl IntoView {
    let bar_width = format!("width: {:.1}%", project.progress_width());

    view! {
        <main class="container section">
            <a href="/projects" class="btn btn--ghost">
                "← Back to Projects"
            </a>

            <section class="split">
                <div>
                    <div class="tag-list">
                        <span class=project.status.badge_class()>{project.status.label()}</span>
                        <span class="badge badge--outline">{project.category.label()}</span>
                    </div>
                    <h1 class="page-header__title">{project.title}</h1>
                    <p class="page-header__lead">{project.full_description}</p>
                    <ul class="fact-list">
                        <li>{project.location}</li>
                        <li>{format!("{} beneficiaries", project.beneficiaries)}</li>
                        <li>{format!("{} – {}", display_date(project.start_date), display_date(project.end_date))}</li>
                        <li>{format!("{} goal", format_whole_usd(project.funding_goal))}</li>
                    </ul>
                </div>
                <img class="split__image" src=project.image alt=project.title />
            </section>

            <div class="detail-layout">
                <div class="stack">
                    <div class="card">
                        <h2 class="card__title">"Project Objectives"</h2>
                        <ul class="bullet-list">
                            {project.objectives
                                .iter()
                                .map(|objective| view! { <li>{*objective}</li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Project Timeline"</h2>
                        <div class="timeline">
                            {project
                                .timeline
                                .iter()
                                .map(|phase| {
                                    view! {
                                        <div class="timeline__row">
                                            <span class=phase.status.dot_class()></span>
                                            <div class="timeline__text">
                                                <div class="text-strong">{phase.name}</div>
                                                <div class="text-muted text-small">{phase.date_label}</div>
                                            </div>
                                            <span class="badge badge--outline">{phase.status.label()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Current Impact"</h2>
                        <p class="text-muted">{project.impact}</p>
                    </div>
                </div>

                <aside class="stack">
                    <div class="card">
                        <h2 class="card__title">"Funding Progress"</h2>
                        <div class="progress__track">
                            <div class="progress__bar" style=bar_width></div>
                        </div>
                        <div class="progress__labels text-small text-muted">
                            <span>{format!("{}% funded", project.rounded_percentage())}</span>
                            <span>{format!("{} remaining", format_whole_usd(project.remaining()))}</span>
                        </div>
                        <div class="funding-total">
                            <div class="funding-total__value">{format_whole_usd(project.funding_raised)}</div>
                            <div class="text-muted text-small">
                                {format!("raised of {} goal", format_whole_usd(project.funding_goal))}
                            </div>
                        </div>
                        <a href="/donate" class="btn btn--primary btn--block">
                            "Donate to This Project"
                        </a>
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Share This Project"</h2>
                        <p class="text-muted text-small">"Help us spread the word about this important work."</p>
                        <a
                            href=format!("mailto:?subject={}&body={}", project.title, project.href())
                            class="btn btn--outline btn--sm"
                        >
                            "Email"
                        </a>
                    </div>
                </aside>
            </div>
        </main>
    }
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = Memo::new(move |_| params.with(|map| resolve_project(map.get_str("id"))));

    move || match project.get() {
        Some(project) => view! { <ProjectView project/> }.into_any(),
        None => {
            log::debug!("project not found: {:?}", params.with_untracked(|map| map.get("id")));
            view! { <NotFoundPage/> }.into_any()
        }
    }
}
