use leptos::prelude::*;

use catalog::content::{MISSION, TEAM, VALUES};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="container section">
            <header class="page-header">
                <h1 class="page-header__title">"About GiveBack Hub"</h1>
                <p class="page-header__lead">
                    "Founded in 2020, GiveBack Hub emerged from a simple belief: that sustainable change happens when communities are empowered to lead their own development."
                </p>
            </header>

            <section class="split">
                <div>
                    <h2 class="section__title">"Our Mission"</h2>
                    {MISSION
                        .iter()
                        .map(|paragraph| view! { <p class="text-muted">{*paragraph}</p> })
                        .collect_view()}
                </div>
                <img
                    class="split__image"
                    src="/public/diverse-community-members-working-together-on-deve.jpg"
                    alt="Community members working together"
                />
            </section>

            <section class="section">
                <h2 class="section__title text-center">"Our Values"</h2>
                <div class="grid grid--2">
                    {VALUES
                        .iter()
                        .map(|value| {
                            view! {
                                <div class="card">
                                    <h3 class="card__title">{value.title}</h3>
                                    <p class="text-muted">{value.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="section__title text-center">"Our Team"</h2>
                <div class="grid grid--3">
                    {TEAM
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="card text-center">
                                    <img class="avatar" src=member.image alt=member.name />
                                    <h3 class="card__title">{member.name}</h3>
                                    <p class="text-primary">{member.role}</p>
                                    <p class="text-muted text-small">{member.bio}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="banner">
                <h2 class="section__title">"Join Our Mission"</h2>
                <p>
                    "Every donation, volunteer hour, and shared story helps us expand our reach and deepen our impact. Together, we can build a world where every community has the resources and support they need to thrive."
                </p>
            </section>
        </main>
    }
}
