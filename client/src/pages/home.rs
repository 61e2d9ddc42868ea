use leptos::prelude::*;

use catalog::content::HOME_STATS;

use crate::components::featured_projects::FeaturedProjects;
use crate::components::hero_section::HeroSection;
use crate::components::impact_stats::ImpactStats;
use crate::components::services_section::ServicesSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <HeroSection/>
            <ImpactStats
                title="Our Impact in Numbers"
                subtitle="Every donation creates measurable change in communities worldwide"
                stats=&HOME_STATS
            />
            <FeaturedProjects/>
            <ServicesSection/>
        </main>
    }
}
