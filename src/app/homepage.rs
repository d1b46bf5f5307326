use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::content::{self, Profile, Project};
use crate::seo;

use super::footer::SiteFooter;
use super::hero::Hero;
use super::projects::ProjectsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = content::profile();
    let description = profile.tagline.clone();
    view! {
        <Title text="Projects" />
        <Meta name="description" content=description />
        <PortfolioPage profile projects=content::projects() />
    }
}

/// The whole page as a pure view of the profile and project data.
#[component]
pub fn PortfolioPage(profile: Profile, projects: Vec<Project>) -> impl IntoView {
    let ld_json = seo::structured_data(&profile, &projects).to_string();
    let copyright = profile.copyright.clone();
    view! {
        <div class="min-h-screen bg-dark">
            <Hero profile />
            <ProjectsSection projects />
            <SiteFooter copyright />
            <script type="application/ld+json" inner_html=ld_json></script>
        </div>
    }
}
