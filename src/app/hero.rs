use leptos::prelude::*;

use crate::content::{Profile, ProjectIcon};

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let headline = profile.headline.clone();
    let tagline = profile.tagline.clone();
    view! {
        <header class="relative overflow-hidden">
            <div class="container mx-auto px-6 py-32 relative">
                <div class="flex flex-col items-center text-center">
                    <div class="text-7xl mb-8" aria-hidden="true">
                        {ProjectIcon::Cpu.glyph()}
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 gradient-text">{headline}</h1>
                    <p class="text-xl md:text-2xl mb-10 max-w-2xl text-gray-300">{tagline}</p>
                    <ContactLinks profile />
                </div>
            </div>
        </header>
    }
}

// Always exactly three affordances, in this order: GitHub, LinkedIn, email.
#[component]
fn ContactLinks(profile: Profile) -> impl IntoView {
    view! {
        <div class="flex space-x-6">
            <a
                href=profile.github_url
                target="_blank"
                rel="noopener noreferrer"
                class="contact-link text-2xl hover:text-accent transition-colors duration-300"
                aria-label="GitHub Profile"
            >
                <i class="devicon-github-plain"></i>
            </a>
            <a
                href=profile.linkedin_url
                target="_blank"
                rel="noopener noreferrer"
                class="contact-link text-2xl hover:text-accent transition-colors duration-300"
                aria-label="LinkedIn Profile"
            >
                <i class="devicon-linkedin-plain"></i>
            </a>
            <a
                href=format!("mailto:{}", profile.email)
                class="contact-link text-2xl hover:text-accent transition-colors duration-300"
                aria-label="Email"
            >
                <i class="extra-email"></i>
            </a>
        </div>
    }
}
