use leptos::prelude::*;

use crate::content::Project;

// Feature-policy allowances for the embedded player frames.
const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <main class="container mx-auto px-6 py-20">
            <h2 class="text-4xl font-bold text-center mb-16">
                "✨ " <span class="gradient-text">"Featured Projects"</span>
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </main>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        technologies,
        video_url,
        github_url,
        demo_url,
        icon,
    } = project;
    let frame_title = title.clone();
    view! {
        <div class="project-card bg-dark-lighter rounded-2xl overflow-hidden border border-primary/20 flex flex-col h-full">
            <div class="p-6 flex flex-col h-full">
                <h3 class="text-2xl font-bold mb-4 flex items-center gap-3">
                    <span aria-hidden="true">{icon.glyph()}</span>
                    <span class="gradient-text">{title}</span>
                </h3>
                <p class="text-gray-300 mb-4 text-sm flex-grow">{description}</p>

                <div class="aspect-video mb-4 rounded-xl overflow-hidden border border-accent/20">
                    <iframe
                        class="w-full h-full"
                        src=video_url
                        title=frame_title
                        allow=VIDEO_ALLOW
                        allowfullscreen=true
                    ></iframe>
                </div>

                <div class="mb-4 flex flex-wrap gap-2">
                    {technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="tech-chip px-3 py-1 bg-primary/10 text-accent rounded-full text-xs border border-primary/30">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                // The link row always renders; only the anchors are conditional.
                <div class="project-links flex gap-4 mt-auto pt-4 border-t border-primary/20">
                    {github_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 text-sm px-4 py-2 rounded-lg border border-primary/30 hover:border-accent/50"
                                >
                                    "View Code"
                                </a>
                            }
                        })}
                    {demo_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 text-sm px-4 py-2 rounded-lg border border-primary/30 hover:border-accent/50"
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
