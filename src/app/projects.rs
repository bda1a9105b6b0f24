use leptos::prelude::*;

use crate::portfolio::{Project, SectionId, PROJECTS};

use super::icons::SvgIcon;
use super::section::{AnimatedSection, SectionHeading};
use super::PageState;

#[component]
pub fn ProjectsSection(state: PageState) -> impl IntoView {
    view! {
        <AnimatedSection section=SectionId::Projects state shaded=true>
            <SectionHeading title="Projects" subtitle="A few things I've built recently" />
            <ProjectGrid />
        </AnimatedSection>
    }
}

#[component]
pub fn ProjectGrid() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8">
            {PROJECTS.iter().map(|project| view! { <ProjectCard project=*project /> }).collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="flex flex-col rounded-lg overflow-hidden bg-gray-900 border border-gray-700 hover:border-cyan-500/50 transition-colors">
            <img src=project.image alt=project.title loading="lazy" class="h-48 w-full object-cover" />
            <div class="flex flex-col flex-1 p-6">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-gray-400 mb-4 flex-1">{project.description}</p>
                <ul class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <li class="px-2 py-1 rounded bg-cyan-500/10 text-cyan-400 text-xs font-medium">
                                    {*tech}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex gap-4">
                    {project
                        .links()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 text-sm font-medium hover:text-cyan-400"
                                >
                                    <SvgIcon icon=link.icon />
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn one_card_per_project_with_tags_and_links() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <ProjectGrid /> }.to_html());

        assert_eq!(html.matches("<article").count(), PROJECTS.len());
        assert_eq!(html.matches("target=\"_blank\"").count(), PROJECTS.len() * 2);
        for p in PROJECTS {
            assert!(html.contains(p.title), "missing title {}", p.title);
            assert!(html.contains(p.demo_url));
            assert!(html.contains(p.repo_url));
            for tech in p.technologies {
                assert!(html.contains(tech), "missing tag {tech}");
            }
        }
    }
}
