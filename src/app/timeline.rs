use leptos::prelude::*;

use crate::portfolio::{EducationItem, ExperienceItem, SectionId, EDUCATION, EXPERIENCE};

use super::section::{AnimatedSection, SectionHeading};
use super::PageState;

#[component]
pub fn ExperienceSection(state: PageState) -> impl IntoView {
    view! {
        <AnimatedSection section=SectionId::Experience state>
            <SectionHeading title="Experience" />
            <div class="grid lg:grid-cols-2 gap-12">
                <div>
                    <h3 class="text-xl font-bold mb-6">"Work"</h3>
                    <ol class="relative border-l border-gray-700">
                        {EXPERIENCE
                            .iter()
                            .map(|item| view! { <ExperienceEntry item=*item /> })
                            .collect_view()}
                    </ol>
                </div>
                <div>
                    <h3 class="text-xl font-bold mb-6">"Education"</h3>
                    <ol class="relative border-l border-gray-700">
                        {EDUCATION
                            .iter()
                            .map(|item| view! { <EducationEntry item=*item /> })
                            .collect_view()}
                    </ol>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn TimelineDot() -> impl IntoView {
    view! {
        <span class="absolute -left-1.5 mt-1.5 h-3 w-3 rounded-full bg-cyan-400 border border-gray-900"></span>
    }
}

#[component]
pub fn ExperienceEntry(item: ExperienceItem) -> impl IntoView {
    view! {
        <li class="mb-10 ml-6">
            <TimelineDot />
            <time class="text-sm text-gray-400">{item.duration}</time>
            <h4 class="text-lg font-bold">{item.title}</h4>
            <p class="text-cyan-400 mb-2">{item.company}</p>
            <ul class="list-disc list-inside space-y-1 text-gray-300">
                {item.responsibilities.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
            </ul>
        </li>
    }
}

#[component]
pub fn EducationEntry(item: EducationItem) -> impl IntoView {
    view! {
        <li class="mb-10 ml-6">
            <TimelineDot />
            <time class="text-sm text-gray-400">{item.duration}</time>
            <h4 class="text-lg font-bold">{item.degree}</h4>
            <p class="text-cyan-400 mb-2">{item.institution}</p>
            <p class="text-gray-300">{item.description}</p>
        </li>
    }
}
