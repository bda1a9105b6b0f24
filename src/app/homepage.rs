use leptos::prelude::*;
use leptos_meta::Title;

use crate::icon::Icon;
use crate::portfolio::{SectionId, PROFILE, SKILLS, SOCIAL_LINKS};

use super::contact::{ContactSection, Modal};
use super::footer::Footer;
use super::header::NavBar;
use super::icons::SvgIcon;
use super::projects::ProjectsSection;
use super::scroll_to_section;
use super::section::{use_scroll_direction, AnimatedSection, SectionHeading};
use super::timeline::ExperienceSection;
use super::PageState;

/// Root of the page. Owns the transient UI state and composes every section.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = PageState::new(use_scroll_direction());

    view! {
        <Title text=PROFILE.headline />
        <NavBar state />
        <main class="flex flex-col">
            <Hero state />
            <About state />
            <Skills state />
            <ProjectsSection state />
            <ExperienceSection state />
            <ContactSection state />
        </main>
        <Footer />
        <Modal state />
    }
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex gap-4">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 text-gray-400 hover:text-cyan-400 transition-colors"
                            aria-label=link.label
                        >
                            <SvgIcon icon=link.icon large=true />
                            <span class="text-sm">{link.label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Hero(state: PageState) -> impl IntoView {
    view! {
        <AnimatedSection section=SectionId::Home state>
            <div class="flex flex-col-reverse lg:flex-row items-center gap-12 min-h-[70vh]">
                <div class="flex-1 text-center lg:text-left">
                    <p class="text-cyan-400 font-medium mb-2">"Hi, my name is"</p>
                    <h1 class="text-4xl sm:text-5xl font-bold mb-4">{PROFILE.name}</h1>
                    <h2 class="text-2xl text-gray-400 mb-6">{PROFILE.headline}</h2>
                    <p class="max-w-xl mb-8 leading-relaxed mx-auto lg:mx-0">{PROFILE.summary}</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start mb-8">
                        <a
                            href=PROFILE.resume
                            download=PROFILE.resume_file_name()
                            class="inline-flex items-center justify-center gap-2 px-6 py-3 rounded-md bg-cyan-500 hover:bg-cyan-400 text-gray-900 font-medium transition-colors"
                        >
                            <SvgIcon icon=Icon::Download />
                            "Download Résumé"
                        </a>
                        <a
                            href=SectionId::Contact.href()
                            class="px-6 py-3 rounded-md border border-cyan-500 text-cyan-400 hover:bg-cyan-500/10 font-medium transition-colors"
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to_section(SectionId::Contact);
                            }
                        >
                            "Get in Touch"
                        </a>
                    </div>
                    <div class="flex justify-center lg:justify-start">
                        <SocialLinks />
                    </div>
                </div>
                <img
                    src=PROFILE.avatar
                    alt=PROFILE.name
                    class="w-56 h-56 lg:w-72 lg:h-72 rounded-full object-cover border-4 border-cyan-500/40 shadow-2xl"
                />
            </div>
        </AnimatedSection>
    }
}

#[component]
fn About(state: PageState) -> impl IntoView {
    view! {
        <AnimatedSection section=SectionId::About state shaded=true>
            <SectionHeading title="About Me" />
            <div class="grid md:grid-cols-2 gap-12 items-center">
                <div class="space-y-4 leading-relaxed">
                    <p>
                        "I started out building websites for local businesses and never really stopped. "
                        "These days I split my time between product engineering and the infrastructure "
                        "that keeps it fast and reliable."
                    </p>
                    <p>
                        "I care about small, well-tested pieces of software, honest code review, and "
                        "leaving a codebase friendlier than I found it."
                    </p>
                    <p>"Outside of work you'll find me on a trail, behind a camera, or tinkering with a keyboard build."</p>
                </div>
                <dl class="grid grid-cols-2 gap-6">
                    <div class="p-6 rounded-lg bg-gray-900 border border-gray-700">
                        <dt class="text-sm text-gray-400">"Based in"</dt>
                        <dd class="text-lg font-medium">{PROFILE.location}</dd>
                    </div>
                    <div class="p-6 rounded-lg bg-gray-900 border border-gray-700">
                        <dt class="text-sm text-gray-400">"Email"</dt>
                        <dd class="text-lg font-medium break-all">
                            <a href=PROFILE.mailto() target="_blank" class="hover:text-cyan-400">
                                {PROFILE.email}
                            </a>
                        </dd>
                    </div>
                </dl>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn Skills(state: PageState) -> impl IntoView {
    view! {
        <AnimatedSection section=SectionId::Skills state>
            <SectionHeading title="Skills" subtitle="Tools I reach for most often" />
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {SKILLS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="p-6 rounded-lg bg-gray-800 border border-gray-700">
                                <h3 class="text-lg font-bold mb-4 text-cyan-400">{group.category}</h3>
                                <ul class="flex flex-wrap gap-2">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <li class="px-3 py-1 rounded-full bg-gray-700 text-sm">
                                                    {*skill}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}
