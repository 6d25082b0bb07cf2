use leptos::{ev, prelude::*};
use leptos_meta::Html;
use leptos_use::{use_event_listener, use_window};

use crate::content::{tech_class, Project, OTHER_SKILLS, PROJECTS};

use super::components::RevealOnScroll;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (selected, set_selected) = signal(None::<&'static Project>);

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_selected(None);
        }
    });

    view! {
        // no page scrolling behind an open modal
        <Html {..} class=move || selected.with(|p| if p.is_some() { "overflow-hidden" } else { "" }) />
        <section id="projects" class="py-20 bg-slate-800 text-white">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold mb-4 text-center">"Projects"</h2>
                <p class="text-slate-300 text-center mb-12 max-w-2xl mx-auto">
                    "Here are some of my recent projects. Click on any project to learn more about it."
                </p>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-20">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let delay_ms = 200 * i as u32;
                            view! {
                                <RevealOnScroll delay_ms>
                                    <ProjectCard project on_open=move || set_selected(Some(project)) />
                                </RevealOnScroll>
                            }
                        })
                        .collect_view()}
                </div>

                <RevealOnScroll extra_class="mt-20">
                    <h2 class="text-3xl font-bold mb-4 text-center">"Other Skills"</h2>
                    <p class="text-slate-300 text-center mb-8 max-w-2xl mx-auto">
                        "Additional technologies I've worked with in various projects."
                    </p>
                    <div class="flex flex-wrap justify-center gap-3">
                        {OTHER_SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class=format!(
                                        "px-4 py-2 rounded-full {} flex items-center gap-2 hover:scale-105 transition-all duration-300 bg-slate-700/90 border border-slate-600 hover:border-slate-500 backdrop-blur-sm ring-0 hover:ring-2",
                                        tech_class(skill.name),
                                    )>
                                        <img src=skill.icon alt=skill.name class="w-5 h-5 object-contain" />
                                        <span class="text-white">{skill.name}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </RevealOnScroll>

                {move || {
                    selected
                        .get()
                        .map(|project| {
                            view! { <ProjectModal project on_close=move || set_selected(None) /> }
                        })
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div
            class="bg-slate-700 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-[1.03] cursor-pointer h-full"
            on:click=move |_| on_open()
        >
            <div class="relative w-full h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"
                />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                <p class="text-slate-300 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    <TechBadges project small=true />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectModal(project: &'static Project, on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 bg-black/75 flex items-center justify-center z-50 p-4"
            on:click=move |_| on_close()
        >
            <div
                class="bg-slate-800 rounded-lg max-w-4xl w-full max-h-[90vh] overflow-y-auto"
                on:click=|ev| ev.stop_propagation()
                role="dialog"
                aria-modal="true"
            >
                <div class="p-6">
                    <div class="flex justify-between items-center mb-4">
                        <h3 class="text-2xl font-bold">{project.title}</h3>
                        <button
                            on:click=move |_| on_close()
                            class="text-slate-400 hover:text-white hover:rotate-90 transition-transform duration-300 text-2xl"
                            aria-label="Close modal"
                        >
                            "✕"
                        </button>
                    </div>

                    <img src=project.image alt=project.title class="w-full h-64 mb-6 object-cover rounded-lg" />

                    <p class="text-slate-300 mb-6">{project.long_description}</p>

                    <div class="flex flex-wrap gap-2 mb-6">
                        <TechBadges project small=false />
                    </div>

                    <div class="flex gap-4">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-4 py-2 bg-slate-700 rounded-lg hover:bg-slate-600 transition-colors hover:scale-105 duration-200"
                        >
                            <i class="devicon-github-plain"></i>
                            "GitHub"
                        </a>
                        <a
                            href=project.live_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-4 py-2 bg-teal-500 rounded-lg hover:bg-teal-600 transition-colors hover:scale-105 duration-200"
                        >
                            "↗ Live Demo"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TechBadges(project: &'static Project, small: bool) -> impl IntoView {
    let size = if small { "text-xs font-medium" } else { "" };
    project
        .technologies
        .iter()
        .map(|tech| {
            view! {
                <span class=format!(
                    "px-3 py-1.5 {} {size} text-slate-200 rounded-full border border-slate-600 hover:border-slate-500 transition-all duration-300 bg-slate-700/80 backdrop-blur-sm ring-0 hover:ring-2",
                    tech_class(tech),
                )>{*tech}</span>
            }
        })
        .collect_view()
}
