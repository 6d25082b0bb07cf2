use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::use_element_visibility;

use crate::content::{Level, OWNER, SKILL_GROUPS, SOFT_SKILLS, TECHNICAL_SKILLS};

use super::components::RevealOnScroll;

const BIO_TAGS: [&str; 5] = ["React", "Next.js", "TypeScript", "Node.js", "Tailwind"];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <section class="py-20 bg-slate-900 text-white">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <h1 class="text-4xl md:text-5xl font-bold mb-8 text-center">"About Me"</h1>

                    <div class="bg-slate-800 rounded-lg overflow-hidden shadow-xl p-6 md:p-8 mb-12">
                        <div class="flex flex-col md:flex-row gap-8 items-center">
                            <div class="w-48 h-48 flex-shrink-0 rounded-full overflow-hidden border-4 border-teal-400">
                                <img src="/placeholder-profile.jpg" alt="Profile picture" class="w-full h-full object-cover" />
                            </div>
                            <div>
                                <h2 class="text-2xl font-bold mb-4">{OWNER}</h2>
                                <p class="text-slate-300 mb-4">
                                    "From management consultant to self-taught developer, my journey has been one of continuous learning and growth."
                                </p>
                                <div class="flex flex-wrap gap-2">
                                    {BIO_TAGS
                                        .into_iter()
                                        .map(|tag| {
                                            view! {
                                                <span class="px-3 py-1 bg-slate-700 text-teal-400 rounded-full text-sm">
                                                    {tag}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="mb-16">
                        <SkillProficiency />
                    </div>

                    <div class="space-y-12">
                        <div>
                            <h2 class="text-2xl font-bold mb-4 text-teal-400">"My Journey"</h2>
                            <p class="text-slate-300 mb-4">
                                "My path to becoming a developer has been unconventional. After several years working as a management consultant, I discovered my passion for coding and decided to make a career transition. That background gives me a different perspective on problem-solving and lets me bridge business needs and technical solutions."
                            </p>
                            <p class="text-slate-300">
                                "I'm self-taught, having learned through online resources, building projects and contributing to open source. The journey has taught me persistence and the importance of continuous learning."
                            </p>
                        </div>

                        <div>
                            <h2 class="text-2xl font-bold mb-4 text-teal-400">"My Skills"</h2>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {SKILL_GROUPS
                                    .iter()
                                    .map(|(group, skills)| {
                                        view! {
                                            <div class="bg-slate-800/50 p-4 rounded-lg">
                                                <h3 class="font-semibold mb-2">{*group}</h3>
                                                <ul class="list-disc list-inside text-slate-300 space-y-1">
                                                    {skills.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                                                </ul>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div>
                            <h2 class="text-2xl font-bold mb-4 text-teal-400">"When I'm Not Coding"</h2>
                            <p class="text-slate-300">
                                "Outside of development I travel as much as I can. Having diverse interests fuels creativity and brings fresh perspectives to my work."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillProficiency() -> impl IntoView {
    let technical: &'static [(&str, Level)] = &TECHNICAL_SKILLS;
    let soft: &'static [(&str, Level)] = &SOFT_SKILLS;
    view! {
        <div class="py-16 bg-slate-800 rounded-xl">
            <div class="container mx-auto px-6">
                <RevealOnScroll>
                    <h2 class="text-3xl font-bold mb-12 text-center text-white">"Skill Proficiency"</h2>
                </RevealOnScroll>
                <div class="grid md:grid-cols-2 gap-16">
                    <SkillColumn heading="Technical Skills" skills=technical />
                    <SkillColumn heading="Business & Soft Skills" skills=soft />
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillColumn(heading: &'static str, skills: &'static [(&'static str, Level)]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-2xl font-bold mb-8 text-teal-400 border-b border-slate-700 pb-2">
                {heading}
            </h3>
            <div class="space-y-6">
                {skills
                    .iter()
                    .enumerate()
                    .map(|(i, &(name, level))| {
                        let delay_ms = 100 * i as u32;
                        view! {
                            <RevealOnScroll delay_ms>
                                <div class="flex justify-between mb-1">
                                    <span class="font-medium">{name}</span>
                                    <span class="text-sm text-slate-400">{level.label()}</span>
                                </div>
                                <ExperienceMeter level />
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Bar that fills to the level's percentage once it has been seen.
#[component]
fn ExperienceMeter(level: Level) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let filled = Memo::new(move |prev: Option<&bool>| {
        prev.copied().unwrap_or(false) || visible.get()
    });

    view! {
        <div node_ref=el class="w-full h-2 bg-slate-700 rounded-full overflow-hidden">
            <div
                class=format!("h-full rounded-full transition-[width] duration-1000 ease-out {}", level.color())
                style:width=move || if filled.get() { format!("{}%", level.percent()) } else { "0%".to_string() }
            ></div>
        </div>
    }
}
