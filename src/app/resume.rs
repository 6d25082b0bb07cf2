use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{Social, CERTIFICATIONS, EXPERIENCE, OWNER, PROJECTS};

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <Title text="Resume" />
        <section class="py-20 bg-slate-900 text-white">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <div class="flex justify-between items-center mb-12">
                        <h1 class="text-4xl md:text-5xl font-bold">"Resume"</h1>
                        <a
                            href="/resume.pdf"
                            download="resume.pdf"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-4 py-2 bg-teal-500 text-white rounded-lg hover:bg-teal-600 transition-colors"
                        >
                            "⬇ Download PDF"
                        </a>
                    </div>
                    <Resume />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Resume() -> impl IntoView {
    view! {
        <div id="resume" class="space-y-12">
            <Contact />
            <div>
                <SectionHeading text="Professional Summary" />
                <p class="text-slate-300">
                    "Former management consultant turned software developer with a blend of business acumen and technical expertise. Passionate about efficient, user-friendly applications that solve real-world problems. Self-taught developer with a track record of delivering high-quality projects."
                </p>
            </div>
            <Skills />
            <Experience />
            <Education />
            <Projects />
        </div>
    }
}

#[component]
fn SectionHeading(text: &'static str) -> impl IntoView {
    view! { <h2 class="text-2xl font-bold mb-4 text-teal-400">{text}</h2> }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold mb-4">{OWNER}</h2>
            <div class="flex flex-col gap-y-1.5 text-slate-300">
                {Social::ALL
                    .into_iter()
                    .map(|social| {
                        let display = social
                            .href()
                            .trim_start_matches("https://")
                            .to_string();
                        view! {
                            <div class="flex items-center gap-x-1.5">
                                <i class=social.icon() />
                                <a href=social.href() target="_blank" rel="noreferrer">
                                    {display}
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills">
            <SectionHeading text="Technical Skills" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <h3 class="font-semibold mb-2">"Languages & Frameworks"</h3>
                    <p class="text-slate-300">
                        "JavaScript, TypeScript, React, React Native, Next.js, Node.js, NestJS, Express, HTML, CSS, Tailwind CSS"
                    </p>
                </div>
                <div>
                    <h3 class="font-semibold mb-2">"Tools & Technologies"</h3>
                    <p class="text-slate-300">
                        "Git, GitHub, Docker, PostgreSQL, Prisma, Redis, MongoDB, REST APIs, Jest, React Testing Library"
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <section id="experience">
            <SectionHeading text="Work Experience" />
            {EXPERIENCE
                .iter()
                .enumerate()
                .map(|(i, role)| {
                    // the current role gets the accent border
                    let border = if i == 0 { "border-teal-400" } else { "border-slate-700" };
                    view! {
                        <div class=format!("mb-8 border-l-2 pl-6 {border}")>
                            <div class="flex flex-col md:flex-row md:justify-between md:items-center mb-2">
                                <h3 class="text-xl font-semibold">{role.title}</h3>
                                <p class="text-slate-400">{role.period}</p>
                            </div>
                            <p class="text-slate-300 mb-2">{role.company}</p>
                            <ul class="list-disc list-inside text-slate-300 space-y-1">
                                {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <section id="education">
            <SectionHeading text="Education" />
            <div class="mb-4">
                <div class="flex flex-col md:flex-row md:justify-between md:items-center">
                    <h3 class="text-xl font-semibold">"Bachelor of Business Administration"</h3>
                    <p class="text-slate-400">"2012 - 2016"</p>
                </div>
            </div>
            <div>
                <h3 class="text-xl font-semibold mb-2">"Relevant Certifications"</h3>
                <ul class="list-disc list-inside text-slate-300 space-y-1">
                    {CERTIFICATIONS.iter().map(|c| view! { <li>{*c}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="resume-projects">
            <SectionHeading text="Projects" />
            <ul class="list-disc list-inside text-slate-300 space-y-1 mb-4">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        view! {
                            <li>
                                <strong>{p.title}</strong>
                                ": "
                                {p.description}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a href="/#projects" class="text-teal-400 hover:text-teal-300">
                "See project details →"
            </a>
        </section>
    }
}
