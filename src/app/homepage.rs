use leptos::prelude::*;
use leptos_meta::Title;

use super::code_transition::CodeTransition;
use super::contact::ContactSection;
use super::hero::Hero;
use super::projects::ProjectsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <CodeTransition />
        <ProjectsSection />
        <ContactSection />
    }
}
