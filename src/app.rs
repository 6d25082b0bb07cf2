mod about;
mod code_transition;
mod components;
mod contact;
mod footer;
mod hero;
mod homepage;
mod navbar;
mod projects;
mod resume;
mod slides;

use about::AboutPage;
use components::PageTransition;
use footer::Footer;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use navbar::Navbar;
use resume::ResumePage;

use crate::content::OWNER;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="From management consultant to developer: projects, resume and contact."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-slate-50 text-slate-900 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // notified by the logo link, sends the hero back to its first slide
    provide_context(ArcTrigger::new());

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <Navbar />
            <main class="flex flex-col flex-grow w-full min-h-screen">
                <PageTransition>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/resume") view=ResumePage />
                    </Routes>
                </PageTransition>
            </main>
            <Footer />
        </Router>
    }
}
