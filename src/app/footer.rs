use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::{Social, OWNER, TAGLINE};

#[component]
pub fn Footer() -> impl IntoView {
    let SiteConfig {
        build_time,
        build_year,
        ..
    } = SiteConfig::from_build_env();

    view! {
        <footer class="bg-slate-900 border-t border-slate-800 py-8">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0">
                        <a href="/" class="text-2xl font-bold text-teal-400">
                            {OWNER}
                        </a>
                        <p class="text-slate-400 mt-2">{TAGLINE}</p>
                    </div>

                    <div class="flex gap-6">
                        {Social::ALL
                            .into_iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-slate-400 hover:text-teal-400 transition-colors text-2xl"
                                        aria-label=social.label()
                                    >
                                        <i class=social.icon()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-8 pt-8 border-t border-slate-800 text-center text-slate-500">
                    <p title=format!("Built {build_time}")>
                        {format!("© {build_year} {OWNER}. All rights reserved.")}
                    </p>
                </div>
            </div>
        </footer>
    }
}
