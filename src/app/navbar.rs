use leptos::{either::Either, ev::MouseEvent, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::use_window_scroll;

use crate::content::{is_current_link, NAV_LINKS, OWNER};

/// Past this many pixels the bar gets its solid background.
const SCROLLED_AFTER_PX: f64 = 10.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > SCROLLED_AFTER_PX;
    let (menu_open, set_menu_open) = signal(false);
    let location = use_location();
    let pathname = location.pathname;
    let hash = location.hash;
    let is_current = move |href: &str| {
        pathname.with(|path| hash.with(|hash| is_current_link(href, path, hash)))
    };
    let reset_hero = expect_context::<ArcTrigger>();

    let on_logo = move |ev: MouseEvent| {
        set_menu_open(false);
        if pathname.get_untracked() == "/" {
            ev.prevent_default();
            reset_hero.notify();
        }
    };

    let link_class = move |href: &'static str| {
        if is_current(href) {
            "text-teal-400 transition-colors"
        } else if scrolled() {
            "text-white hover:text-teal-400 font-semibold transition-colors"
        } else {
            "text-slate-900 font-black hover:text-teal-400 transition-colors"
        }
    };

    view! {
        <header class=move || {
            if scrolled() {
                "fixed w-full z-50 transition-all duration-300 bg-slate-900/90 backdrop-blur-sm py-2"
            } else {
                "fixed w-full z-50 transition-all duration-300 bg-transparent py-4"
            }
        }>
            <div class="container mx-auto px-4 flex justify-between items-center">
                <a
                    href="/"
                    on:click=on_logo
                    class=move || {
                        if scrolled() {
                            "text-xl font-bold text-white"
                        } else {
                            "text-xl font-bold text-slate-900 text-shadow"
                        }
                    }
                >
                    {OWNER}
                </a>

                <nav class="hidden md:flex gap-8 absolute left-1/2 transform -translate-x-1/2">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(name, href)| {
                            view! {
                                <a href=href class=move || link_class(href)>
                                    {name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <a
                    href="/#contact"
                    class=move || {
                        if scrolled() {
                            "hidden md:block py-2 px-4 rounded-lg font-bold transition-colors text-white hover:bg-teal-600"
                        } else {
                            "hidden md:block py-2 px-4 rounded-lg font-bold transition-colors text-slate-900 hover:bg-white"
                        }
                    }
                >
                    "Contact Me"
                </a>

                <button
                    class=move || if scrolled() { "md:hidden text-white" } else { "md:hidden text-slate-900" }
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                        class="w-6 h-6"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d=move || {
                                if menu_open() {
                                    "M6 18L18 6M6 6l12 12"
                                } else {
                                    "M4 6h16M4 12h16M4 18h16"
                                }
                            }
                        />
                    </svg>
                </button>

                {move || {
                    if menu_open() {
                        Either::Left(
                            view! {
                                <div class="md:hidden absolute top-full left-0 right-0 bg-slate-800 p-4">
                                    <nav class="flex flex-col gap-4">
                                        {NAV_LINKS
                                            .into_iter()
                                            .map(|(name, href)| {
                                                view! {
                                                    <a
                                                        href=href
                                                        class=move || {
                                                            if is_current(href) {
                                                                "text-teal-400 transition-colors"
                                                            } else {
                                                                "text-white hover:text-teal-400 transition-colors"
                                                            }
                                                        }
                                                        on:click=move |_| set_menu_open(false)
                                                    >
                                                        {name}
                                                    </a>
                                                }
                                            })
                                            .collect_view()}
                                    </nav>
                                </div>
                            },
                        )
                    } else {
                        Either::Right(())
                    }
                }}
            </div>
        </header>
    }
}
