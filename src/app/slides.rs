use leptos::{either::EitherOf4, prelude::*};

use crate::content::Social;
use crate::sequencer::{CheckpointIcon, Frame, Slide, Target, TemplateKind};

/// Renders `slide` with its template. Every animated element reads its pose
/// from `frame` through its `Target` handle.
#[component]
pub fn SlideView(slide: &'static Slide, frame: ReadSignal<Frame>) -> impl IntoView {
    match slide.template {
        TemplateKind::Title => EitherOf4::A(view! { <TitleSlide slide frame /> }),
        TemplateKind::BulletList => EitherOf4::B(view! { <BulletSlide slide frame /> }),
        TemplateKind::TimelineMap => EitherOf4::C(view! { <TimelineSlide slide frame /> }),
        TemplateKind::CallToAction => EitherOf4::D(view! { <CallToActionSlide slide frame /> }),
    }
}

fn styler(frame: ReadSignal<Frame>) -> impl Fn(Target) -> Signal<String> + Copy {
    move |target| Signal::derive(move || frame.with(|f| f.style(target)))
}

#[component]
fn TitleSlide(slide: &'static Slide, frame: ReadSignal<Frame>) -> impl IntoView {
    let style = styler(frame);
    view! {
        <div class="flex flex-col items-center justify-center w-full h-full text-center px-4 relative bg-[url('/scenery.jpg')] bg-cover bg-center">
            <div class="absolute top-40 w-full flex justify-between items-center px-12">
                <div class="relative text-5xl" style=style(Target::Origin)>
                    "💼"
                </div>
                <div class="flex-grow relative h-12">
                    <div class="absolute inset-0" style=style(Target::Traveler)>
                        <div class="absolute inset-0 flex items-center hero-travel">
                            <span class="text-2xl">"✈️"</span>
                        </div>
                    </div>
                </div>
                <div class="relative text-5xl" style=style(Target::Destination)>
                    "💻"
                </div>
            </div>

            <div class="z-10 relative">
                <h1
                    class="text-6xl md:text-8xl font-bold mb-8 text-blue-700 tracking-tight leading-tight"
                    style=style(Target::Heading)
                >
                    {slide.title}
                </h1>
                <p
                    class="text-2xl md:text-4xl mb-10 text-slate-700 font-semibold tracking-wide"
                    style=style(Target::Subtitle)
                >
                    {slide.subtitle}
                </p>
                <div class="flex justify-center space-x-8 mt-8" style=style(Target::Socials)>
                    <SocialIcons link_class="text-gray-600 hover:text-slate-900 hero-pop opacity-80 text-4xl" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn BulletSlide(slide: &'static Slide, frame: ReadSignal<Frame>) -> impl IntoView {
    let style = styler(frame);
    view! {
        <div class="flex flex-col w-full h-full px-8 py-10 relative text-left">
            <div class="absolute left-0 top-0 bottom-0 w-16 bg-blue-600 hero-accent" style=style(Target::AccentBar)></div>

            <div class="pl-20 flex flex-col h-full">
                <Headings slide frame />
                <div class="flex-1 max-w-3xl">
                    {slide
                        .bullets()
                        .into_iter()
                        .enumerate()
                        .map(|(i, bullet)| {
                            view! {
                                <p
                                    class="text-lg md:text-2xl text-gray-700 mb-6 font-light pl-4 border-l-4 border-blue-300"
                                    style=style(Target::Bullet(i))
                                >
                                    {bullet}
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
                {slide
                    .footnote
                    .map(|cities| {
                        view! {
                            <div class="mt-auto mb-16" style=style(Target::Footnote)>
                                <div class="flex items-center">
                                    <span class="text-blue-500 mr-2">"✈️"</span>
                                    <h4 class="text-md font-medium text-blue-600">"Cities Visited:"</h4>
                                </div>
                                <p class="text-sm text-gray-500 italic mt-1">{cities}</p>
                            </div>
                        }
                    })}
            </div>

            <Corner style=style(Target::Corner) />
        </div>
    }
}

#[component]
fn TimelineSlide(slide: &'static Slide, frame: ReadSignal<Frame>) -> impl IntoView {
    let style = styler(frame);
    let checkpoints = slide.checkpoints();
    let last = checkpoints.len().saturating_sub(1);
    view! {
        <div class="flex flex-col w-full h-full px-8 py-10 relative text-left">
            <div class="absolute left-0 top-0 bottom-0 w-16 bg-blue-600 hero-accent" style=style(Target::AccentBar)></div>

            <div class="pl-20 flex flex-col h-full">
                <Headings slide frame />
                <div class="flex-1 flex items-center justify-center relative w-full">
                    <div class="w-full max-w-3xl relative flex flex-col items-center">
                        {checkpoints
                            .iter()
                            .enumerate()
                            .map(|(i, checkpoint)| {
                                let copy = view! {
                                    <h4 class="text-lg font-semibold text-slate-600 mb-1">
                                        {checkpoint.heading}
                                    </h4>
                                    <p class="text-sm text-gray-600 max-w-[250px]">
                                        {checkpoint.description}
                                    </p>
                                };
                                // even checkpoints sit left of the line, odd ones right
                                let (left, right) = if i % 2 == 0 {
                                    (
                                        Some(view! {
                                            <div class="w-1/2 pr-12 flex flex-col items-end text-right" style=style(Target::Checkpoint(i))>
                                                {copy}
                                            </div>
                                            <div class="w-1/2"></div>
                                        }),
                                        None,
                                    )
                                } else {
                                    (
                                        None,
                                        Some(view! {
                                            <div class="w-1/2"></div>
                                            <div class="w-1/2 pl-12 flex flex-col items-start text-left" style=style(Target::Checkpoint(i))>
                                                {copy}
                                            </div>
                                        }),
                                    )
                                };
                                view! {
                                    <div class="w-full flex items-center mb-6 relative">
                                        {(i < last)
                                            .then(|| {
                                                let top = if i == 0 { "20px" } else { "5px" };
                                                let bottom = if i + 1 == last { "-36px" } else { "-30px" };
                                                view! {
                                                    <div
                                                        class="absolute left-1/2 -ml-0.5 w-1 z-0"
                                                        style:top=top
                                                        style:bottom=bottom
                                                    >
                                                        <div class="w-full h-full bg-blue-500 hero-segment" style=style(Target::Segment(i))></div>
                                                    </div>
                                                }
                                            })}
                                        <div class="absolute left-1/2 -translate-x-1/2 z-20 flex items-center justify-center">
                                            <div
                                                class="w-10 h-10 rounded-full bg-white flex items-center justify-center border-2 border-blue-500 shadow-md"
                                                style=style(Target::Marker(i))
                                            >
                                                {checkpoint_icon(checkpoint.icon)}
                                            </div>
                                        </div>
                                        {left}
                                        {right}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <Corner style=style(Target::Corner) />
        </div>
    }
}

#[component]
fn CallToActionSlide(slide: &'static Slide, frame: ReadSignal<Frame>) -> impl IntoView {
    let style = styler(frame);
    view! {
        <div class="flex flex-col items-center justify-center w-full h-full text-center px-4 relative">
            <h2
                class="text-4xl md:text-7xl font-bold mb-6 text-blue-700 tracking-tight"
                style=style(Target::Heading)
            >
                {slide.title}
            </h2>
            <p class="text-xl md:text-3xl mb-12 text-blue-600 font-medium">{slide.subtitle}</p>
            <p class="text-lg md:text-xl mb-6 text-blue-400 italic" style=style(Target::Tagline)>
                {slide.tagline}
            </p>
            <div class="flex flex-col sm:flex-row gap-8" style=style(Target::Actions)>
                <a
                    href="/#projects"
                    class="px-10 py-4 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors font-semibold text-lg hero-pop shadow-md"
                >
                    "View Projects"
                </a>
                <a
                    href="/#contact"
                    class="px-10 py-4 bg-gray-200 text-blue-700 rounded-md hover:bg-gray-300 transition-colors font-semibold text-lg hero-pop shadow-md border border-gray-300"
                >
                    "Contact Me"
                </a>
            </div>
            <div class="flex justify-center gap-8 mt-12" style=style(Target::Socials)>
                <SocialIcons link_class="text-blue-600 hover:text-blue-800 transition-colors hero-pop text-3xl" />
            </div>

            <div class="absolute bottom-10 left-10 right-10 flex justify-between" style=style(Target::Ornaments)>
                <div class="w-16 h-16 border-4 border-blue-400 rounded-md rotate-45"></div>
                <div class="w-16 h-16 border-4 border-blue-500 rounded-full"></div>
                <div class="w-16 h-16 border-4 border-blue-600 rotate-45"></div>
            </div>
        </div>
    }
}

#[component]
fn Headings(slide: &'static Slide, frame: ReadSignal<Frame>) -> impl IntoView {
    let style = styler(frame);
    view! {
        <h2 class="pt-16 text-4xl md:text-6xl font-bold mb-3 text-blue-700" style=style(Target::Heading)>
            {slide.title}
        </h2>
        <h3 class="text-xl md:text-3xl mb-8 text-blue-500 font-medium" style=style(Target::Subtitle)>
            {slide.subtitle}
        </h3>
        <p class="text-lg md:text-xl mb-6 text-blue-400 italic max-w-3xl" style=style(Target::Tagline)>
            {slide.tagline}
        </p>
    }
}

#[component]
fn Corner(style: Signal<String>) -> impl IntoView {
    view! {
        <div class="absolute bottom-0 right-0 w-80 h-80 overflow-hidden pointer-events-none" style=style>
            <div class="absolute bottom-0 right-0 w-full h-full bg-blue-500 rounded-tl-full"></div>
        </div>
    }
}

#[component]
fn SocialIcons(link_class: &'static str) -> impl IntoView {
    Social::ALL
        .into_iter()
        .map(|social| {
            view! {
                <a
                    href=social.href()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=link_class
                    aria-label=social.label()
                >
                    <i class=social.icon()></i>
                </a>
            }
        })
        .collect_view()
}

fn checkpoint_icon(icon: CheckpointIcon) -> &'static str {
    match icon {
        CheckpointIcon::Money => "💰",
        CheckpointIcon::Travel => "✈️",
        CheckpointIcon::Code => "💻",
        CheckpointIcon::Rocket => "🚀",
    }
}
