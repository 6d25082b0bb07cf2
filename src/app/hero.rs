use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_meta::Style;
use leptos_use::{use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};

use crate::config::SiteConfig;
use crate::content::SLIDES;
use crate::motion::TweenEngine;
use crate::sequencer::{Frame, Navigation, Sequencer, SequencerConfig, Target};

use super::slides::SlideView;

type HeroSequencer = Sequencer<'static, TweenEngine<Target>>;
type SharedSequencer = StoredValue<Arc<Mutex<HeroSequencer>>>;

/// Only mounted while the hero is, so it leaves with it.
const HERO_CSS: &str = r#"
.hero-cursor { cursor: default; }
.hero-stage { will-change: transform, opacity; transform-origin: center; }
.hero-accent { transform-origin: left; }
.hero-segment { transform-origin: top; }
.hero-travel { animation: hero-travel 4s cubic-bezier(0.65, 0, 0.35, 1) 2s infinite both; }
@keyframes hero-travel {
  from { transform: translateX(0); opacity: 0; }
  to { transform: translateX(90%); opacity: 1; }
}
.hero-pop { transition: transform 0.2s ease; }
.hero-pop:hover { transform: scale(1.1); }
.text-shadow { text-shadow: 0 1px 2px rgba(255, 255, 255, 0.6); }
"#;

/// Run `f` against the sequencer and publish the resulting frame if it
/// differs from the one on screen.
fn drive<R>(
    sequencer: SharedSequencer,
    set_frame: WriteSignal<Frame>,
    frame: ReadSignal<Frame>,
    f: impl FnOnce(&mut HeroSequencer) -> R,
) -> R {
    sequencer.with_value(|s| {
        let mut s = s.lock().expect("should be able to lock hero sequencer");
        let res = f(&mut s);
        let next = s.snapshot();
        if frame.with_untracked(|current| current != &next) {
            set_frame.set(next);
        }
        res
    })
}

#[component]
pub fn Hero() -> impl IntoView {
    let config = SequencerConfig::from_site(&SiteConfig::from_build_env());
    let sequencer: SharedSequencer = StoredValue::new(Arc::new(Mutex::new(Sequencer::new(
        &SLIDES,
        TweenEngine::new(),
        config,
    ))));
    let initial = sequencer.with_value(|s| {
        s.lock()
            .expect("should be able to lock hero sequencer")
            .snapshot()
    });
    let (frame, set_frame) = signal(initial);
    let active = Memo::new(move |_| frame.with(|f| f.active));

    let navigate = move |go: fn(&mut HeroSequencer) -> Navigation| {
        drive(sequencer, set_frame, frame, go);
    };
    let jump_to = move |index: usize| {
        drive(sequencer, set_frame, frame, |s| s.jump_to(index));
    };

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        drive(sequencer, set_frame, frame, |s| s.tick(args.timestamp));
    });

    let reset = expect_context::<ArcTrigger>();
    Effect::watch(
        move || reset.track(),
        move |_, _, _| {
            drive(sequencer, set_frame, frame, HeroSequencer::reset);
        },
        false,
    );

    on_cleanup(move || {
        pause();
        sequencer.with_value(|s| {
            s.lock()
                .expect("should be able to lock hero sequencer")
                .unmount()
        });
    });

    let count = SLIDES.len();
    view! {
        <Style>{HERO_CSS}</Style>
        <section class="h-screen flex flex-col items-center justify-center overflow-hidden relative hero-cursor">
            <div class=move || {
                format!(
                    "absolute inset-0 w-full h-full transition-colors duration-1000 {}",
                    SLIDES[active.get()].backdrop,
                )
            } />

            <div
                class="relative z-10 w-full h-full max-w-7xl mx-auto flex flex-col items-center justify-center shadow-2xl hero-stage"
                style=move || frame.with(|f| f.style(Target::Stage))
            >
                {move || {
                    let slide = &SLIDES[active.get()];
                    view! { <SlideView slide frame /> }
                }}
            </div>

            <button
                on:click=move |_| navigate(HeroSequencer::retreat)
                class="absolute left-4 top-1/2 -translate-y-1/2 bg-blue-600 hover:bg-blue-700 text-white rounded-full p-3 z-20 shadow-md"
                aria-label="Previous slide"
            >
                <Chevron points="15 18 9 12 15 6" />
            </button>
            <button
                on:click=move |_| navigate(HeroSequencer::advance)
                class="absolute right-4 top-1/2 -translate-y-1/2 bg-blue-600 hover:bg-blue-700 text-white rounded-full p-3 z-20 shadow-md"
                aria-label="Next slide"
            >
                <Chevron points="9 18 15 12 9 6" />
            </button>

            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2 z-20">
                {(0..count)
                    .map(|i| {
                        view! {
                            <button
                                on:click=move |_| jump_to(i)
                                class=move || {
                                    if active.get() == i {
                                        "w-3 h-3 rounded-full bg-blue-600"
                                    } else {
                                        "w-3 h-3 rounded-full bg-blue-200 hover:bg-blue-400"
                                    }
                                }
                                aria-label=format!("Go to slide {}", i + 1)
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="absolute bottom-2 right-4 text-gray-500 text-sm font-medium">
                {move || format!("Slide {}/{}", active.get() + 1, count)}
            </div>
        </section>
    }
}

#[component]
fn Chevron(points: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="3"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="w-[18px] h-[18px]"
        >
            <polyline points=points />
        </svg>
    }
}
