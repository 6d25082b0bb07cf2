use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_window_size, UseElementBoundingReturn, UseWindowSizeReturn,
};

use crate::content::{JOURNEY_CODE, JOURNEY_COMMAND, JOURNEY_SHELL};
use crate::motion::{scroll_progress, Easing, Pose, ScrubTimeline};

/// Code lines slide in one after another, then the last shell command types
/// itself out, shortly before the lines are done.
fn journey_timeline() -> ScrubTimeline {
    ScrubTimeline::new()
        .staggered(JOURNEY_CODE.len(), 500.0, 100.0, Easing::Power1Out)
        .then(1_000.0, 300.0, Easing::Power1Out)
}

#[component]
pub fn CodeTransition() -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(el);
    let UseWindowSizeReturn {
        height: viewport, ..
    } = use_window_size();

    let timeline = journey_timeline();
    let progress = Memo::new(move |_| {
        timeline.sample(scroll_progress(top.get(), height.get(), viewport.get()))
    });
    let at = move |i: usize| progress.with(|p| p.get(i).copied().unwrap_or(0.0));
    let typed = JOURNEY_CODE.len();

    view! {
        <div
            node_ref=el
            class="min-h-screen py-20 bg-gradient-to-b from-slate-800 to-slate-900 relative overflow-hidden text-white"
        >
            <span class="absolute top-10 left-10 text-6xl opacity-30 transition-opacity duration-500 hover:opacity-10">
                "📊"
            </span>
            <span class="absolute top-20 right-20 text-5xl opacity-20 transition-opacity duration-500 hover:opacity-5">
                "📈"
            </span>
            <span class="absolute bottom-40 left-1/4 text-5xl opacity-10 transition-opacity duration-500 hover:opacity-0">
                "📝"
            </span>

            <div class="container mx-auto px-4 relative z-10">
                <h2 class="text-5xl font-bold mb-12 text-center bg-clip-text text-transparent bg-gradient-to-r from-teal-400 to-purple-500">
                    "My Coding Journey"
                </h2>

                <div class="flex flex-col md:flex-row items-center justify-center gap-12 mb-20">
                    <div class="w-full md:w-1/2 bg-slate-700 rounded-lg p-6 shadow-xl transform rotate-2 hover:rotate-0 transition-transform duration-300">
                        <h3 class="text-2xl font-semibold mb-4 text-teal-300">"From Business Professional..."</h3>
                        <p class="text-slate-300 mb-4">
                            "I started my career in the business world, with slide decks, spreadsheets and client presentations every day. I did well there, but kept being drawn to something more technical."
                        </p>
                        <div class="bg-white/80 p-4 rounded text-slate-800 font-semibold shadow-md border-l-4 border-blue-500">
                            "“Team, let's leverage our core competencies to synergize cross-functional partnerships.”"
                        </div>
                    </div>

                    <div class="w-full md:w-1/2 bg-slate-800 rounded-lg p-6 shadow-xl transform -rotate-2 hover:rotate-0 transition-transform duration-300 border border-teal-900">
                        <h3 class="text-2xl font-semibold mb-4 text-teal-300">"...To Developer"</h3>
                        <p class="text-slate-300 mb-4">
                            "Then I found coding: solving hard problems and building software that makes a difference. The switch wasn't always easy, but it has been incredibly rewarding."
                        </p>
                        <div class="bg-slate-900 p-4 rounded text-teal-400 font-mono text-sm shadow-inner border-l-4 border-teal-500">
                            "“Let's refactor this to use async/await and implement proper error handling.”"
                        </div>
                    </div>
                </div>

                <div class="max-w-2xl mx-auto bg-slate-900 rounded-lg p-6 shadow-xl mb-16 border border-slate-700 font-mono text-sm">
                    <div class="flex items-center mb-4">
                        <div class="w-3 h-3 rounded-full bg-red-500 mr-2"></div>
                        <div class="w-3 h-3 rounded-full bg-yellow-500 mr-2"></div>
                        <div class="w-3 h-3 rounded-full bg-green-500 mr-2"></div>
                        <div class="flex-1 text-center text-slate-400 text-xs">"myJourney.tsx"</div>
                    </div>
                    <div class="text-slate-300">
                        {JOURNEY_CODE
                            .iter()
                            .enumerate()
                            .map(|(i, line)| {
                                view! {
                                    <div
                                        class=format!("min-h-[1.25rem] whitespace-pre {}", line.class)
                                        style=move || {
                                            Pose::HIDDEN.with_x(-50.0).lerp(&Pose::VISIBLE, at(i)).to_css()
                                        }
                                    >
                                        {line.text}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="max-w-2xl mx-auto bg-black rounded-lg p-4 shadow-xl mb-12 font-mono text-sm">
                    <div class="flex items-center mb-4">
                        <div class="text-slate-400 text-xs">"Terminal"</div>
                    </div>
                    <div class="text-green-400">
                        {JOURNEY_SHELL.iter().map(|cmd| view! { <p>{*cmd}</p> }).collect_view()}
                        <p
                            class="text-white whitespace-nowrap overflow-hidden"
                            style:width=move || format!("{:.1}%", 100.0 * at(typed))
                        >
                            {JOURNEY_COMMAND}
                            " "
                            <span class="animate-pulse">"_"</span>
                        </p>
                    </div>
                </div>

                <div class="text-center">
                    <div class="inline-block bg-gradient-to-r from-blue-500 to-teal-500 p-px rounded-full">
                        <div class="px-8 py-3 bg-slate-900 rounded-full text-lg font-semibold text-white hover:bg-slate-800 transition-colors">
                            "Check Out My Projects Below"
                        </div>
                    </div>
                </div>

                <div class="absolute -top-10 -right-10 text-8xl text-slate-700 opacity-20 font-mono">"{"</div>
                <div class="absolute -bottom-20 -left-10 text-8xl text-slate-700 opacity-20 font-mono">"}"</div>
                <div class="absolute bottom-40 right-20 text-5xl text-slate-700 opacity-20 font-mono">"</>"</div>
            </div>

            <i class="devicon-vscode-plain absolute bottom-20 right-10 text-6xl opacity-30 transition-opacity duration-500 hover:opacity-70"></i>
            <i class="devicon-github-original absolute top-40 right-1/4 text-5xl opacity-20 transition-opacity duration-500 hover:opacity-60"></i>
            <i class="devicon-react-original absolute bottom-1/3 left-20 text-5xl opacity-10 transition-opacity duration-500 hover:opacity-50"></i>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_types_after_the_code() {
        let timeline = journey_timeline();
        let segments = timeline.segments();
        assert_eq!(segments.len(), JOURNEY_CODE.len() + 1);

        let command = segments[JOURNEY_CODE.len()];
        let last_line = segments[JOURNEY_CODE.len() - 1];
        assert!(command.start_ms > last_line.start_ms);
        assert!(command.start_ms < last_line.start_ms + last_line.duration_ms);

        // nothing shows before the section reaches the trigger line
        assert!(timeline.sample(0.0).iter().all(|p| *p == 0.0));
        assert!(timeline.sample(1.0).iter().all(|p| *p == 1.0));
    }
}
