use std::time::Duration;

use leptos::{either::EitherOf3, ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::contact::{ContactForm, KonamiTracker, SubmitStatus, KONAMI_CELEBRATION_MS};

use super::components::RevealOnScroll;

/// Accepts a contact message. Nothing is delivered anywhere, the message is
/// validated and logged.
#[server(prefix = "/api", endpoint = "contact")]
pub async fn submit_contact(form: ContactForm) -> Result<(), ServerFnError> {
    let form = form.trimmed();
    if let Err(e) = form.validate() {
        tracing::warn!("rejected contact message: {e}");
        return Err(ServerFnError::new(e.to_string()));
    }
    tracing::info!(
        name = %form.name,
        email = %form.email,
        chars = form.message.chars().count(),
        "contact message received"
    );
    Ok(())
}

const INPUT_CLASS: &str = "w-full px-4 py-2 bg-slate-800 border border-slate-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500";

#[component]
pub fn ContactSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (status, set_status) = signal(SubmitStatus::Idle);
    let (celebrating, set_celebrating) = signal(false);
    let submit = ServerAction::<SubmitContact>::new();

    Effect::new(move |_| match submit.value().get() {
        Some(Ok(())) => {
            set_status(SubmitStatus::Success);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        }
        Some(Err(e)) => {
            log::warn!("contact submission failed: {e}");
            set_status(SubmitStatus::Error);
        }
        None => {}
    });

    let tracker = StoredValue::new(KonamiTracker::new());
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        let key = ev.key();
        let unlocked = tracker
            .try_update_value(|t| t.press(&key))
            .unwrap_or(false);
        if unlocked {
            log::info!("konami code entered");
            set_celebrating(true);
            set_timeout(
                move || set_celebrating(false),
                Duration::from_millis(KONAMI_CELEBRATION_MS),
            );
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = form.validate() {
            log::debug!("contact form invalid: {e}");
            set_status(SubmitStatus::Error);
            return;
        }
        set_status(SubmitStatus::Submitting);
        submit.dispatch(SubmitContact { form });
    };

    view! {
        <section id="contact" class="py-20 bg-slate-900 text-white relative">
            <div class="container mx-auto px-4">
                <div class="max-w-2xl mx-auto">
                    <h2 class="text-4xl font-bold mb-4 text-center relative">
                        "Get In Touch"
                        <Show when=celebrating>
                            <span class="absolute top-0 right-0 text-xl text-teal-400">
                                "Konami Code Activated! 🎮"
                            </span>
                        </Show>
                    </h2>
                    <p class="text-slate-300 mb-8 text-center">
                        "Interested in working together? Feel free to reach out using the form below."
                    </p>

                    {move || match status.get() {
                        SubmitStatus::Success => EitherOf3::A(view! {
                            <div class="bg-green-500/20 border border-green-500 text-green-300 rounded-lg p-4 mb-8">
                                <p class="font-medium">
                                    "Thank you for your message! I'll get back to you as soon as possible."
                                </p>
                            </div>
                        }),
                        SubmitStatus::Error => EitherOf3::B(view! {
                            <div class="bg-red-500/20 border border-red-500 text-red-300 rounded-lg p-4 mb-8">
                                <p class="font-medium">
                                    "Something went wrong. Please try again or contact me directly."
                                </p>
                            </div>
                        }),
                        SubmitStatus::Idle | SubmitStatus::Submitting => EitherOf3::C(()),
                    }}

                    <RevealOnScroll>
                        <form
                            on:submit=on_submit
                            class=move || {
                                if celebrating() {
                                    "space-y-6 transition-all duration-300 bg-gradient-to-r from-purple-500 via-teal-500 to-blue-500 p-6 rounded-lg rotate-[360deg] scale-105"
                                } else {
                                    "space-y-6 transition-all duration-300"
                                }
                            }
                        >
                            <div>
                                <label for="name" class="block text-sm font-medium text-slate-300 mb-1">
                                    "Name"
                                </label>
                                <input type="text" id="name" name="name" required class=INPUT_CLASS bind:value=name />
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-medium text-slate-300 mb-1">
                                    "Email"
                                </label>
                                <input type="email" id="email" name="email" required class=INPUT_CLASS bind:value=email />
                            </div>
                            <div>
                                <label for="message" class="block text-sm font-medium text-slate-300 mb-1">
                                    "Message"
                                </label>
                                <textarea id="message" name="message" required rows=5 class=INPUT_CLASS bind:value=message />
                            </div>
                            <button
                                type="submit"
                                disabled=move || status.get().is_submitting()
                                class=move || {
                                    if celebrating() {
                                        "w-full py-3 bg-teal-500 text-white rounded-lg hover:bg-teal-600 transition-colors disabled:opacity-70 disabled:cursor-not-allowed animate-pulse"
                                    } else {
                                        "w-full py-3 bg-teal-500 text-white rounded-lg hover:bg-teal-600 transition-colors disabled:opacity-70 disabled:cursor-not-allowed"
                                    }
                                }
                            >
                                {move || if status.get().is_submitting() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </RevealOnScroll>

                    <Show when=celebrating>
                        <div class="text-center mt-4 text-teal-400 animate-bounce">
                            <p>"Easter egg found! 🎉"</p>
                            <p class="text-xs">"Press ↑ ↑ ↓ ↓ ← → ← → B A for more fun!"</p>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}
