use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
};

use crate::contact::{ContactError, ContactForm, Field};
use crate::portfolio::{SectionId, PROFILE};

use super::homepage::SocialLinks;
use super::section::{AnimatedSection, SectionHeading};
use super::PageState;

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-gray-700 bg-gray-900 focus:outline-none focus:ring-2 focus:ring-cyan-500";

#[component]
pub fn ContactSection(state: PageState) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (error, set_error) = signal(None::<ContactError>);

    // never leaves the page: the browser submit is cancelled and only the
    // acknowledgment dialog opens
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ContactForm::submit) {
            Ok(ack) => {
                set_error.set(None);
                form.set(ContactForm::default());
                state.modal.update(|m| m.open(ack));
            }
            Err(e) => {
                log::debug!("contact form incomplete: {e}");
                set_error.set(Some(e));
            }
        }
    };

    let value = move |field: Field| move || form.with(|f| f.get(field).to_string());
    let on_input = move |field: Field| {
        move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)))
    };

    view! {
        <AnimatedSection section=SectionId::Contact state shaded=true>
            <SectionHeading title="Contact" subtitle="Have a question or want to work together?" />
            <div class="grid md:grid-cols-2 gap-12">
                <div class="space-y-4">
                    <p class="leading-relaxed">
                        "My inbox is always open. Drop a note through the form or reach me directly at "
                        <a href=PROFILE.mailto() target="_blank" class="text-cyan-400 hover:underline">
                            {PROFILE.email}
                        </a>
                        "."
                    </p>
                    <SocialLinks />
                </div>
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label for="contact-name" class="block mb-1 text-sm">"Name"</label>
                        <input
                            id="contact-name"
                            name="name"
                            type="text"
                            required=true
                            class=INPUT_CLASS
                            prop:value=value(Field::Name)
                            on:input=on_input(Field::Name)
                        />
                    </div>
                    <div>
                        <label for="contact-email" class="block mb-1 text-sm">"Email"</label>
                        <input
                            id="contact-email"
                            name="email"
                            type="email"
                            required=true
                            class=INPUT_CLASS
                            prop:value=value(Field::Email)
                            on:input=on_input(Field::Email)
                        />
                    </div>
                    <div>
                        <label for="contact-message" class="block mb-1 text-sm">"Message"</label>
                        <textarea
                            id="contact-message"
                            name="message"
                            rows="5"
                            required=true
                            class=INPUT_CLASS
                            prop:value=value(Field::Message)
                            on:input=on_input(Field::Message)
                        ></textarea>
                    </div>
                    {move || {
                        error
                            .get()
                            .map(|e| view! { <p class="text-sm text-red-400" role="alert">{e.to_string()}</p> })
                    }}
                    <button
                        type="submit"
                        class="px-6 py-3 rounded-md bg-cyan-500 hover:bg-cyan-400 text-gray-900 font-medium transition-colors"
                    >
                        "Send Message"
                    </button>
                </form>
            </div>
        </AnimatedSection>
    }
}

#[component]
pub fn Modal(state: PageState) -> impl IntoView {
    let close = move || state.modal.update(|m| m.close());
    let message = move || state.modal.with(|m| m.message().unwrap_or_default().to_string());

    view! {
        <Show when=move || state.modal.with(|m| m.is_open())>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 px-4"
                on:click=move |_| close()
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    class="w-full max-w-sm rounded-lg bg-gray-800 border border-gray-700 p-6 text-center shadow-2xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <p class="mb-6 text-lg">{message}</p>
                    <button
                        class="px-4 py-2 rounded-md bg-cyan-500 hover:bg-cyan-400 text-gray-900 font-medium"
                        on:click=move |_| close()
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
