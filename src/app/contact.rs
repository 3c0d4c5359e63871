use leptos::{html, prelude::*};

use crate::{
    contact::{ContactDraft, ContactError, CONTACT_FORM_ACTION, UNSENT_NOTICE},
    content::{LINKEDIN_URL, SITE_OWNER},
};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

const FIELD_CLASS: &str = "w-full px-4 py-3 rounded-xl bg-white/10 text-white placeholder-white/70 border border-white/20 focus:outline-none focus:ring-2 focus:ring-purple-400";
const LABEL_CLASS: &str = "block text-lg font-medium text-white mb-2";

#[component]
pub fn Contact() -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<ContactError>);
    let (sent, set_sent) = signal(false);

    let read_draft = move || {
        let input = |r: NodeRef<html::Input>| {
            r.get_untracked()
                .map(|el| el.value())
                .unwrap_or_default()
        };
        let message = message_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default();
        ContactDraft::new(&input(name_ref), &input(email_ref), &message)
    };

    view! {
        <section
            id="contact"
            class="py-16 bg-gradient-to-br from-gray-900 via-purple-900 to-violet-900 text-white relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-r from-purple-600/20 to-cyan-600/20"></div>
            <div class="absolute top-10 right-10 w-72 h-72 bg-gradient-to-r from-pink-500 to-violet-600 rounded-full mix-blend-screen filter blur-3xl opacity-20"></div>
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <h2 class="text-4xl font-bold text-white text-center mb-8">"Contact"</h2>
                <form
                    node_ref=form_ref
                    class="space-y-6"
                    method="post"
                    action=CONTACT_FORM_ACTION
                    novalidate=true
                    on:submit=move |ev| {
                        set_sent.set(false);
                        if let Err(e) = read_draft().validate() {
                            ev.prevent_default();
                            set_error.set(Some(e));
                            return;
                        }
                        set_error.set(None);
                        if CONTACT_FORM_ACTION.is_some() {
                            // hand off to the configured form endpoint
                            return;
                        }
                        ev.prevent_default();
                        log::info!("contact form has no endpoint configured, message not sent");
                        if let Some(form) = form_ref.get_untracked() {
                            form.reset();
                        }
                        set_sent.set(true);
                    }
                >
                    <div>
                        <label for="name" class=LABEL_CLASS>"Name"</label>
                        <input
                            node_ref=name_ref
                            type="text"
                            id="name"
                            name="name"
                            class=FIELD_CLASS
                            placeholder="Your Name"
                        />
                    </div>
                    <div>
                        <label for="email" class=LABEL_CLASS>"Email"</label>
                        <input
                            node_ref=email_ref
                            type="email"
                            id="email"
                            name="email"
                            class=FIELD_CLASS
                            placeholder="you@email.com"
                        />
                    </div>
                    <div>
                        <label for="message" class=LABEL_CLASS>"Message"</label>
                        <textarea
                            node_ref=message_ref
                            id="message"
                            name="message"
                            rows="5"
                            class=FIELD_CLASS
                            placeholder="How can I help you?"
                        ></textarea>
                    </div>
                    {move || {
                        error
                            .get()
                            .map(|e| {
                                view! {
                                    <p role="alert" class="text-center text-pink-300 font-medium">
                                        {e.to_string()}
                                    </p>
                                }
                            })
                    }}
                    <Show when=move || sent.get()>
                        <p role="status" class="text-center text-cyan-300 font-medium">
                            {UNSENT_NOTICE}
                            " "
                            <a
                                href=LINKEDIN_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="underline"
                            >
                                "Open LinkedIn"
                            </a>
                        </p>
                    </Show>
                    <div class="text-center">
                        <button
                            type="submit"
                            class="inline-block px-8 py-3 bg-gradient-to-r from-purple-500 to-cyan-500 text-white font-semibold rounded-full shadow-lg hover:from-purple-400 hover:to-cyan-400 transition-all duration-300"
                        >
                            "Send Message"
                        </button>
                    </div>
                </form>
                <div class="text-center mt-8 pt-8 border-t border-white/20">
                    <p class="text-white/80 mb-4">"Or connect with me on LinkedIn"</p>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-bold rounded-lg transition-all duration-300 shadow-lg hover:shadow-xl transform hover:scale-105"
                    >
                        <LinkedInIcon />
                        "Connect on LinkedIn"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn LinkedInIcon() -> impl IntoView {
    view! {
        <svg class="w-5 h-5 mr-2" fill="currentColor" viewBox="0 0 24 24">
            <path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z" />
        </svg>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 bg-white border-t border-gray-200 text-center text-gray-500 text-sm">
            {format!("© {BUILD_YEAR} {SITE_OWNER}. All rights reserved.")}
        </footer>
    }
}
