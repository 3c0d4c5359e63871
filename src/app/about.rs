use leptos::prelude::*;

use crate::content::{PanelCopy, ABOUT_PARAGRAPHS, KEY_EXPERTISE, PANELS};

use super::use_site_controller;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-16 bg-gradient-to-br from-gray-50 to-white relative">
            <div class="absolute inset-0 bg-gradient-to-r from-blue-100/50 to-purple-100/50"></div>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-4xl font-bold bg-gradient-to-r from-purple-600 to-blue-600 bg-clip-text text-transparent mb-6">
                            "About Me"
                        </h2>
                        {ABOUT_PARAGRAPHS
                            .into_iter()
                            .map(|p| {
                                view! { <p class="text-lg text-gray-700 mb-6 leading-relaxed">{p}</p> }
                            })
                            .collect_view()}
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mt-8">
                            {PANELS.iter().map(|copy| view! { <RevealButton copy /> }).collect_view()}
                        </div>
                    </div>
                    <KeyExpertise />
                </div>
            </div>
        </section>
    }
}

#[component]
fn RevealButton(copy: &'static PanelCopy) -> impl IntoView {
    let ctrl = use_site_controller();
    let id = copy.id;
    view! {
        <button
            class=format!(
                "group bg-gradient-to-r {} text-white rounded-xl p-4 text-center transition-all duration-300 transform hover:scale-105 hover:opacity-90 shadow-lg",
                copy.gradient,
            )
            on:click=move |_| ctrl.reveal_panel(id)
        >
            <div class="font-semibold mb-1">{copy.short_title}</div>
            <div class="text-sm opacity-90">{copy.tagline}</div>
        </button>
    }
}

#[component]
fn KeyExpertise() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-purple-500 to-blue-600 rounded-2xl p-8 text-white shadow-2xl transform hover:scale-105 transition-transform duration-300">
            <h3 class="text-2xl font-bold text-white mb-6">"Key Expertise"</h3>
            <ul class="space-y-4">
                {KEY_EXPERTISE
                    .into_iter()
                    .map(|(label, dot)| {
                        view! {
                            <li class="flex items-center">
                                <div class=format!(
                                    "w-3 h-3 bg-gradient-to-r {dot} rounded-full mr-4 shadow-lg",
                                )></div>
                                <span class="text-white/95 font-medium">{label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
