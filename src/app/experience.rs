use leptos::prelude::*;

use crate::content::{STATS, TECH_FOCUS};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section
            id="experience"
            class="py-16 bg-gradient-to-br from-indigo-900 via-purple-900 to-pink-900 relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-r from-indigo-600/20 to-pink-600/20"></div>
            <div class="absolute top-20 left-20 w-64 h-64 bg-gradient-to-r from-yellow-400 to-orange-500 rounded-full mix-blend-screen filter blur-3xl opacity-20"></div>
            <div class="absolute bottom-20 right-20 w-80 h-80 bg-gradient-to-r from-green-400 to-blue-500 rounded-full mix-blend-screen filter blur-3xl opacity-20"></div>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <h2 class="text-4xl font-bold text-white text-center mb-12">"Experience Highlights"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {STATS
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class=format!(
                                    "bg-gradient-to-br {} rounded-2xl p-8 shadow-2xl transition-all duration-300 transform hover:scale-105",
                                    stat.style,
                                )>
                                    <div class="text-4xl font-bold text-white mb-3 drop-shadow">
                                        {stat.figure}
                                    </div>
                                    <div class="text-xl font-semibold text-white mb-3 drop-shadow">
                                        {stat.label}
                                    </div>
                                    <p class="text-white/90">{stat.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TechnologyFocus() -> impl IntoView {
    view! {
        <section class="py-16 bg-gradient-to-br from-cyan-50 via-blue-50 to-purple-50 relative">
            <div class="absolute inset-0 bg-gradient-to-r from-cyan-100/30 to-purple-100/30"></div>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <h2 class="text-4xl font-bold bg-gradient-to-r from-cyan-600 to-purple-600 bg-clip-text text-transparent text-center mb-12">
                    "Technology Focus Areas"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {TECH_FOCUS
                        .into_iter()
                        .map(|area| {
                            view! {
                                <div class=format!(
                                    "group text-center p-8 bg-gradient-to-br {} rounded-2xl shadow-xl hover:shadow-2xl transition-all duration-300 transform hover:scale-105",
                                    area.style,
                                )>
                                    <div class="w-16 h-16 bg-white/20 rounded-full mx-auto mb-4 flex items-center justify-center backdrop-blur-sm">
                                        <div class="w-8 h-8 bg-gradient-to-r from-white to-white/60 rounded-full"></div>
                                    </div>
                                    <h3 class="text-xl font-semibold text-white mb-3 drop-shadow">
                                        {area.title}
                                    </h3>
                                    <p class="text-white/90">{area.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
