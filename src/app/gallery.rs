use leptos::prelude::*;

use crate::content::{Video, GALLERY_INTRO, GALLERY_VIDEOS, SPEAKING};

#[component]
pub fn GalleryBody() -> impl IntoView {
    let (left, right) = SPEAKING.split_at(SPEAKING.len() / 2);
    view! {
        <div class="p-8 bg-gradient-to-br from-slate-50 via-gray-50 to-zinc-50 border-t border-blue-100">
            <div class="mb-8">
                <h4 class="text-3xl font-bold text-gray-900 mb-4 text-center">
                    "Featured Videos & Presentations"
                </h4>
                <p class="text-gray-600 text-center max-w-3xl mx-auto">{GALLERY_INTRO}</p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
                {GALLERY_VIDEOS.iter().map(|video| view! { <VideoCard video /> }).collect_view()}
            </div>
            <div class="bg-white rounded-2xl shadow-xl p-8">
                <h4 class="text-2xl font-bold text-gray-900 mb-6 text-center">
                    "Speaking Engagements & Expertise"
                </h4>
                <div class="grid md:grid-cols-2 gap-6">
                    {[left, right]
                        .into_iter()
                        .map(|column| {
                            view! {
                                <div class="space-y-4">
                                    {column
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <div class=format!(
                                                    "border-l-4 {} pl-4",
                                                    item.style,
                                                )>
                                                    <h5 class="font-semibold text-gray-900">
                                                        {item.title}
                                                    </h5>
                                                    <p class="text-gray-600">{item.body}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn VideoCard(video: &'static Video) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-xl overflow-hidden">
            <div class="aspect-video relative group cursor-pointer">
                <a
                    href=video.watch_url()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="block w-full h-full"
                >
                    <img
                        src=video.thumbnail()
                        alt=video.alt_text()
                        loading="lazy"
                        class="w-full h-full object-cover"
                    />
                    <div class="absolute inset-0 bg-black/20 group-hover:bg-black/40 transition-colors flex items-center justify-center">
                        <div class="bg-red-600 rounded-full p-4 group-hover:scale-110 transition-transform">
                            <svg class="w-12 h-12 text-white" fill="currentColor" viewBox="0 0 24 24">
                                <path d="M8 5v14l11-7z" />
                            </svg>
                        </div>
                    </div>
                    <div class="absolute bottom-4 left-4 right-4">
                        <h5 class="text-white font-semibold text-lg drop-shadow">{video.title}</h5>
                        <p class="text-white/90 text-sm drop-shadow">{video.subtitle}</p>
                    </div>
                </a>
            </div>
            <div class="p-4">
                <p class="text-gray-700 text-sm">{video.blurb}</p>
            </div>
        </div>
    }
}
