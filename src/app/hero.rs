use leptos::prelude::*;

use crate::content::{hero_embed_url, HERO_VIDEO_TITLE, SITE_OWNER};

use super::use_site_controller;

#[component]
pub fn Hero() -> impl IntoView {
    let ctrl = use_site_controller();
    let visuals = move || ctrl.hero_visuals();

    let video_style = move || {
        let v = visuals();
        format!(
            "transform: scale({}); opacity: {}; transition: transform 0.1s ease-out, opacity 0.1s ease-out",
            v.video_scale, v.video_opacity
        )
    };
    let caption_style = move || {
        format!(
            "transform: translateX(-50%) scale({}); transition: transform 0.1s ease-out",
            visuals().caption_scale
        )
    };
    let caption_color = move || {
        if visuals().caption_on_video {
            "color: white"
        } else {
            "color: #1f2937"
        }
    };

    view! {
        <section id="home" class="pt-24 pb-24 relative overflow-hidden min-h-screen">
            <div
                class="absolute inset-4 z-0 border-4 border-white/20 rounded-lg shadow-2xl"
                style=video_style
            >
                <iframe
                    src=hero_embed_url()
                    class="w-full h-full object-cover border-0 rounded-lg"
                    allow="autoplay; encrypted-media"
                    allowfullscreen=true
                    title=HERO_VIDEO_TITLE
                ></iframe>
            </div>
            <div
                class="absolute bottom-8 left-1/2 z-20 px-4 sm:px-6 lg:px-8"
                style=caption_style
            >
                <div class="text-center max-w-4xl mx-auto">
                    <div
                        class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4 drop-shadow-lg transition-colors duration-300"
                        style=caption_color
                    >
                        {SITE_OWNER}
                    </div>
                    <h1
                        class="text-2xl md:text-3xl lg:text-4xl font-bold mb-3 drop-shadow-lg transition-colors duration-300"
                        style=caption_color
                    >
                        "Mobile Expert, Creative Thinker,"
                        <span class="block">"Inspiring Leader"</span>
                    </h1>
                </div>
            </div>
        </section>
    }
}
