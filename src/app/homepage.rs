use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About,
    contact::{Contact, Footer},
    experience::{Experience, TechnologyFocus},
    hero::Hero,
    panels::Expertise,
    use_site_controller,
};

#[component]
pub fn HomePage() -> impl IntoView {
    use_site_controller().track_window_scroll();

    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Expertise />
        <Experience />
        <TechnologyFocus />
        <Contact />
        <Footer />
    }
}
