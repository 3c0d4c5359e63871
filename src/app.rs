mod about;
mod contact;
mod controller;
mod experience;
mod gallery;
mod header;
mod hero;
mod homepage;
mod panels;

pub use controller::{scroll_to_anchor, use_site_controller, SiteController};

use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::SITE_OWNER, interaction::InteractionConfig};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    SiteController::provide(InteractionConfig::default());

    view! {
        <Title formatter=|title| format!("{SITE_OWNER} - {title}") />
        <Meta
            name="description"
            content="Suzanne De Silva - Mobile Expert, Creative Thinker, Inspiring Leader. Product management, product marketing and launch presentations."
        />

        <Router>
            <Header />
            <main class="min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
