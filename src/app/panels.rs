use leptos::prelude::*;

use crate::{
    content::{
        PanelCopy, PMM_CAMPAIGNS, PMM_DEFINITION, PMM_PILLARS, PM_DECK_URL, PM_MINDSETS,
        PM_MONITOR, PM_PRACTICES, PM_PRINCIPLES,
    },
    interaction::{PanelId, EXPERTISE_ANCHOR},
};

use super::{gallery::GalleryBody, use_site_controller};

/// Accordion of the three panels. Its anchor is where the about-section
/// shortcuts land.
#[component]
pub fn Expertise() -> impl IntoView {
    view! {
        <section id=EXPERTISE_ANCHOR class="py-16 bg-gradient-to-br from-gray-50 to-white">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-4xl font-bold text-gray-900 mb-4">"Explore My Expertise"</h2>
                </div>
                <Panel panel=PanelId::ProductMgmt>
                    <ProductManagementBody />
                </Panel>
                <Panel panel=PanelId::ProductMkt>
                    <ProductMarketingBody />
                </Panel>
                <Panel panel=PanelId::Gallery>
                    <GalleryBody />
                </Panel>
            </div>
        </section>
    }
}

#[component]
fn Panel(panel: PanelId, children: Children) -> impl IntoView {
    let ctrl = use_site_controller();
    let copy = PanelCopy::for_id(panel);
    let is_open = move || ctrl.is_section_active(panel);
    let body_id = format!("{panel}-body");
    let controls = body_id.clone();

    view! {
        <div
            id=panel.as_str()
            class="mb-6 bg-white rounded-2xl shadow-lg overflow-hidden transition-all duration-300 hover:shadow-xl group"
        >
            <button
                class=move || {
                    let palette = if is_open() {
                        copy.active_header
                    } else {
                        "bg-white hover:bg-gray-50 text-gray-900"
                    };
                    format!(
                        "w-full p-6 text-left flex items-center justify-between transition-all duration-300 relative {palette}",
                    )
                }
                aria-expanded=move || is_open().to_string()
                aria-controls=controls
                on:click=move |_| ctrl.toggle_section(panel)
            >
                <div>
                    <h3 class="text-2xl font-bold mb-2">{copy.title}</h3>
                    <p class="text-lg opacity-80">{copy.summary}</p>
                </div>
                <div class=format!(
                    "absolute top-4 right-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300 bg-gradient-to-r {} text-white px-3 py-1 rounded-full text-sm font-medium",
                    copy.gradient,
                )>"Click to explore"</div>
            </button>
            <div
                id=body_id
                class=move || {
                    if is_open() {
                        format!(
                            "overflow-hidden transition-all duration-500 ease-in-out {} opacity-100",
                            copy.open_height,
                        )
                    } else {
                        "overflow-hidden transition-all duration-500 ease-in-out max-h-0 opacity-0"
                            .to_string()
                    }
                }
            >
                {children()}
            </div>
        </div>
    }
}

#[component]
fn ProductManagementBody() -> impl IntoView {
    view! {
        <div class="p-8 bg-gradient-to-br from-emerald-50 via-teal-50 to-cyan-50 border-t border-emerald-100">
            <div class="grid md:grid-cols-2 gap-8 mb-8">
                <div class="bg-gradient-to-br from-emerald-500 to-teal-600 rounded-2xl p-6 text-white shadow-xl">
                    <h4 class="text-xl font-bold mb-4">"Core Principles"</h4>
                    <ul class="space-y-3">
                        {PM_PRINCIPLES
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <li class="flex items-start">
                                        <div class="w-2 h-2 bg-yellow-300 rounded-full mt-2 mr-3 flex-shrink-0"></div>
                                        <span>{p}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="space-y-4">
                    {PM_MINDSETS
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="bg-white rounded-xl p-4 shadow-md">
                                    <h5 class=format!(
                                        "font-semibold {} mb-2",
                                        card.style,
                                    )>{card.title}</h5>
                                    <p class="text-gray-700 text-sm">{card.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="grid md:grid-cols-3 gap-4 mb-6">
                {PM_PRACTICES
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class=format!(
                                "bg-gradient-to-br {} rounded-xl p-4 text-white text-center",
                                card.style,
                            )>
                                <h5 class="font-semibold mb-2">{card.title}</h5>
                                <p class="text-sm">{card.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="text-center">
                <div class="bg-white rounded-2xl p-6 shadow-xl inline-block mb-4">
                    <h5 class="text-lg font-semibold text-gray-900 mb-3">{PM_MONITOR.title}</h5>
                    <p class="text-gray-700 mb-4 max-w-xl">{PM_MONITOR.body}</p>
                </div>
                <div>
                    <a
                        href=PM_DECK_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center px-6 py-3 bg-emerald-500 text-white rounded-full font-semibold hover:bg-emerald-600 transition-colors"
                    >
                        "Download Full Presentation"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProductMarketingBody() -> impl IntoView {
    view! {
        <div class="p-8 bg-gradient-to-br from-violet-900 via-purple-900 to-indigo-900 text-white border-t border-purple-100">
            <div class="bg-gradient-to-br from-violet-600 to-purple-700 rounded-2xl p-6 mb-8">
                <h4 class="text-xl font-bold mb-3 text-yellow-300">"What is Product Marketing?"</h4>
                <p class="text-white/90">{PMM_DEFINITION}</p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                {PMM_PILLARS
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class=format!(
                                "bg-gradient-to-br {} rounded-xl p-4 text-center",
                                card.style,
                            )>
                                <h5 class="font-semibold mb-2">{card.title}</h5>
                                <p class="text-sm text-white/90">{card.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid md:grid-cols-2 gap-6">
                {PMM_CAMPAIGNS
                    .into_iter()
                    .map(|campaign| {
                        view! {
                            <div class="bg-white/10 backdrop-blur-sm rounded-2xl p-6">
                                <h5 class="text-lg font-semibold mb-3 text-yellow-300">
                                    {campaign.title}
                                </h5>
                                <p class="text-white/90 mb-3">{campaign.body}</p>
                                <div class="bg-black/20 rounded-lg p-3">
                                    <p class="text-xs text-cyan-300">{campaign.callout}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
