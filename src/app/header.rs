use leptos::{either::Either, html, prelude::*};
use leptos_use::on_click_outside;

use crate::{
    content::{NavLink, PanelCopy, NAV_LINKS},
    interaction::{NavTarget, PanelId},
};

use super::use_site_controller;

const NAV_BUTTON: &str = "w-44 px-4 py-3 text-white hover:text-gray-900 hover:bg-white rounded-lg transition-all duration-300 font-bold shadow-sm hover:shadow-md text-center text-base";
const MOBILE_BUTTON: &str = "block w-full text-left py-3 px-4 text-gray-600 hover:text-gray-900 hover:bg-gray-50 rounded-xl transition-all duration-300 font-medium";

#[component]
pub fn Header() -> impl IntoView {
    let ctrl = use_site_controller();
    let desktop_ref = NodeRef::<html::Div>::new();
    let _ = on_click_outside(desktop_ref, move |_| ctrl.close_on_outside_click(false));

    let nav_class = move || {
        let offset = if ctrl.nav_visible() {
            "translate-y-0"
        } else {
            "-translate-y-full"
        };
        format!("bg-white/95 backdrop-blur-md shadow-lg fixed w-full top-0 z-50 border-b border-gray-200/50 transition-transform duration-300 {offset}")
    };

    view! {
        <Show when=move || ctrl.menu_open()>
            <div
                class="fixed inset-0 z-40 bg-black/20 lg:hidden"
                aria-hidden="true"
                on:click=move |_| ctrl.close_menu()
            ></div>
        </Show>
        <nav class=nav_class>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-center items-center py-4">
                    <div
                        node_ref=desktop_ref
                        class="hidden lg:flex items-center space-x-1 bg-gradient-to-r from-purple-500 to-blue-600 backdrop-blur-sm rounded-xl px-4 py-3 shadow-lg border border-purple-400/50"
                    >
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| match NavTarget::from(link.target) {
                                NavTarget::Panel(id) => {
                                    Either::Left(view! { <PanelDropdown panel=id label=link.label /> })
                                }
                                NavTarget::Anchor(_) => Either::Right(view! { <NavButton link /> }),
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="lg:hidden p-3 rounded-full bg-gray-800 text-white shadow-lg hover:bg-gray-700 transition-all duration-300 absolute right-4"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || ctrl.menu_open().to_string()
                        on:click=move |_| ctrl.toggle_menu()
                    >
                        {move || {
                            if ctrl.menu_open() {
                                Either::Left(view! { <CloseIcon /> })
                            } else {
                                Either::Right(view! { <MenuIcon /> })
                            }
                        }}
                    </button>
                </div>
                <Show when=move || ctrl.menu_open()>
                    <MobileMenu />
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn NavButton(link: NavLink) -> impl IntoView {
    let ctrl = use_site_controller();
    view! {
        <button class=NAV_BUTTON on:click=move |_| ctrl.navigate_to(link.target)>
            {link.label}
        </button>
    }
}

#[component]
fn PanelDropdown(panel: PanelId, label: &'static str) -> impl IntoView {
    let ctrl = use_site_controller();
    let copy = PanelCopy::for_id(panel);
    let is_open = move || ctrl.is_dropdown_open(panel);
    view! {
        <div class="relative">
            <button
                class=NAV_BUTTON
                aria-haspopup="true"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| ctrl.toggle_dropdown(panel)
            >
                {label}
                <span class=move || {
                    if is_open() {
                        "inline-block ml-1 rotate-180 transition-transform"
                    } else {
                        "inline-block ml-1 transition-transform"
                    }
                }>"▾"</span>
            </button>
            <Show when=is_open>
                <div class="absolute left-0 top-full mt-3 w-72 bg-white rounded-xl shadow-2xl border border-gray-200/50 p-4 text-left">
                    <p class="font-semibold text-gray-900 mb-1">{copy.title}</p>
                    <p class="text-sm text-gray-600 mb-4">{copy.summary}</p>
                    <button
                        class=format!(
                            "w-full px-4 py-2 rounded-lg text-white font-semibold bg-gradient-to-r {} hover:opacity-90 transition-opacity",
                            copy.gradient,
                        )
                        on:click=move |_| ctrl.navigate_to(panel.as_str())
                    >
                        {copy.tagline}
                        " →"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let ctrl = use_site_controller();
    view! {
        <div class="lg:hidden pb-4 bg-white/95 backdrop-blur-md rounded-2xl mt-4 border border-gray-200/50 shadow-xl mx-4 mb-4">
            <div class="p-2 space-y-1">
                {NAV_LINKS
                    .into_iter()
                    .map(|link| {
                        view! {
                            <button class=MOBILE_BUTTON on:click=move |_| ctrl.navigate_to(link.target)>
                                {link.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="18" y2="18" />
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </svg>
    }
}
