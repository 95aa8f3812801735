use leptos::prelude::*;

use super::icon::SvgIcon;
use super::navigation::Navigator;
use crate::content::{Icon, NAV_ITEMS, PROFILE, SOCIAL_LINKS};

#[component]
pub fn MobileNav() -> impl IntoView {
    let nav = expect_context::<Navigator>();

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-gray-900/95 backdrop-blur-xl border-b border-gray-700/50 lg:hidden">
            <div class="container mx-auto px-4 py-3">
                <div class="flex justify-between items-center">
                    <a href="#" class="flex items-center group">
                        <SvgIcon icon=Icon::Sparkles class="h-6 w-6 text-amber-400 mr-2" />
                        <span class="text-lg font-bold text-emerald-400">{PROFILE.short_name}</span>
                    </a>
                    <button
                        class="p-2 bg-gray-800 rounded-lg text-gray-400 hover:text-emerald-400 transition-all duration-300"
                        aria-label="Toggle navigation"
                        on:click=move |_| nav.toggle_menu()
                    >
                        {move || {
                            let icon = if nav.is_menu_open() { Icon::XMark } else { Icon::Bars3 };
                            view! { <SvgIcon icon=icon class="h-6 w-6" /> }
                        }}
                    </button>
                </div>
            </div>
            <Show when=move || nav.is_menu_open()>
                <div class="bg-gray-900/95 backdrop-blur-xl border-t border-gray-700/50">
                    <div class="container mx-auto px-4 py-4">
                        <div class="space-y-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    let id = item.id;
                                    view! {
                                        <button
                                            class=move || {
                                                if nav.is_active(id) {
                                                    "w-full flex items-center px-4 py-3 rounded-xl transition-all duration-300 bg-emerald-400/20 text-emerald-400"
                                                } else {
                                                    "w-full flex items-center px-4 py-3 rounded-xl transition-all duration-300 text-gray-400 hover:text-gray-200 hover:bg-gray-800/50"
                                                }
                                            }
                                            on:click=move |_| nav.go(id)
                                        >
                                            <div class=move || {
                                                if nav.is_active(id) {
                                                    "p-2 rounded-lg mr-3 bg-emerald-400/20"
                                                } else {
                                                    "p-2 rounded-lg mr-3 bg-gray-800"
                                                }
                                            }>
                                                <SvgIcon icon=item.icon class="h-5 w-5" />
                                            </div>
                                            <span class="font-medium">{item.label}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
pub fn SideNav() -> impl IntoView {
    let nav = expect_context::<Navigator>();

    view! {
        <nav class="fixed left-0 top-0 h-full w-20 lg:w-24 xl:w-64 z-40 bg-gray-900/95 backdrop-blur-xl border-r border-gray-700/50 shadow-2xl transition-all duration-300 hidden lg:flex">
            <div class="flex flex-col h-full w-full">
                <div class="p-4 lg:p-6 border-b border-gray-700/50">
                    <a href="#" class="flex items-center group">
                        <SvgIcon
                            icon=Icon::Sparkles
                            class="h-6 w-6 lg:h-8 lg:w-8 text-amber-400 flex-shrink-0"
                        />
                        <span class="ml-3 text-lg lg:text-xl font-bold text-emerald-400 hidden xl:block group-hover:scale-105 transition-transform duration-300">
                            {PROFILE.name}
                        </span>
                    </a>
                </div>

                <div class="flex-1 flex flex-col justify-center py-4 lg:py-8">
                    <div class="space-y-4 lg:space-y-8 px-2 lg:px-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <button
                                        class=move || {
                                            if nav.is_active(id) {
                                                "w-full flex items-center group transition-all duration-300 relative text-emerald-400 scale-105"
                                            } else {
                                                "w-full flex items-center group transition-all duration-300 relative text-gray-400 hover:text-gray-200"
                                            }
                                        }
                                        on:click=move |_| nav.go(id)
                                    >
                                        // active indicator
                                        <div class=move || {
                                            if nav.is_active(id) {
                                                "absolute -left-2 lg:-left-4 w-1 h-6 lg:h-8 bg-emerald-400 rounded-r-lg transition-all duration-300 opacity-100"
                                            } else {
                                                "absolute -left-2 lg:-left-4 w-1 h-6 lg:h-8 bg-emerald-400 rounded-r-lg transition-all duration-300 opacity-0 group-hover:opacity-50"
                                            }
                                        }></div>
                                        <div class=move || {
                                            if nav.is_active(id) {
                                                "p-2 lg:p-3 rounded-xl lg:rounded-2xl transition-all duration-300 flex-shrink-0 bg-emerald-400/20 shadow-lg"
                                            } else {
                                                "p-2 lg:p-3 rounded-xl lg:rounded-2xl transition-all duration-300 flex-shrink-0 bg-gray-800 group-hover:bg-gray-700/50"
                                            }
                                        }>
                                            <SvgIcon icon=item.icon class="h-5 w-5 lg:h-6 lg:w-6" />
                                        </div>
                                        <span class="ml-3 font-medium hidden xl:block transition-all duration-300 group-hover:translate-x-1 text-sm lg:text-base">
                                            {item.label}
                                        </span>
                                        // tooltip between lg and xl, where labels are hidden
                                        <div class="absolute left-full ml-2 px-2 py-1 bg-gray-800 text-white text-xs rounded shadow-xl opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none hidden lg:block xl:hidden">
                                            {item.label}
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="p-4 lg:p-6 border-t border-gray-700/50">
                    <div class="flex justify-center xl:justify-start space-x-3 lg:space-x-4 xl:flex-col xl:space-x-0 xl:space-y-3">
                        // WhatsApp only shows up in the footer
                        {SOCIAL_LINKS
                            .iter()
                            .take(3)
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center group text-gray-400 hover:text-emerald-400 transition-all duration-300"
                                    >
                                        <div class="p-1.5 lg:p-2 rounded-lg bg-gray-800 group-hover:bg-emerald-400/10 transition-colors duration-300">
                                            <SvgIcon icon=social.icon class="h-4 w-4 lg:h-5 lg:w-5" />
                                        </div>
                                        <span class="ml-2 text-xs hidden xl:block">{social.label}</span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
